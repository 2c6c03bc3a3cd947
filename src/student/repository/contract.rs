use crate::error::StorageError;
use crate::student::domain::Student;
use crate::student::query::SearchFilter;
use crate::student::stats::StudentStatistics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a scan does when a record file cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptRecordPolicy {
    /// Log a warning and leave the file out of the results.
    #[default]
    Skip,
    /// Fail the whole scan.
    Abort,
}

/// Persistence port for student records.
pub trait StudentRepository {
    /// Write `student`, silently replacing any record with the same id.
    fn add(&self, student: &Student) -> Result<(), StorageError>;

    /// Load a record; `Ok(None)` when nothing is stored under `id`.
    fn get(&self, id: &str) -> Result<Option<Student>, StorageError>;

    /// Replace the stored record in a single write.
    fn update(&self, student: &Student) -> Result<(), StorageError>;

    /// Remove a record. Returns whether a file existed.
    fn delete(&self, id: &str) -> Result<bool, StorageError>;

    /// Every record matching `filter`, in traversal order.
    fn search(&self, filter: &SearchFilter) -> Result<Vec<Student>, StorageError>;

    /// Write the full record set to `path` as one JSON array.
    fn export(&self, path: &Path) -> Result<usize, StorageError>;

    /// Upsert every record of a JSON array file. A missing file surfaces as
    /// an `IoError` of kind `NotFound`.
    fn import(&self, path: &Path) -> Result<usize, StorageError>;

    /// Storage root directory.
    fn root(&self) -> &Path;

    fn list_all(&self) -> Result<Vec<Student>, StorageError> {
        self.search(&SearchFilter::all())
    }

    fn statistics(&self) -> Result<StudentStatistics, StorageError> {
        Ok(StudentStatistics::from_students(&self.list_all()?))
    }

    /// Path a record with `id` is stored at.
    fn path_for(&self, id: &str) -> Result<PathBuf, StorageError>;
}
