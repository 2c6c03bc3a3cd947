//! File-per-record repository sharded by the first two characters of the id.
//!
//! Layout: `<root>/<id[..2]>/<id>.json`. Every query walks the whole tree;
//! nothing is cached between calls.

use crate::error::StorageError;
use crate::student::domain::Student;
use crate::student::query::SearchFilter;
use crate::student::repository::{CorruptRecordPolicy, StudentRepository};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

const RECORD_EXTENSION: &str = "json";
const SHARD_LEN: usize = 2;

pub struct ShardedFileRepository {
    root: PathBuf,
    on_corrupt: CorruptRecordPolicy,
}

impl ShardedFileRepository {
    /// Handle on `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            on_corrupt: CorruptRecordPolicy::default(),
        }
    }

    /// Handle on `root`, creating the directory if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = Self::new(root);
        std::fs::create_dir_all(&repo.root)?;
        Ok(repo)
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptRecordPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    fn shard_dir(&self, id: &str) -> Result<PathBuf, StorageError> {
        if id.contains(['/', '\\']) || id.contains("..") {
            return Err(StorageError::InvalidPath(format!(
                "Student id contains path characters: {:?}",
                id
            )));
        }
        let shard_end = id
            .char_indices()
            .nth(SHARD_LEN - 1)
            .map(|(i, c)| i + c.len_utf8())
            .ok_or_else(|| {
                StorageError::InvalidPath(format!(
                    "Student id too short for a shard key: {:?}",
                    id
                ))
            })?;
        Ok(self.root.join(&id[..shard_end]))
    }

    fn scan(&self, filter: &SearchFilter) -> Result<Vec<Student>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        // Records live exactly at `<shard>/<id>.json`; anything else under the
        // root (an export written there, stray notes) is not a record.
        let mut found = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    if self.on_corrupt == CorruptRecordPolicy::Abort {
                        return Err(StorageError::IoError(e.into()));
                    }
                    tracing::warn!(
                        "Failed to read directory entry in {}: {}",
                        self.root.display(),
                        e
                    );
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension() != Some(OsStr::new(RECORD_EXTENSION))
                || !is_in_own_shard(path)
            {
                continue;
            }

            match read_record(path) {
                Ok(student) => {
                    if filter.matches(&student) {
                        found.push(student);
                    }
                }
                Err(e) => match self.on_corrupt {
                    CorruptRecordPolicy::Abort => return Err(e),
                    CorruptRecordPolicy::Skip => {
                        tracing::warn!("Skipping unreadable record: {}", e);
                    }
                },
            }
        }

        Ok(found)
    }
}

impl StudentRepository for ShardedFileRepository {
    fn add(&self, student: &Student) -> Result<(), StorageError> {
        let path = self.path_for(&student.id)?;
        let json = serde_json::to_string(student)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        write_atomic(&path, json.as_bytes())?;
        tracing::debug!(id = %student.id, path = %path.display(), "Wrote student record");
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Student>, StorageError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        read_record(&path).map(Some)
    }

    fn update(&self, student: &Student) -> Result<(), StorageError> {
        // The rename in add replaces the old file in one step.
        self.add(student)
    }

    fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let path = self.path_for(id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(id = %id, path = %path.display(), "Deleted student record");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    fn search(&self, filter: &SearchFilter) -> Result<Vec<Student>, StorageError> {
        self.scan(filter)
    }

    fn export(&self, path: &Path) -> Result<usize, StorageError> {
        let students = self.list_all()?;
        let json = serde_json::to_string_pretty(&students)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        write_atomic(path, json.as_bytes())?;
        tracing::info!(count = students.len(), path = %path.display(), "Exported students");
        Ok(students.len())
    }

    fn import(&self, path: &Path) -> Result<usize, StorageError> {
        let students = read_record_array(path)?;
        for student in &students {
            self.add(student)?;
        }
        tracing::info!(count = students.len(), path = %path.display(), "Imported students");
        Ok(students.len())
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StorageError> {
        Ok(self
            .shard_dir(id)?
            .join(format!("{}.{}", id, RECORD_EXTENSION)))
    }
}

fn is_in_own_shard(path: &Path) -> bool {
    let shard = path.parent().and_then(Path::file_name).and_then(OsStr::to_str);
    let stem = path.file_stem().and_then(OsStr::to_str);
    match (shard, stem) {
        (Some(shard), Some(stem)) => stem.starts_with(shard),
        _ => false,
    }
}

/// Read a JSON array of records as produced by `export`.
pub fn read_record_array(path: &Path) -> Result<Vec<Student>, StorageError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn read_record(path: &Path) -> Result<Student, StorageError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write through a temporary sibling and rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StorageError::IoError(e.error))?;
    Ok(())
}
