//! Student command service: single entry point per student CLI command variant.
//!
//! Owns validation and workflow logic; the CLI parses, calls one method per
//! variant, and formats output.

use crate::error::{ApiError, StorageError};
use crate::student::domain::{
    validate_age, validate_student, validate_student_id, Student, StudentPatch,
};
use crate::student::query::SearchFilter;
use crate::student::repository::{read_record_array, StudentRepository};
use crate::student::stats::StudentStatistics;
use std::path::{Path, PathBuf};

pub struct StudentCommandService;

/// Result of student add command.
#[derive(Debug, Clone)]
pub struct StudentAddResult {
    pub id: String,
    pub path: PathBuf,
    pub replaced: bool,
}

/// Result of student edit command.
#[derive(Debug, Clone)]
pub struct StudentEditResult {
    pub before: Student,
    pub after: Student,
}

/// Result of student delete command.
#[derive(Debug, Clone)]
pub struct StudentDeleteResult {
    pub id: String,
    pub existed: bool,
}

/// Result of student search / show command.
#[derive(Debug, Clone)]
pub struct StudentSearchResult {
    pub students: Vec<Student>,
}

/// Result of export and import commands.
#[derive(Debug, Clone)]
pub struct StudentTransferResult {
    pub path: PathBuf,
    pub count: usize,
}

impl StudentCommandService {
    /// Add a new student. An existing id is an error unless `overwrite` is set.
    pub fn add(
        repo: &dyn StudentRepository,
        student: Student,
        overwrite: bool,
    ) -> Result<StudentAddResult, ApiError> {
        validate_student(&student)?;

        // A corrupt file under the same id may be replaced when overwriting.
        let replaced = match repo.get(&student.id) {
            Ok(existing) => existing.is_some(),
            Err(StorageError::Corrupt { .. }) if overwrite => true,
            Err(e) => return Err(e.into()),
        };
        if replaced && !overwrite {
            return Err(ApiError::StudentExists(student.id));
        }

        repo.add(&student)?;
        let path = repo.path_for(&student.id)?;
        tracing::info!(id = %student.id, replaced, "Student added");
        Ok(StudentAddResult {
            id: student.id,
            path,
            replaced,
        })
    }

    /// Add a student, asking `confirm_overwrite` before replacing an existing id.
    ///
    /// Declining returns the original `StudentExists` error and leaves the
    /// stored record untouched.
    pub fn add_or_replace(
        repo: &dyn StudentRepository,
        student: Student,
        confirm_overwrite: impl FnOnce(&str) -> Result<bool, ApiError>,
    ) -> Result<StudentAddResult, ApiError> {
        match Self::add(repo, student.clone(), false) {
            Err(ApiError::StudentExists(id)) => {
                if confirm_overwrite(&id)? {
                    Self::add(repo, student, true)
                } else {
                    Err(ApiError::StudentExists(id))
                }
            }
            other => other,
        }
    }

    /// Look up one student by id.
    pub fn get(repo: &dyn StudentRepository, id: &str) -> Result<Student, ApiError> {
        validate_student_id(id)?;
        repo.get(id)?
            .ok_or_else(|| ApiError::StudentNotFound(id.to_string()))
    }

    /// Apply `patch` to an existing student.
    pub fn edit(
        repo: &dyn StudentRepository,
        id: &str,
        patch: &StudentPatch,
    ) -> Result<StudentEditResult, ApiError> {
        let before = Self::get(repo, id)?;
        if let Some(age) = patch.age {
            validate_age(age)?;
        }

        let after = patch.apply(&before);
        repo.update(&after)?;
        tracing::info!(id = %id, "Student updated");
        Ok(StudentEditResult { before, after })
    }

    pub fn delete(repo: &dyn StudentRepository, id: &str) -> Result<StudentDeleteResult, ApiError> {
        validate_student_id(id)?;
        let existed = repo.delete(id)?;
        tracing::info!(id = %id, existed, "Student deleted");
        Ok(StudentDeleteResult {
            id: id.to_string(),
            existed,
        })
    }

    /// Search with a structured filter; results are sorted by id.
    pub fn search(
        repo: &dyn StudentRepository,
        filter: SearchFilter,
    ) -> Result<StudentSearchResult, ApiError> {
        let mut students = repo.search(&filter)?;
        students.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(StudentSearchResult { students })
    }

    /// Search with a free-text `key=value,...` query.
    pub fn search_query(
        repo: &dyn StudentRepository,
        query: &str,
    ) -> Result<StudentSearchResult, ApiError> {
        Self::search(repo, SearchFilter::parse(query))
    }

    pub fn statistics(repo: &dyn StudentRepository) -> Result<StudentStatistics, ApiError> {
        Ok(repo.statistics()?)
    }

    pub fn export(
        repo: &dyn StudentRepository,
        path: &Path,
    ) -> Result<StudentTransferResult, ApiError> {
        let count = repo.export(path)?;
        Ok(StudentTransferResult {
            path: path.to_path_buf(),
            count,
        })
    }

    /// Import an exported file. Every record is validated before any is written.
    pub fn import(
        repo: &dyn StudentRepository,
        path: &Path,
    ) -> Result<StudentTransferResult, ApiError> {
        if !path.exists() {
            return Err(ApiError::ImportFileNotFound(path.to_path_buf()));
        }

        let students = read_record_array(path)?;
        for student in &students {
            validate_student(student).map_err(|e| {
                ApiError::Validation(format!("Invalid record {:?} in import file: {}", student.id, e))
            })?;
        }
        for student in &students {
            repo.add(student)?;
        }

        tracing::info!(count = students.len(), path = %path.display(), "Students imported");
        Ok(StudentTransferResult {
            path: path.to_path_buf(),
            count: students.len(),
        })
    }
}
