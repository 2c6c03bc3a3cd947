//! Input validation owned by the student domain.
//!
//! The store trusts its callers; every command validates here before writing.

use super::record::Student;
use crate::error::ApiError;
use std::ops::RangeInclusive;

pub const STUDENT_ID_LEN: usize = 7;
pub const AGE_RANGE: RangeInclusive<u32> = 16..=120;

pub fn validate_student_id(id: &str) -> Result<(), ApiError> {
    if id.len() != STUDENT_ID_LEN || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Validation(
            "Student ID must be a 7-digit number.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_age(age: u32) -> Result<(), ApiError> {
    if !AGE_RANGE.contains(&age) {
        return Err(ApiError::Validation(format!(
            "Age must be between {} and {}.",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        )));
    }
    Ok(())
}

/// Validate a full record before it is handed to the store.
pub fn validate_student(student: &Student) -> Result<(), ApiError> {
    validate_student_id(&student.id)?;
    validate_age(student.age)
}
