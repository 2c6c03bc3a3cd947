//! Terminal prompts used by `add`/`edit`/`delete` and the interactive menu.

use crate::error::ApiError;
use crate::student::domain::{validate_age, validate_student_id};
use crate::student::{Student, StudentPatch};
use dialoguer::{Confirm, Input, Select};

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::ConfigError(format!("Failed to get user input: {}", e))
}

/// Partially filled student from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct StudentDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<u32>,
    pub curriculum: Option<String>,
}

impl StudentDraft {
    /// The draft as a record when every field was supplied.
    pub fn complete(&self) -> Option<Student> {
        Some(Student::new(
            self.id.clone()?,
            self.name.clone()?,
            self.surname.clone()?,
            self.age?,
            self.curriculum.clone()?,
        ))
    }
}

/// Ask for every field the draft is missing.
pub fn prompt_student(draft: &StudentDraft) -> Result<Student, ApiError> {
    if let Some(student) = draft.complete() {
        return Ok(student);
    }

    let id = match &draft.id {
        Some(id) => id.clone(),
        None => Input::<String>::new()
            .with_prompt("Enter student ID (7 digits)")
            .validate_with(|v: &String| validate_student_id(v).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(input_error)?,
    };
    let name = text_or_prompt(&draft.name, "Enter name")?;
    let surname = text_or_prompt(&draft.surname, "Enter surname")?;
    let age = match draft.age {
        Some(age) => age,
        None => Input::<u32>::new()
            .with_prompt("Enter age")
            .validate_with(|v: &u32| validate_age(*v).map_err(|e| e.to_string()))
            .interact_text()
            .map_err(input_error)?,
    };
    let curriculum = text_or_prompt(&draft.curriculum, "Enter curriculum")?;

    Ok(Student::new(id, name, surname, age, curriculum))
}

fn text_or_prompt(value: &Option<String>, prompt: &str) -> Result<String, ApiError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(input_error),
    }
}

/// Ask for new values, defaulting to the stored ones.
pub fn prompt_patch(current: &Student) -> Result<StudentPatch, ApiError> {
    let name: String = Input::new()
        .with_prompt("Enter name")
        .default(current.name.clone())
        .interact_text()
        .map_err(input_error)?;
    let surname: String = Input::new()
        .with_prompt("Enter surname")
        .default(current.surname.clone())
        .interact_text()
        .map_err(input_error)?;
    let age: u32 = Input::new()
        .with_prompt("Enter age")
        .default(current.age)
        .validate_with(|v: &u32| validate_age(*v).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(input_error)?;
    let curriculum: String = Input::new()
        .with_prompt("Enter curriculum")
        .default(current.curriculum.clone())
        .interact_text()
        .map_err(input_error)?;

    Ok(StudentPatch {
        name: Some(name),
        surname: Some(surname),
        age: Some(age),
        curriculum: Some(curriculum),
    })
}

pub fn prompt_text(prompt: &str) -> Result<String, ApiError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

pub fn confirm(prompt: &str) -> Result<bool, ApiError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

pub fn select(prompt: &str, items: &[&str]) -> Result<usize, ApiError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(input_error)
}
