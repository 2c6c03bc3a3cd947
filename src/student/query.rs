//! Search filters over student records.

use crate::student::domain::Student;
use serde::{Deserialize, Serialize};

/// Optional predicates combined with logical AND. Absent or empty text
/// filters match every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Compared as `i64` so out-of-range ages such as `-1` match nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<String>,
}

impl SearchFilter {
    /// Filter that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_curriculum(mut self, curriculum: impl Into<String>) -> Self {
        self.curriculum = Some(curriculum.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        !has_text(&self.name)
            && !has_text(&self.surname)
            && self.age.is_none()
            && !has_text(&self.curriculum)
    }

    /// Parse a free-text query of the form `name=ana, age=20`.
    ///
    /// An empty query or `ALL` matches everything. Recognized keys are
    /// `name`, `surname`, `age` and `curriculum`; unknown keys, criteria
    /// without exactly one `=`, and non-numeric ages are ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        let mut filter = Self::default();
        if query.is_empty() || query.eq_ignore_ascii_case("all") {
            return filter;
        }

        for criterion in query.split(',') {
            let parts: Vec<&str> = criterion.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            let key = parts[0].trim().to_lowercase();
            let value = parts[1].trim();

            match key.as_str() {
                "name" => filter.name = Some(value.to_string()),
                "surname" => filter.surname = Some(value.to_string()),
                "age" => {
                    if let Ok(age) = value.parse::<i64>() {
                        filter.age = Some(age);
                    }
                }
                "curriculum" => filter.curriculum = Some(value.to_string()),
                _ => {
                    tracing::debug!(key = %key, "Ignoring unknown search key");
                }
            }
        }

        filter
    }

    pub fn matches(&self, student: &Student) -> bool {
        contains_ci(&student.name, &self.name)
            && contains_ci(&student.surname, &self.surname)
            && self.age.map_or(true, |age| i64::from(student.age) == age)
            && contains_ci(&student.curriculum, &self.curriculum)
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle.as_deref() {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
