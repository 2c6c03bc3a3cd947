use serde::{Deserialize, Serialize};

/// One student's stored data.
///
/// Field names serialize in lowercase; the PascalCase names written by the
/// earlier console tool are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// 7-digit identifier; its first two characters pick the shard directory.
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Surname")]
    pub surname: String,
    #[serde(alias = "Age")]
    pub age: u32,
    #[serde(alias = "Curriculum")]
    pub curriculum: String,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: u32,
        curriculum: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            age,
            curriculum: curriculum.into(),
        }
    }
}

/// Partial edit of an existing record. `None` or an empty string keeps the
/// stored value.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<u32>,
    pub curriculum: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.age.is_none()
            && self.curriculum.is_none()
    }

    /// Apply the patch to a copy of `student`.
    pub fn apply(&self, student: &Student) -> Student {
        fn pick(new: &Option<String>, old: &str) -> String {
            match new.as_deref() {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => old.to_string(),
            }
        }

        Student {
            id: student.id.clone(),
            name: pick(&self.name, &student.name),
            surname: pick(&self.surname, &student.surname),
            age: self.age.unwrap_or(student.age),
            curriculum: pick(&self.curriculum, &student.curriculum),
        }
    }
}
