//! Aggregate figures over the full record set.

use crate::student::domain::Student;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Count of students enrolled in one curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumCount {
    pub curriculum: String,
    pub count: usize,
}

/// Summary statistics. Ages are 0 when there are no records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStatistics {
    pub total_students: usize,
    pub average_age: f64,
    pub min_age: u32,
    pub max_age: u32,
    /// Sorted by count descending, then by curriculum name.
    pub curriculum_distribution: Vec<CurriculumCount>,
}

impl StudentStatistics {
    pub fn from_students(students: &[Student]) -> Self {
        if students.is_empty() {
            return Self {
                total_students: 0,
                average_age: 0.0,
                min_age: 0,
                max_age: 0,
                curriculum_distribution: Vec::new(),
            };
        }

        let total_age: u64 = students.iter().map(|s| u64::from(s.age)).sum();
        let min_age = students.iter().map(|s| s.age).min().unwrap_or(0);
        let max_age = students.iter().map(|s| s.age).max().unwrap_or(0);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for student in students {
            *counts.entry(student.curriculum.as_str()).or_insert(0) += 1;
        }
        let mut curriculum_distribution: Vec<CurriculumCount> = counts
            .into_iter()
            .map(|(curriculum, count)| CurriculumCount {
                curriculum: curriculum.to_string(),
                count,
            })
            .collect();
        curriculum_distribution.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.curriculum.cmp(&b.curriculum))
        });

        Self {
            total_students: students.len(),
            average_age: total_age as f64 / students.len() as f64,
            min_age,
            max_age,
            curriculum_distribution,
        }
    }
}
