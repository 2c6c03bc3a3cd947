//! Format student listings and statistics as text or JSON.

use crate::error::{ApiError, StorageError};
use crate::student::{Student, StudentStatistics};
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub const NO_MATCHES_MESSAGE: &str = "No students found matching the search criteria.";

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render students as a table, one row per record.
pub fn format_students_table(students: &[Student]) -> String {
    if students.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Surname", "Age", "Curriculum"]);
    for s in students {
        table.add_row(vec![
            s.id.clone(),
            s.name.clone(),
            s.surname.clone(),
            s.age.to_string(),
            s.curriculum.clone(),
        ]);
    }
    table.to_string()
}

/// Single-record detail view used after add and edit.
pub fn format_student_detail(student: &Student) -> String {
    let mut out = String::new();
    out.push_str(&format!("  ID:         {}\n", student.id));
    out.push_str(&format!("  Name:       {}\n", student.name));
    out.push_str(&format!("  Surname:    {}\n", student.surname));
    out.push_str(&format!("  Age:        {}\n", student.age));
    out.push_str(&format!("  Curriculum: {}", student.curriculum));
    out
}

pub fn format_statistics_text(stats: &StudentStatistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Statistics")));
    out.push_str(&format!("  Total students: {}\n", stats.total_students));
    out.push_str(&format!("  Average age: {:.2}\n", stats.average_age));
    out.push_str(&format!(
        "  Age range: {} - {}\n",
        stats.min_age, stats.max_age
    ));

    if stats.curriculum_distribution.is_empty() {
        return out;
    }
    out.push('\n');
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Curriculum distribution")
    ));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Curriculum", "Students"]);
    for row in &stats.curriculum_distribution {
        table.add_row(vec![row.curriculum.clone(), row.count.to_string()]);
    }
    out.push_str(&table.to_string());
    out
}

/// Pretty JSON for `--format json`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::StorageError(StorageError::Serialization(e.to_string())))
}
