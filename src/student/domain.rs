pub mod record;
pub mod validation;

pub use record::{Student, StudentPatch};
pub use validation::{validate_age, validate_student, validate_student_id};
