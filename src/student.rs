//! Student records: domain model, search, statistics, and file-backed storage.

pub mod commands;
pub mod domain;
pub mod query;
pub mod repository;
pub mod stats;

pub use commands::{
    StudentAddResult, StudentCommandService, StudentDeleteResult, StudentEditResult,
    StudentSearchResult, StudentTransferResult,
};
pub use domain::{Student, StudentPatch};
pub use query::SearchFilter;
pub use repository::{CorruptRecordPolicy, ShardedFileRepository, StudentRepository};
pub use stats::{CurriculumCount, StudentStatistics};
