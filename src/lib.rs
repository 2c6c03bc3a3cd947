//! Student Records: file-per-record student registry
//!
//! Stores each student as a JSON file sharded by the first two characters of
//! its identifier, with search, statistics, and import/export over full scans.

pub mod config;
pub mod error;
pub mod logging;
pub mod student;
pub mod tooling;
