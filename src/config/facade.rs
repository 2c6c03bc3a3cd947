//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::StudentsConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `students.toml` in `working_dir` and environment.
    pub fn load(working_dir: &Path) -> Result<StudentsConfig, ConfigError> {
        MergeService::load(working_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<StudentsConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
