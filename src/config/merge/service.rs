//! MergeService: orchestrates sources, applies merge policy, deserializes to StudentsConfig.

use crate::config::sources::{environment, working_dir_file};
use crate::config::StudentsConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the working directory and environment.
    /// Precedence: defaults (lowest) -> `students.toml` -> environment (highest).
    pub fn load(working_dir: &Path) -> Result<StudentsConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = working_dir_file::add_to_builder(builder, working_dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<StudentsConfig, ConfigError> {
        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
