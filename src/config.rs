//! Configuration: storage location, scan policy, and logging.
//!
//! Sources are layered by [`ConfigLoader`]; see `merge::service` for precedence.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::student::repository::CorruptRecordPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "students.toml";

/// Prefix for environment overrides, e.g. `STUDENTS_STORAGE__ROOT`.
pub const ENV_PREFIX: &str = "STUDENTS";

pub(crate) fn default_root() -> PathBuf {
    PathBuf::from("students")
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Record root directory; relative paths resolve against the working directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Behaviour when a scan meets an unreadable record file.
    #[serde(default)]
    pub on_corrupt: CorruptRecordPolicy,
}

impl StorageConfig {
    /// Resolve the record root against `base`.
    pub fn resolve_root(&self, base: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            base.join(&self.root)
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            on_corrupt: CorruptRecordPolicy::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentsConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
