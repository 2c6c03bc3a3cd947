//! Tooling Layer
//!
//! CLI parsing, terminal prompts, and output formatting over the student store.

pub mod cli;
pub mod format;
pub mod prompt;

pub use cli::{Cli, CliContext, Commands};
