//! CLI Tooling
//!
//! Command-line interface over the student record store. One-shot commands
//! return their output as a string; `interactive` runs a menu loop.

use crate::config::{ConfigLoader, StudentsConfig};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::student::{
    SearchFilter, ShardedFileRepository, Student, StudentAddResult, StudentCommandService,
    StudentPatch, StudentRepository,
};
use crate::tooling::format::{
    format_statistics_text, format_student_detail, format_students_table, to_json,
};
use crate::tooling::prompt::{self, StudentDraft};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Student records - manage student files on disk
#[derive(Parser)]
#[command(name = "students")]
#[command(about = "Create, edit, search, and summarize student records")]
pub struct Cli {
    /// Command to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record root directory (overrides config)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the loaded configuration.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a student; missing fields are prompted for
    Add {
        /// 7-digit student ID
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        curriculum: Option<String>,
        /// Replace an existing student with the same ID
        #[arg(long)]
        overwrite: bool,
    },
    /// Edit a student; prompts with current values when no field flags are given
    Edit {
        /// 7-digit student ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        curriculum: Option<String>,
    },
    /// Delete a student
    Delete {
        /// 7-digit student ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Show students matching a query such as "name=ana,age=20" (all when omitted)
    Show {
        #[arg(long, short)]
        query: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Export every student to a JSON file
    Export {
        path: PathBuf,
    },
    /// Import students from a JSON file produced by export
    Import {
        path: PathBuf,
    },
    /// Show statistics (count, ages, curriculum distribution)
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Run the interactive menu
    Interactive,
}

/// CLI context: configuration plus an open repository.
pub struct CliContext {
    config: StudentsConfig,
    repo: ShardedFileRepository,
}

const MENU_ITEMS: &[&str] = &[
    "Add Student",
    "Edit Student",
    "Delete Student",
    "Search Students",
    "Export Data",
    "Import Data",
    "View Statistics",
    "Exit",
];

impl CliContext {
    /// Load configuration and open the record root.
    ///
    /// `root` overrides `storage.root`; `config_path` replaces the
    /// `students.toml` lookup in the working directory.
    pub fn new(root: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let (config, working_dir) = Self::load_config(root, config_path)?;
        Self::from_config(config, &working_dir)
    }

    /// Resolve configuration without touching the record root, so the
    /// binary can install logging before the store is opened.
    pub fn load_config(
        root: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<(StudentsConfig, PathBuf), ApiError> {
        let working_dir = std::env::current_dir()
            .map_err(|e| ApiError::ConfigError(format!("Failed to read working directory: {}", e)))?;
        let mut config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&working_dir)?,
        };
        if let Some(root) = root {
            config.storage.root = root;
        }
        Ok((config, working_dir))
    }

    pub fn from_config(
        config: StudentsConfig,
        working_dir: &std::path::Path,
    ) -> Result<Self, ApiError> {
        let root = config.storage.resolve_root(working_dir);
        let repo = ShardedFileRepository::open(&root)?
            .with_corrupt_policy(config.storage.on_corrupt);
        tracing::debug!(root = %root.display(), "Opened student store");
        Ok(Self { config, repo })
    }

    pub fn config(&self) -> &StudentsConfig {
        &self.config
    }

    pub fn repository(&self) -> &dyn StudentRepository {
        &self.repo
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Add {
                id,
                name,
                surname,
                age,
                curriculum,
                overwrite,
            } => {
                let draft = StudentDraft {
                    id: id.clone(),
                    name: name.clone(),
                    surname: surname.clone(),
                    age: *age,
                    curriculum: curriculum.clone(),
                };
                self.handle_add(&draft, *overwrite)
            }
            Commands::Edit {
                id,
                name,
                surname,
                age,
                curriculum,
            } => {
                let patch = StudentPatch {
                    name: name.clone(),
                    surname: surname.clone(),
                    age: *age,
                    curriculum: curriculum.clone(),
                };
                self.handle_edit(id, patch)
            }
            Commands::Delete { id, force } => self.handle_delete(id, *force),
            Commands::Show { query, format } => {
                let filter = query
                    .as_deref()
                    .map(SearchFilter::parse)
                    .unwrap_or_default();
                self.handle_show(filter, format)
            }
            Commands::Export { path } => {
                let result = StudentCommandService::export(&self.repo, path)?;
                Ok(format!(
                    "Data exported successfully! {} student(s) written to {}",
                    result.count,
                    result.path.display()
                ))
            }
            Commands::Import { path } => {
                let result = StudentCommandService::import(&self.repo, path)?;
                Ok(format!(
                    "Data imported successfully! {} student(s) read from {}",
                    result.count,
                    result.path.display()
                ))
            }
            Commands::Stats { format } => self.handle_stats(format),
            Commands::Interactive => self.run_interactive(),
        }
    }

    fn handle_add(&self, draft: &StudentDraft, overwrite: bool) -> Result<String, ApiError> {
        let student = prompt::prompt_student(draft)?;
        let result = StudentCommandService::add(&self.repo, student.clone(), overwrite)?;
        Ok(format_add_result(&result, &student))
    }

    fn handle_add_interactive(&self) -> Result<String, ApiError> {
        let student = prompt::prompt_student(&StudentDraft::default())?;
        let result = StudentCommandService::add_or_replace(&self.repo, student.clone(), |id| {
            prompt::confirm(&format!("Student {} already exists. Overwrite?", id))
        })?;
        Ok(format_add_result(&result, &student))
    }

    fn handle_edit(&self, id: &str, patch: StudentPatch) -> Result<String, ApiError> {
        let patch = if patch.is_empty() {
            let current = StudentCommandService::get(&self.repo, id)?;
            prompt::prompt_patch(&current)?
        } else {
            patch
        };
        let result = StudentCommandService::edit(&self.repo, id, &patch)?;
        Ok(format!(
            "Student information updated successfully!\n{}",
            format_student_detail(&result.after)
        ))
    }

    fn handle_delete(&self, id: &str, force: bool) -> Result<String, ApiError> {
        if !force {
            let confirmed =
                prompt::confirm(&format!("Are you sure you want to delete student {}?", id))?;
            if !confirmed {
                return Ok("Deletion cancelled".to_string());
            }
        }
        let result = StudentCommandService::delete(&self.repo, id)?;
        if result.existed {
            Ok(format!("Student {} deleted successfully!", result.id))
        } else {
            Ok(format!("No student stored under {}; nothing to delete.", result.id))
        }
    }

    fn handle_show(&self, filter: SearchFilter, format: &str) -> Result<String, ApiError> {
        let result = StudentCommandService::search(&self.repo, filter)?;
        match format {
            "json" => to_json(&result.students),
            "text" => Ok(format_students_table(&result.students)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_stats(&self, format: &str) -> Result<String, ApiError> {
        let stats = StudentCommandService::statistics(&self.repo)?;
        match format {
            "json" => to_json(&stats),
            "text" => Ok(format_statistics_text(&stats)),
            other => Err(invalid_format(other)),
        }
    }

    /// Menu loop. Errors from a single action are printed and the loop continues.
    fn run_interactive(&self) -> Result<String, ApiError> {
        loop {
            let choice = prompt::select("What would you like to do?", MENU_ITEMS)?;
            let outcome = match MENU_ITEMS[choice] {
                "Add Student" => self.handle_add_interactive(),
                "Edit Student" => prompt::prompt_text("Enter student ID to edit")
                    .and_then(|id| self.handle_edit(id.trim(), StudentPatch::default())),
                "Delete Student" => prompt::prompt_text("Enter student ID to delete")
                    .and_then(|id| self.handle_delete(id.trim(), false)),
                "Search Students" => prompt::prompt_text(
                    "Enter search criteria (e.g. name=sizwe, age=20; empty or ALL for every student)",
                )
                .and_then(|query| self.handle_show(SearchFilter::parse(&query), "text")),
                "Export Data" => prompt::prompt_text("Enter export file path").and_then(|path| {
                    self.execute(&Commands::Export {
                        path: PathBuf::from(path.trim()),
                    })
                }),
                "Import Data" => prompt::prompt_text("Enter import file path").and_then(|path| {
                    self.execute(&Commands::Import {
                        path: PathBuf::from(path.trim()),
                    })
                }),
                "View Statistics" => self.handle_stats("text"),
                _ => return Ok("Goodbye!".to_string()),
            };

            match outcome {
                Ok(output) => println!("{}\n", output),
                Err(e) if e.is_user_error() => eprintln!("Error: {}\n", e),
                Err(e) => {
                    tracing::error!(error = %e, "Interactive action failed");
                    eprintln!("Error: {}\n", e);
                }
            }
        }
    }
}

fn format_add_result(result: &StudentAddResult, student: &Student) -> String {
    let verb = if result.replaced { "replaced" } else { "added" };
    format!(
        "Student {} successfully!\n{}",
        verb,
        format_student_detail(student)
    )
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::Validation(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
