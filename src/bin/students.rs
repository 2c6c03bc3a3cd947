//! Students CLI Binary
//!
//! Command-line interface for the student record store.

use clap::Parser;
use student_records::logging::init_logging;
use student_records::tooling::cli::{Cli, CliContext, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let (config, working_dir) = match CliContext::load_config(cli.root.clone(), cli.config.clone())
    {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = cli.logging_config(&config.logging);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let context = match CliContext::from_config(config, &working_dir) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing student store: {}", e);
            process::exit(1);
        }
    };

    let command = cli.command.clone().unwrap_or(Commands::Interactive);
    match context.execute(&command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
