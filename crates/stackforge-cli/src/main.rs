//! # stackforge — compose-file scaffolding CLI
//!
//! Generates compose files from predefined stack templates, assembles them
//! from interactively chosen services, adds single services to existing
//! files, and validates document structure.

mod commands;
mod output;
mod prompt;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::render_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
