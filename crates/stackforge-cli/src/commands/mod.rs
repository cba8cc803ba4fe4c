//! CLI command definitions and dispatch.

pub mod add;
pub mod custom;
pub mod list;
pub mod new;
pub mod validate;

use clap::{Parser, Subcommand};

/// stackforge — compose-file scaffolding from predefined stacks and services.
#[derive(Parser, Debug)]
#[command(name = "stackforge", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Emit one machine-readable JSON record instead of text output.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a compose file from a predefined stack template.
    New(new::NewArgs),
    /// Assemble a compose file from interactively chosen services.
    Custom(custom::CustomArgs),
    /// Add a single catalog service to a new or existing compose file.
    Add(add::AddArgs),
    /// Check a compose file for structural issues.
    Validate(validate::ValidateArgs),
    /// List predefined stacks and services.
    List(list::ListArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::New(args) => new::execute(args, cli.json),
        Command::Custom(args) => custom::execute(args, cli.json),
        Command::Add(args) => add::execute(args, cli.json),
        Command::Validate(args) => validate::execute(args, cli.json),
        Command::List(args) => list::execute(&args, cli.json),
    }
}
