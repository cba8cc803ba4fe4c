//! `stackforge new` — Generate a compose file from a stack template.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::DEFAULT_COMPOSE_FILE;
use stackforge_common::error::StackforgeError;
use stackforge_common::report::Report;

/// Arguments for the `new` subcommand.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Stack id (prompts interactively when omitted).
    pub stack: Option<String>,

    /// Output file path.
    #[arg(short, long, default_value = DEFAULT_COMPOSE_FILE)]
    pub output: PathBuf,
}

/// Executes the `new` command.
///
/// # Errors
///
/// Returns an error on an unknown stack id or when the file cannot be
/// written.
pub fn execute(args: NewArgs, json: bool) -> anyhow::Result<()> {
    let stack_id = match args.stack {
        Some(id) => id,
        None => crate::prompt::pick_stack()?,
    };
    tracing::info!(stack = %stack_id, path = %args.output.display(), "generating stack");

    let document = stackforge_compose::catalog::get_stack(&stack_id)?;
    let text = stackforge_compose::emit::emit_document(&document);
    std::fs::write(&args.output, &text).map_err(|source| StackforgeError::Io {
        path: args.output.clone(),
        source,
    })?;

    let report = Report::success("new")
        .with_stack(&stack_id)
        .with_path(&args.output);
    crate::output::render(&report, json);
    Ok(())
}
