//! `stackforge validate` — Check a compose file for structural issues.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::error::StackforgeError;
use stackforge_common::report::Report;

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Compose file to check.
    pub file: PathBuf,
}

/// Executes the `validate` command.
///
/// A populated issue list is a successful result; only a missing or
/// unreadable file is an error.
///
/// # Errors
///
/// Returns `FileNotFound` when the file does not exist, or an I/O error
/// when it cannot be read.
pub fn execute(args: ValidateArgs, json: bool) -> anyhow::Result<()> {
    if !args.file.exists() {
        return Err(StackforgeError::FileNotFound {
            path: args.file.clone(),
        }
        .into());
    }
    let raw = std::fs::read_to_string(&args.file).map_err(|source| StackforgeError::Io {
        path: args.file.clone(),
        source,
    })?;

    let issues = stackforge_compose::validate::validate(&raw);
    tracing::info!(path = %args.file.display(), issues = issues.len(), "validated");

    let report = Report::success("validate")
        .with_path(&args.file)
        .with_issues(issues);
    crate::output::render(&report, json);
    Ok(())
}
