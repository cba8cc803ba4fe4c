//! `stackforge add` — Add a single catalog service to a compose file.
//!
//! When the target file does not exist, a fresh single-service document is
//! written; otherwise the existing content is augmented textually, without
//! being parsed or reflowed.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::DEFAULT_COMPOSE_FILE;
use stackforge_common::error::StackforgeError;
use stackforge_common::report::Report;

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Service id to add (case-insensitive).
    pub service: String,

    /// Target compose file.
    #[arg(short, long, default_value = DEFAULT_COMPOSE_FILE)]
    pub file: PathBuf,
}

/// Executes the `add` command.
///
/// # Errors
///
/// Returns an error on an unknown service id or when the file cannot be
/// read or written. Unknown ids are detected before any write is attempted.
pub fn execute(args: AddArgs, json: bool) -> anyhow::Result<()> {
    tracing::info!(service = %args.service, path = %args.file.display(), "adding service");

    let text = if args.file.exists() {
        let existing =
            std::fs::read_to_string(&args.file).map_err(|source| StackforgeError::Io {
                path: args.file.clone(),
                source,
            })?;
        stackforge_compose::merge::augment(&existing, &args.service)?
    } else {
        let document = stackforge_compose::merge::fresh_document(&args.service)?;
        stackforge_compose::emit::emit_document(&document)
    };

    std::fs::write(&args.file, &text).map_err(|source| StackforgeError::Io {
        path: args.file.clone(),
        source,
    })?;

    let report = Report::success("add")
        .with_service(args.service.to_lowercase())
        .with_path(&args.file);
    crate::output::render(&report, json);
    Ok(())
}
