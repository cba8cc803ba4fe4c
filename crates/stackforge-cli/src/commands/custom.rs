//! `stackforge custom` — Assemble a compose file from chosen services.
//!
//! The service picker is interactive; each chosen catalog fragment lands in
//! one document together with the named volumes it declares.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::COMPOSE_VERSION;
use stackforge_common::error::StackforgeError;
use stackforge_common::report::Report;
use stackforge_compose::model::Document;
use stackforge_compose::value::Value;

/// Arguments for the `custom` subcommand.
#[derive(Args, Debug)]
pub struct CustomArgs {
    /// Output file path (prompts interactively when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `custom` command.
///
/// # Errors
///
/// Returns an error when stdin closes mid-selection, on an unknown service
/// id, or when the file cannot be written.
pub fn execute(args: CustomArgs, json: bool) -> anyhow::Result<()> {
    let service_ids = crate::prompt::pick_services()?;
    let output = match args.output {
        Some(path) => path,
        None => crate::prompt::pick_output_path()?,
    };
    tracing::info!(services = service_ids.len(), path = %output.display(), "assembling custom document");

    let mut document = Document::new(COMPOSE_VERSION);
    for id in &service_ids {
        let template = stackforge_compose::catalog::get_service(id)?;
        let _ = document.services.insert(template.id, template.entry);
        for name in template.volumes {
            if !document.volumes.contains_key(&name) {
                let _ = document.volumes.insert(name, Value::Null);
            }
        }
    }

    for issue in stackforge_compose::validate::check_references(&document) {
        println!("warning: {issue}");
    }

    let text = stackforge_compose::emit::emit_document(&document);
    std::fs::write(&output, &text).map_err(|source| StackforgeError::Io {
        path: output.clone(),
        source,
    })?;

    let report = Report::success("custom").with_path(&output);
    crate::output::render(&report, json);
    Ok(())
}
