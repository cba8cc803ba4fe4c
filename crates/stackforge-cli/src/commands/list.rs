//! `stackforge list` — List predefined stacks and services.

use clap::Args;
use stackforge_common::report::{Report, StackInfo};

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Executes the `list` command.
///
/// # Errors
///
/// Infallible in practice; the signature matches the command dispatch.
pub fn execute(_args: &ListArgs, json: bool) -> anyhow::Result<()> {
    let stacks = stackforge_compose::catalog::list_stacks()
        .into_iter()
        .map(|s| StackInfo {
            id: s.id.to_string(),
            display_name: s.display_name.to_string(),
            description: s.description.to_string(),
        })
        .collect();
    let services = stackforge_compose::catalog::list_services();

    let report = Report::success("list").with_listing(stacks, services);
    crate::output::render(&report, json);
    Ok(())
}
