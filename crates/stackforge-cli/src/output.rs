//! Report rendering for human and machine consumers.
//!
//! Every invocation ends in exactly one rendered [`Report`]: as lines of
//! human-readable text, or as a single JSON record when `--json` is set.

use stackforge_common::report::Report;

/// Prints a report as text lines or as one JSON record.
pub fn render(report: &Report, json: bool) {
    if json {
        if let Ok(record) = serde_json::to_string(report) {
            println!("{record}");
        }
        return;
    }
    for line in human_lines(report) {
        println!("{line}");
    }
}

/// Prints a failure report for a top-level error.
pub fn render_error(err: &anyhow::Error, json: bool) {
    let report = Report::failure("error", err.to_string());
    if json {
        if let Ok(record) = serde_json::to_string(&report) {
            println!("{record}");
        }
    } else {
        eprintln!("error: {err}");
    }
}

fn human_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(ref error) = report.error {
        lines.push(format!("error: {error}"));
        return lines;
    }

    if let Some(ref stacks) = report.stacks {
        lines.push("Stacks:".to_string());
        for stack in stacks {
            lines.push(format!(
                "  {:<12} {:<12} {}",
                stack.id, stack.display_name, stack.description
            ));
        }
    }
    if let Some(ref services) = report.services {
        lines.push(format!("Services: {}", services.join(", ")));
    }

    if let Some(ref issues) = report.issues {
        if issues.is_empty() {
            lines.push("Document is valid.".to_string());
        } else {
            for issue in issues {
                lines.push(format!("  - {issue}"));
            }
            lines.push(format!("{} issue(s) found.", issues.len()));
        }
        return lines;
    }

    if let Some(ref path) = report.path {
        let subject = report
            .stack
            .as_ref()
            .map(|s| format!(" (stack: {s})"))
            .or_else(|| report.service.as_ref().map(|s| format!(" (service: {s})")))
            .unwrap_or_default();
        lines.push(format!("Wrote {}{subject}", path.display()));
    }

    lines
}
