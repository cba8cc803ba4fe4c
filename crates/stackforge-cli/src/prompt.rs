//! Interactive selection prompts.
//!
//! Thin sequential stdin I/O: the process suspends on each read with no
//! timeout. All catalog and document work happens in the core crates.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use stackforge_common::constants::DEFAULT_COMPOSE_FILE;

/// Prompts for a stack selection by index and returns its id.
///
/// # Errors
///
/// Returns an error when stdin closes before a selection is made.
pub fn pick_stack() -> anyhow::Result<String> {
    let stacks = stackforge_compose::catalog::list_stacks();
    println!("Available stacks:");
    for (idx, stack) in stacks.iter().enumerate() {
        println!(
            "  {}) {} - {}",
            idx + 1,
            stack.display_name,
            stack.description
        );
    }
    loop {
        let line = read_line(&format!("Select a stack [1-{}]: ", stacks.len()))?;
        if let Ok(n) = line.parse::<usize>() {
            if (1..=stacks.len()).contains(&n) {
                return Ok(stacks[n - 1].id.to_string());
            }
        }
        println!("Enter a number between 1 and {}.", stacks.len());
    }
}

/// Prompts for a comma-separated service selection and returns the chosen
/// ids in selection order, duplicates removed.
///
/// # Errors
///
/// Returns an error when stdin closes before a selection is made.
pub fn pick_services() -> anyhow::Result<Vec<String>> {
    let services = stackforge_compose::catalog::list_services();
    println!("Available services:");
    for (idx, id) in services.iter().enumerate() {
        println!("  {}) {id}", idx + 1);
    }
    loop {
        let line = read_line("Select services (comma-separated numbers): ")?;
        if let Some(chosen) = parse_selection(&line, &services) {
            if !chosen.is_empty() {
                return Ok(chosen);
            }
        }
        println!(
            "Enter one or more numbers between 1 and {}, separated by commas.",
            services.len()
        );
    }
}

/// Prompts for an output path, falling back to the default on empty input.
///
/// # Errors
///
/// Returns an error when stdin closes.
pub fn pick_output_path() -> anyhow::Result<PathBuf> {
    let line = read_line(&format!("Output file [{DEFAULT_COMPOSE_FILE}]: "))?;
    if line.is_empty() {
        Ok(PathBuf::from(DEFAULT_COMPOSE_FILE))
    } else {
        Ok(PathBuf::from(line))
    }
}

fn parse_selection(line: &str, services: &[String]) -> Option<Vec<String>> {
    let mut chosen = Vec::new();
    for token in line.split(',') {
        let n = token.trim().parse::<usize>().ok()?;
        if !(1..=services.len()).contains(&n) {
            return None;
        }
        let id = services[n - 1].clone();
        if !chosen.contains(&id) {
            chosen.push(id);
        }
    }
    Some(chosen)
}

fn read_line(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}
