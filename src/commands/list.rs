//! List command implementation
//!
//! This command lists every bundled workflow and whether it is installed in
//! the project. With `--detailed` it also checks installed files against the
//! bundled content and shows installed workflows marty does not ship.

use console::Style;

use super::with_manager;
use crate::cli::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::hash;
use crate::workflow::{ContentState, WorkflowManager, WorkflowName};

/// Run list command
pub fn run(settings: &Settings, args: &ListArgs) -> Result<()> {
    with_manager(settings, |manager| list_workflows(manager, args.detailed))
}

/// List workflows for a manager
fn list_workflows(manager: &WorkflowManager<'_>, detailed: bool) -> Result<()> {
    let statuses = manager.status()?;

    if statuses.is_empty() {
        println!("No bundled workflows available.");
    } else {
        println!("Available:");
        for status in &statuses {
            println!(
                "  - {} {}",
                Style::new().bold().apply_to(&status.name),
                status_label(status.installed)
            );
            if detailed && status.installed {
                display_installed_details(manager, &status.name)?;
            }
        }
    }

    if detailed {
        display_untracked(manager)?;
    }

    Ok(())
}

fn status_label(installed: bool) -> String {
    if installed {
        Style::new().green().apply_to("(installed)").to_string()
    } else {
        Style::new().dim().apply_to("(not installed)").to_string()
    }
}

fn content_label(state: ContentState) -> String {
    match state {
        ContentState::UpToDate => Style::new().green().apply_to("up to date").to_string(),
        ContentState::Modified => Style::new().yellow().apply_to("modified").to_string(),
    }
}

/// Content state, hash and path of an installed bundled workflow
fn display_installed_details(manager: &WorkflowManager<'_>, name: &WorkflowName) -> Result<()> {
    let path = manager.installed_path(name);
    let state = manager.content_state(name.as_str())?;
    let file_hash = hash::hash_file(&path)?;

    println!("      {} {}", Style::new().bold().apply_to("State:"), content_label(state));
    println!(
        "      {} {}",
        Style::new().bold().apply_to("Hash:"),
        Style::new().dim().apply_to(hash::short_hash(&file_hash))
    );
    println!("      {} {}", Style::new().bold().apply_to("Path:"), path.display());
    Ok(())
}

/// Installed workflows without a bundled counterpart
fn display_untracked(manager: &WorkflowManager<'_>) -> Result<()> {
    let untracked = manager.untracked()?;
    if untracked.is_empty() {
        return Ok(());
    }

    println!();
    println!("Untracked:");
    for name in &untracked {
        println!(
            "  - {} {}",
            Style::new().bold().apply_to(name),
            Style::new().dim().apply_to("(not bundled)")
        );
    }
    Ok(())
}
