//! Add command implementation
//!
//! Installs one bundled workflow, or with `--all` every bundled workflow
//! that is not installed yet.

use console::Style;

use super::{bulk_summary, with_manager};
use crate::cli::AddArgs;
use crate::config::Settings;
use crate::error::{MartyError, Result};
use crate::workflow::WorkflowManager;

/// Run add command
pub fn run(settings: &Settings, args: &AddArgs) -> Result<()> {
    with_manager(settings, |manager| {
        if args.all {
            return add_all(manager);
        }

        let Some(name) = args.name.get() else {
            return Err(MartyError::MissingWorkflowName);
        };

        manager.add(name)?;
        println!("Added workflow: {name}");
        Ok(())
    })
}

/// Add every missing workflow, reporting each one; individual failures do
/// not fail the command.
fn add_all(manager: &WorkflowManager<'_>) -> Result<()> {
    let report = manager.add_all()?;

    if report.is_empty() {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("All bundled workflows are already installed.")
        );
    }

    for (name, outcome) in &report.outcomes {
        match outcome {
            Ok(_) => println!("Added workflow: {name}"),
            Err(e) => eprintln!("Error: Failed to add {name}: {e}"),
        }
    }

    println!("{}", bulk_summary("Added", &report));
    Ok(())
}
