//! Update command implementation
//!
//! Refreshes installed workflows from the bundled templates. A single update
//! fails when the workflow is either not installed or no longer bundled;
//! both cases are reported with the same message.

use console::Style;

use super::{bulk_summary, with_manager};
use crate::cli::UpdateArgs;
use crate::config::Settings;
use crate::error::{MartyError, Result, workflow};
use crate::workflow::WorkflowManager;

/// Run update command
pub fn run(settings: &Settings, args: &UpdateArgs) -> Result<()> {
    with_manager(settings, |manager| {
        if args.all {
            return update_all(manager);
        }

        let Some(name) = args.name.get() else {
            return Err(MartyError::MissingWorkflowName);
        };

        manager
            .update(name)
            .map_err(|e| single_update_error(name, e))?;
        println!("Updated workflow: {name}");
        Ok(())
    })
}

/// Both misses read as one message; file system failures pass through.
fn single_update_error(name: &str, err: MartyError) -> MartyError {
    if err.is_expected_miss() {
        workflow::not_updatable(name)
    } else {
        err
    }
}

/// Update every installed workflow. Having nothing installed is not an error.
fn update_all(manager: &WorkflowManager<'_>) -> Result<()> {
    let report = manager.update_all()?;

    if report.is_empty() {
        println!(
            "{}",
            Style::new().dim().apply_to("No installed workflows to update.")
        );
        return Ok(());
    }

    for (name, outcome) in &report.outcomes {
        match outcome {
            Ok(_) => println!("Updated workflow: {name}"),
            Err(e) => eprintln!("Error: Failed to update {name}: {e}"),
        }
    }

    println!("{}", bulk_summary("Updated", &report));
    Ok(())
}
