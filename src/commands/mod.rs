//! Command implementations for marty CLI

pub mod add;
pub mod completions;
pub mod delete;
pub mod list;
pub mod update;
pub mod version;

use crate::cli::{WorkflowArgs, WorkflowCommand};
use crate::config::Settings;
use crate::error::Result;
use crate::workflow::{BulkReport, WorkflowManager};

/// Run a workflow subcommand
pub fn workflow(settings: &Settings, args: WorkflowArgs) -> Result<()> {
    match args.command {
        WorkflowCommand::Add(args) => add::run(settings, &args),
        WorkflowCommand::Update(args) => update::run(settings, &args),
        WorkflowCommand::Delete(args) => delete::run(settings, &args),
        WorkflowCommand::List(args) => list::run(settings, &args),
    }
}

/// Build the catalog and manager for this invocation and hand them to `f`
fn with_manager<T>(settings: &Settings, f: impl FnOnce(&WorkflowManager<'_>) -> Result<T>) -> Result<T> {
    let catalog = settings.open_catalog();
    let manager = WorkflowManager::new(settings.target_dir(), catalog.as_ref());
    f(&manager)
}

fn pluralize(count: usize) -> &'static str {
    if count == 1 { "workflow" } else { "workflows" }
}

/// Closing line of a bulk add or update
fn bulk_summary(verb: &str, report: &BulkReport) -> String {
    let succeeded = report.succeeded();
    let failed = report.failed();
    if failed == 0 {
        format!("Done. {verb} {succeeded} {}.", pluralize(succeeded))
    } else {
        format!(
            "Done. {verb} {succeeded} {}, {failed} failed.",
            pluralize(succeeded)
        )
    }
}
