//! Workflow installation: naming, directory scanning and reconciliation
//! against the bundled catalog.

mod manager;
mod name;
mod scan;

pub use manager::{BulkReport, ContentState, WorkflowManager, WorkflowStatus};
pub use name::WorkflowName;
pub use scan::scan_workflow_dir;
