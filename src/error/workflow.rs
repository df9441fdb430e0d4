//! Workflow reconciliation errors

use super::MartyError;

/// Creates a workflow not in catalog error
pub fn not_in_catalog(name: impl Into<String>) -> MartyError {
    MartyError::WorkflowNotInCatalog { name: name.into() }
}

/// Creates a workflow not installed error
pub fn not_installed(name: impl Into<String>) -> MartyError {
    MartyError::WorkflowNotInstalled { name: name.into() }
}

/// Creates the combined error reported when an update is not possible
pub fn not_updatable(name: impl Into<String>) -> MartyError {
    MartyError::WorkflowNotUpdatable { name: name.into() }
}
