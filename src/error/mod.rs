//! Error types and handling for marty
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`workflow`]: catalog and installed-set misses
//! - [`fs`]: file system failures
//!
//! Workflow misses are the expected outcomes of reconciliation and callers
//! are meant to match on them. File system variants wrap unexpected failures
//! and are only ever reported.

pub mod fs;
pub mod workflow;

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for marty operations
#[derive(Error, Diagnostic, Debug)]
pub enum MartyError {
    // Workflow errors
    #[error("Workflow '{name}' not found in bundled workflows")]
    #[diagnostic(
        code(marty::workflow::not_in_catalog),
        help("Run 'marty workflow list' to see the bundled workflows")
    )]
    WorkflowNotInCatalog { name: String },

    #[error("Workflow '{name}' is not installed")]
    #[diagnostic(
        code(marty::workflow::not_installed),
        help("Run 'marty workflow add {name}' to install it")
    )]
    WorkflowNotInstalled { name: String },

    #[error("Workflow '{name}' is not installed or not found in bundled workflows")]
    #[diagnostic(
        code(marty::workflow::not_updatable),
        help("Only installed workflows that are still bundled can be updated")
    )]
    WorkflowNotUpdatable { name: String },

    // CLI usage errors
    #[error("Specify a workflow name or use --all")]
    #[diagnostic(code(marty::cli::missing_name))]
    MissingWorkflowName,

    #[error("Specify a workflow name")]
    #[diagnostic(code(marty::cli::name_required))]
    WorkflowNameRequired,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(marty::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(marty::fs::dir_read_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(marty::fs::dir_create_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(marty::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(marty::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove file: {path}: {reason}")]
    #[diagnostic(code(marty::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(marty::fs::io_error))]
    IoError {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl MartyError {
    /// Whether this error is an expected catalog/installed-set miss rather
    /// than a system failure.
    pub fn is_expected_miss(&self) -> bool {
        matches!(
            self,
            MartyError::WorkflowNotInCatalog { .. }
                | MartyError::WorkflowNotInstalled { .. }
                | MartyError::WorkflowNotUpdatable { .. }
        )
    }
}

impl From<std::io::Error> for MartyError {
    fn from(err: std::io::Error) -> Self {
        MartyError::IoError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MartyError>;
