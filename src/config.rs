//! Per-invocation settings resolved from the command line
//!
//! marty has no configuration file. Everything comes from CLI flags and the
//! `MARTY_PATH` environment variable, and is resolved once here so the rest
//! of the program never consults the process working directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{self, Catalog};
use crate::error::{Result, fs};

/// Directory, relative to the project root, that workflows are installed in
pub const WORKFLOWS_SUBDIR: [&str; 2] = [".github", "workflows"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project root the workflows directory lives under
    pub project_root: PathBuf,
    /// Replacement for the built-in workflow catalog
    pub workflows_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the global CLI options
    pub fn resolve(path: Option<PathBuf>, workflows_dir: Option<PathBuf>) -> Result<Self> {
        let settings = Self {
            project_root: resolve_project_root(path)?,
            workflows_dir,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    /// `<project>/.github/workflows`
    pub fn target_dir(&self) -> PathBuf {
        target_dir_for(&self.project_root)
    }

    pub fn open_catalog(&self) -> Box<dyn Catalog> {
        catalog::open(self.workflows_dir.clone())
    }
}

/// Workflows directory for a project root
pub fn target_dir_for(project_root: &Path) -> PathBuf {
    WORKFLOWS_SUBDIR
        .iter()
        .fold(project_root.to_path_buf(), |dir, part| dir.join(part))
}

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}"))),
    }
}
