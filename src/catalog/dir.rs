//! Workflows read from a directory on disk

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::debug;

use super::Catalog;
use crate::error::{Result, fs, workflow};
use crate::workflow::{WorkflowName, scan_workflow_dir};

/// Catalog backed by the `.yml` files in a directory
///
/// The directory is re-read on every call. A directory that does not exist
/// is an empty catalog.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Catalog for DirCatalog {
    fn list_catalog(&self) -> Result<BTreeSet<WorkflowName>> {
        scan_workflow_dir(&self.root)
    }

    fn payload(&self, name: &str) -> Result<Vec<u8>> {
        let names = self.list_catalog()?;
        let Some(name) = names.get(name) else {
            return Err(workflow::not_in_catalog(name));
        };

        let path = self.root.join(name.file_name());
        debug!(path = %path.display(), "reading bundled workflow");
        std::fs::read(&path).map_err(fs::on_read(&path))
    }
}
