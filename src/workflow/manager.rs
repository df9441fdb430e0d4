//! Reconciliation of installed workflows against the bundled catalog
//!
//! The manager holds no state of its own: every operation re-reads the
//! catalog and the target directory, so the presence of
//! `<target>/<name>.yml` is the only record of an installation.
//!
//! Each single-workflow operation returns the path it touched on success.
//! Catalog and installed-set misses come back as
//! [`crate::error::MartyError::WorkflowNotInCatalog`] and
//! [`crate::error::MartyError::WorkflowNotInstalled`]; file system failures are passed
//! through unchanged.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, info};

use super::name::WorkflowName;
use super::scan::scan_workflow_dir;
use crate::catalog::Catalog;
use crate::error::{Result, fs, workflow};
use crate::hash;

/// Whether an installed workflow still matches the bundled template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentState {
    UpToDate,
    Modified,
}

/// A catalog entry annotated with its installation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStatus {
    pub name: WorkflowName,
    pub installed: bool,
}

/// Per-workflow results of a bulk operation, in the order attempted
#[derive(Debug, Default)]
pub struct BulkReport {
    pub outcomes: Vec<(WorkflowName, Result<PathBuf>)>,
}

impl BulkReport {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Installs, refreshes and removes workflows in one target directory
pub struct WorkflowManager<'a> {
    target_dir: PathBuf,
    catalog: &'a dyn Catalog,
}

impl<'a> WorkflowManager<'a> {
    /// Create a manager for `target_dir`, usually `<project>/.github/workflows`
    pub fn new(target_dir: impl Into<PathBuf>, catalog: &'a dyn Catalog) -> Self {
        Self {
            target_dir: target_dir.into(),
            catalog,
        }
    }

    /// Path an installed workflow lives at
    pub fn installed_path(&self, name: &WorkflowName) -> PathBuf {
        self.target_dir.join(name.file_name())
    }

    /// Names of the workflows present in the target directory
    pub fn list_installed(&self) -> Result<BTreeSet<WorkflowName>> {
        scan_workflow_dir(&self.target_dir)
    }

    /// Install a bundled workflow, overwriting any file of the same name
    ///
    /// Creates the target directory and its parents when missing.
    pub fn add(&self, name: &str) -> Result<PathBuf> {
        let catalog = self.catalog.list_catalog()?;
        let Some(name) = catalog.get(name) else {
            return Err(workflow::not_in_catalog(name));
        };

        std::fs::create_dir_all(&self.target_dir).map_err(fs::on_create_dir(&self.target_dir))?;

        let path = self.write_payload(name)?;
        info!(workflow = %name, path = %path.display(), "added workflow");
        Ok(path)
    }

    /// Refresh an installed workflow from its bundled template
    ///
    /// Never creates a new installation.
    pub fn update(&self, name: &str) -> Result<PathBuf> {
        let installed = self.list_installed()?;
        let Some(name) = installed.get(name) else {
            return Err(workflow::not_installed(name));
        };
        if !self.catalog.contains(name.as_str())? {
            return Err(workflow::not_in_catalog(name.as_str()));
        }

        let path = self.write_payload(name)?;
        info!(workflow = %name, path = %path.display(), "updated workflow");
        Ok(path)
    }

    /// Remove an installed workflow
    pub fn delete(&self, name: &str) -> Result<PathBuf> {
        let installed = self.list_installed()?;
        let Some(name) = installed.get(name) else {
            return Err(workflow::not_installed(name));
        };

        let path = self.installed_path(name);
        std::fs::remove_file(&path).map_err(fs::on_remove(&path))?;
        info!(workflow = %name, path = %path.display(), "deleted workflow");
        Ok(path)
    }

    /// Add every bundled workflow that is not installed yet
    ///
    /// Already installed workflows are skipped. A failure on one workflow
    /// does not stop the others, and completed installs are kept.
    pub fn add_all(&self) -> Result<BulkReport> {
        let catalog = self.catalog.list_catalog()?;
        let installed = self.list_installed()?;

        let mut report = BulkReport::default();
        for name in catalog.difference(&installed) {
            debug!(workflow = %name, "bulk add");
            report.outcomes.push((name.clone(), self.add(name.as_str())));
        }
        Ok(report)
    }

    /// Update every installed workflow from the catalog
    ///
    /// Installed workflows without a bundled template are reported as
    /// [`crate::error::MartyError::WorkflowNotInCatalog`] and left untouched.
    pub fn update_all(&self) -> Result<BulkReport> {
        let installed = self.list_installed()?;

        let mut report = BulkReport::default();
        for name in installed {
            debug!(workflow = %name, "bulk update");
            let outcome = self.update(name.as_str());
            report.outcomes.push((name, outcome));
        }
        Ok(report)
    }

    /// Every bundled workflow with its installation state, sorted by name
    pub fn status(&self) -> Result<Vec<WorkflowStatus>> {
        let catalog = self.catalog.list_catalog()?;
        let installed = self.list_installed()?;

        Ok(catalog
            .into_iter()
            .map(|name| {
                let installed = installed.contains(&name);
                WorkflowStatus { name, installed }
            })
            .collect())
    }

    /// Installed workflows that have no bundled template
    pub fn untracked(&self) -> Result<BTreeSet<WorkflowName>> {
        let catalog = self.catalog.list_catalog()?;
        let installed = self.list_installed()?;
        Ok(installed.difference(&catalog).cloned().collect())
    }

    /// Compare an installed workflow's content with its bundled template
    pub fn content_state(&self, name: &str) -> Result<ContentState> {
        let installed = self.list_installed()?;
        let Some(name) = installed.get(name) else {
            return Err(workflow::not_installed(name));
        };

        let bundled = hash::hash_bytes(&self.catalog.payload(name.as_str())?);
        let on_disk = hash::hash_file(&self.installed_path(name))?;
        debug!(workflow = %name, %bundled, %on_disk, "compared workflow content");

        Ok(if bundled == on_disk {
            ContentState::UpToDate
        } else {
            ContentState::Modified
        })
    }

    fn write_payload(&self, name: &WorkflowName) -> Result<PathBuf> {
        let payload = self.catalog.payload(name.as_str())?;
        let path = self.installed_path(name);
        debug!(path = %path.display(), bytes = payload.len(), "writing workflow");
        std::fs::write(&path, payload).map_err(fs::on_write(&path))?;
        Ok(path)
    }
}

impl std::fmt::Debug for WorkflowManager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowManager")
            .field("target_dir", &self.target_dir)
            .finish_non_exhaustive()
    }
}
