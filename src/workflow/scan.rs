//! Directory scanning shared by the on-disk catalog and the installed set

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::name::WorkflowName;
use crate::error::{Result, display_path, fs};

/// Collect the workflow names of all `.yml` files directly inside `dir`
///
/// A directory that does not exist holds no workflows. Subdirectories are
/// not descended into, and entries that are not regular files (after
/// following symlinks) are ignored.
pub fn scan_workflow_dir(dir: &Path) -> Result<BTreeSet<WorkflowName>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "workflow directory does not exist");
        return Ok(BTreeSet::new());
    }

    let mut names = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| fs::dir_read_failed(display_path(dir), e))?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = WorkflowName::from_file_name(entry.file_name()) {
            names.insert(name);
        }
    }

    debug!(dir = %dir.display(), count = names.len(), "scanned workflow directory");
    Ok(names)
}
