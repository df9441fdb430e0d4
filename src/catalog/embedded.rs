//! Workflows compiled into the binary

use std::collections::BTreeSet;
use std::ffi::OsStr;

use super::Catalog;
use crate::error::{Result, workflow};
use crate::workflow::WorkflowName;

/// File name and content of every template under `workflows/`
const BUNDLED_WORKFLOWS: &[(&str, &[u8])] = &[(
    "issue-discussion.yml",
    include_bytes!("../../workflows/issue-discussion.yml"),
)];

/// Catalog backed by templates embedded at build time
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCatalog {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedCatalog {
    /// Catalog over an explicit set of `(file name, content)` entries
    pub fn with_entries(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    fn find(&self, name: &str) -> Option<&'static [u8]> {
        self.entries.iter().find_map(|(file_name, content)| {
            WorkflowName::from_file_name(OsStr::new(file_name))
                .filter(|n| n == name)
                .map(|_| *content)
        })
    }
}

impl Default for EmbeddedCatalog {
    fn default() -> Self {
        Self::with_entries(BUNDLED_WORKFLOWS)
    }
}

impl Catalog for EmbeddedCatalog {
    fn list_catalog(&self) -> Result<BTreeSet<WorkflowName>> {
        Ok(self
            .entries
            .iter()
            .filter_map(|(file_name, _)| WorkflowName::from_file_name(OsStr::new(file_name)))
            .collect())
    }

    fn payload(&self, name: &str) -> Result<Vec<u8>> {
        self.find(name)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| workflow::not_in_catalog(name))
    }
}
