//! Bundled workflow catalog
//!
//! The catalog is the fixed, read-only set of workflow templates that marty
//! can install. By default it is compiled into the binary
//! ([`EmbeddedCatalog`]); a directory on disk ([`DirCatalog`]) can stand in
//! for it when the bundled location is overridden.

mod dir;
mod embedded;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use dir::DirCatalog;
pub use embedded::EmbeddedCatalog;

use crate::error::Result;
use crate::workflow::WorkflowName;

/// Read-only source of workflow templates
pub trait Catalog {
    /// Names of every workflow in the catalog
    fn list_catalog(&self) -> Result<BTreeSet<WorkflowName>>;

    /// Raw bytes of the workflow template
    ///
    /// Fails with [`crate::error::MartyError::WorkflowNotInCatalog`] when
    /// `name` is not listed.
    fn payload(&self, name: &str) -> Result<Vec<u8>>;

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.list_catalog()?.contains(name))
    }
}

/// Open the catalog for this invocation
///
/// `dir_override` replaces the templates compiled into the binary with the
/// `.yml` files found in that directory.
pub fn open(dir_override: Option<PathBuf>) -> Box<dyn Catalog> {
    match dir_override {
        Some(root) => Box::new(DirCatalog::new(root)),
        None => Box::new(EmbeddedCatalog::default()),
    }
}
