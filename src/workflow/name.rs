//! Workflow identifiers and their derivation from file names
//!
//! A workflow is identified by the base name of its `.yml` file. Only the
//! final `.yml` extension is stripped, so `release.nightly.yml` is the
//! workflow `release.nightly`, and a hidden `.draft.yml` is the workflow
//! `.draft`. A bare `.yml` has no name.

use std::borrow::Borrow;
use std::ffi::OsStr;
use std::fmt;

/// The only extension recognized for workflow payload files
pub const WORKFLOW_EXTENSION: &str = "yml";

/// Identifier of a bundled or installed workflow
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkflowName(String);

impl WorkflowName {
    /// Derive the workflow name from a file name such as `issue-discussion.yml`
    ///
    /// Returns `None` for anything that is not a `.yml` file with a non-empty stem.
    pub fn from_file_name(file_name: &OsStr) -> Option<Self> {
        let file_name = file_name.to_str()?;
        let stem = file_name.strip_suffix(WORKFLOW_EXTENSION)?.strip_suffix('.')?;

        if stem.is_empty() {
            return None;
        }

        Some(Self(stem.to_string()))
    }

    /// File name the workflow is stored under
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, WORKFLOW_EXTENSION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for WorkflowName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for WorkflowName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WorkflowName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(file_name: &str) -> Option<String> {
        WorkflowName::from_file_name(OsStr::new(file_name)).map(|n| n.to_string())
    }

    #[test]
    fn test_strips_yml_extension() {
        assert_eq!(derive("issue-discussion.yml").as_deref(), Some("issue-discussion"));
    }

    #[test]
    fn test_only_final_extension_is_stripped() {
        assert_eq!(derive("release.nightly.yml").as_deref(), Some("release.nightly"));
        assert_eq!(derive("ci.yml.yml").as_deref(), Some("ci.yml"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert_eq!(derive("ci.yaml"), None);
        assert_eq!(derive("ci.yml.bak"), None);
        assert_eq!(derive("README.md"), None);
        assert_eq!(derive("yml"), None);
        assert_eq!(derive("ciyml"), None);
    }

    #[test]
    fn test_rejects_empty_stem() {
        assert_eq!(derive(".yml"), None);
    }

    #[test]
    fn test_hidden_files_are_workflows() {
        assert_eq!(derive(".draft.yml").as_deref(), Some(".draft"));
    }

    #[test]
    fn test_file_name_round_trips() {
        let name = WorkflowName::from_file_name(OsStr::new("a.b.yml")).unwrap();
        assert_eq!(name.file_name(), "a.b.yml");
        assert_eq!(name, "a.b");
    }

    #[test]
    fn test_names_sort_lexicographically() {
        let mut names: Vec<WorkflowName> = ["zeta.yml", "alpha.yml", "mid.yml"]
            .iter()
            .filter_map(|f| WorkflowName::from_file_name(OsStr::new(f)))
            .collect();
        names.sort();
        let rendered: Vec<&str> = names.iter().map(WorkflowName::as_str).collect();
        assert_eq!(rendered, vec!["alpha", "mid", "zeta"]);
    }
}
