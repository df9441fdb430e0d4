//! Common test utilities for marty integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Relative path of the installed workflows directory
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// A throwaway project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path of an installed workflow, relative to the project root
    pub fn workflow_file(name: &str) -> String {
        format!("{WORKFLOWS_DIR}/{name}.yml")
    }

    /// Install a workflow file by hand, bypassing marty
    pub fn install_workflow(&self, name: &str, content: &str) {
        self.write_file(&Self::workflow_file(name), content);
    }

    /// Create a directory of stand-in bundled workflows and return its path
    pub fn bundled_dir(&self, workflows: &[(&str, &str)]) -> PathBuf {
        let dir = self.path.join("bundled");
        std::fs::create_dir_all(&dir).expect("Failed to create bundled directory");
        for (name, content) in workflows {
            std::fs::write(dir.join(format!("{name}.yml")), content)
                .expect("Failed to write bundled workflow");
        }
        dir
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Content of the workflow shipped in the binary
#[allow(dead_code)]
pub fn bundled_issue_discussion() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("workflows")
        .join("issue-discussion.yml");
    std::fs::read_to_string(path).expect("Failed to read bundled workflow")
}

/// marty command isolated from the developer's environment
#[allow(deprecated)]
pub fn marty_cmd() -> Command {
    let mut cmd = Command::cargo_bin("marty").expect("marty binary should be built");
    cmd.env_remove("MARTY_PATH");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// marty command targeting `project` through `--path`
#[allow(dead_code)]
pub fn marty_cmd_for_project(project: &Path) -> Command {
    let mut cmd = marty_cmd();
    cmd.arg("--path").arg(project);
    cmd
}
