//! Workflow folder entity

use std::path::{Path, PathBuf};

/// One deployable unit of orchestration logic (a DAG folder).
///
/// Enumerated fresh from the workflow directory on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowFolder {
    name: String,
    path: PathBuf,
}

impl WorkflowFolder {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Folder name as shown in the menu and used in bucket paths
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the folder on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a directory entry name is eligible as a workflow folder.
    ///
    /// Hidden entries (`.git`, `.venv`) and internal tooling directories
    /// (`__pycache__`, `__init__`) never are.
    pub fn is_candidate_name(name: &str) -> bool {
        !name.is_empty() && !name.starts_with('.') && !name.starts_with("__")
    }
}
