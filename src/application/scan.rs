//! Workflow discovery
//!
//! Lists the deployable folders of the workflow directory and resolves a
//! typed answer to one of them.

use std::path::Path;

use crate::domain::WorkflowFolder;
use crate::error::{SkyhookError, SkyhookResult};
use crate::infrastructure::list_workflow_folders;
use crate::logging::{RunLog, Stage};

/// Scan `dir` for workflow folders.
///
/// Fails with `DirectoryNotFound` when `dir` is missing and with
/// `NoFoldersFound` when nothing survives the hidden/`__` filter.
pub fn scan_workflows(dir: &Path, log: &RunLog) -> SkyhookResult<Vec<WorkflowFolder>> {
    log.info(Stage::Scan, format!("Scanning directory: {}", dir.display()));

    let folders = match list_workflow_folders(dir) {
        Ok(folders) => folders,
        Err(err) => {
            log.error(Stage::Scan, err.to_string());
            return Err(err);
        }
    };

    if folders.is_empty() {
        log.error(Stage::Scan, format!("No folders found in {}", dir.display()));
        return Err(SkyhookError::NoFoldersFound {
            path: dir.to_path_buf(),
        });
    }

    log.info(Stage::Scan, format!("Found {} valid DAG folders.", folders.len()));
    Ok(folders)
}

/// Match a typed answer against the folders: exact name first, then a
/// 1-based menu index.
pub fn resolve_choice<'a>(folders: &'a [WorkflowFolder], answer: &str) -> Option<&'a WorkflowFolder> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    if let Some(folder) = folders.iter().find(|f| f.name() == answer) {
        return Some(folder);
    }
    let index: usize = answer.parse().ok()?;
    index.checked_sub(1).and_then(|i| folders.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn only_hidden_and_dunder_entries_yield_no_folders() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("__pycache__")).unwrap();
        fs::write(dir.path().join("loose_dag.py"), "x").unwrap();

        let err = scan_workflows(dir.path(), &RunLog::disabled()).unwrap_err();
        assert!(matches!(err, SkyhookError::NoFoldersFound { .. }));
    }

    #[test]
    fn missing_directory_yields_not_found() {
        let dir = tempdir().unwrap();
        let err = scan_workflows(&dir.path().join("dags"), &RunLog::disabled()).unwrap_err();
        assert!(matches!(err, SkyhookError::DirectoryNotFound { .. }));
    }

    #[test]
    fn scan_logs_found_folders() {
        let dir = tempdir().unwrap();
        let dags = dir.path().join("dags");
        fs::create_dir_all(dags.join("etl")).unwrap();
        let log = RunLog::to_file(dir.path().join("skyhook.log"));

        let folders = scan_workflows(&dags, &log).unwrap();

        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].path(), dags.join("etl"));
        let content = fs::read_to_string(dir.path().join("skyhook.log")).unwrap();
        assert!(content.contains("[SCAN][INFO] Found 1 valid DAG folders."));
    }

    #[test]
    fn resolve_choice_by_name_or_index() {
        let folders = vec![
            WorkflowFolder::new("alpha", "/d/alpha"),
            WorkflowFolder::new("2", "/d/2"),
            WorkflowFolder::new("beta", "/d/beta"),
        ];

        assert_eq!(resolve_choice(&folders, "beta\n").map(|f| f.name()), Some("beta"));
        assert_eq!(resolve_choice(&folders, "1").map(|f| f.name()), Some("alpha"));
        // A folder literally named "2" wins over index 2.
        assert_eq!(resolve_choice(&folders, "2").map(|f| f.name()), Some("2"));
        assert_eq!(resolve_choice(&folders, "3").map(|f| f.name()), Some("beta"));
        assert!(resolve_choice(&folders, "0").is_none());
        assert!(resolve_choice(&folders, "4").is_none());
        assert!(resolve_choice(&folders, "gamma").is_none());
        assert!(resolve_choice(&folders, "   ").is_none());
    }
}
