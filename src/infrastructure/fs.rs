//! File system helpers
//!
//! Directory listing for the scanner and the recursive file count shown in
//! the deployment summary.

use std::fs;
use std::io;
use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::{Exclusions, WorkflowFolder};
use crate::error::{SkyhookError, SkyhookResult};

/// List the immediate subdirectories of `dir` that are workflow candidates,
/// sorted by name.
pub fn list_workflow_folders(dir: &Path) -> SkyhookResult<Vec<WorkflowFolder>> {
    if !dir.is_dir() {
        return Err(SkyhookError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut folders = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !WorkflowFolder::is_candidate_name(&name) {
            continue;
        }
        // Follow symlinks: a linked DAG folder is still deployable.
        if fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false) {
            folders.push(WorkflowFolder::new(name, entry.path()));
        }
    }

    folders.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(folders)
}

/// Count the files under `root` that a deployment uploads.
///
/// Excluded directories are pruned without descending; excluded file names
/// are skipped at any depth. No gitignore rules apply.
pub fn count_files(root: &Path, exclusions: &Exclusions) -> SkyhookResult<usize> {
    let dir_filter = exclusions.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            !(entry.depth() > 0 && is_dir && dir_filter.excludes_dir(&entry.file_name().to_string_lossy()))
        })
        .build();

    let mut count = 0;
    for entry in walker {
        let entry = entry.map_err(io::Error::other)?;
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file && !exclusions.excludes_file(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }
    Ok(count)
}
