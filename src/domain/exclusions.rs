//! Files left out of a deployment
//!
//! The same list drives both the sync tool's exclusion pattern and the file
//! count in the summary, so the reported count matches what was uploaded.

use crate::config::SyncConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    dirs: Vec<String>,
    files: Vec<String>,
}

impl Exclusions {
    pub fn new(dirs: Vec<String>, files: Vec<String>) -> Self {
        Self { dirs, files }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.ignored_dirs.clone(), config.ignored_files.clone())
    }

    /// Whether a directory with this name is skipped entirely
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.iter().any(|d| d == name)
    }

    /// Whether a file with this name is skipped
    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    /// Python regular expression for `gsutil rsync -x`, matched against
    /// paths relative to the synced folder. `None` when nothing is excluded.
    pub fn to_sync_pattern(&self) -> Option<String> {
        let mut alternatives = Vec::new();
        if !self.dirs.is_empty() {
            alternatives.push(format!("(^|.*/)({})/.*", join_escaped(&self.dirs)));
        }
        if !self.files.is_empty() {
            alternatives.push(format!("(^|.*/)({})$", join_escaped(&self.files)));
        }
        if alternatives.is_empty() {
            None
        } else {
            Some(alternatives.join("|"))
        }
    }
}

fn join_escaped(names: &[String]) -> String {
    names
        .iter()
        .map(|n| escape_regex(n))
        .collect::<Vec<_>>()
        .join("|")
}

fn escape_regex(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.^$*+?{}[]|()".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
