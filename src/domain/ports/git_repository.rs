//! Git Repository Port
//!
//! The queries the validator needs from a working copy. Each method answers
//! one question; interpreting the answers is the validator's job.

use crate::domain::git_state::AheadBehind;
use crate::error::SkyhookResult;

pub trait GitRepository {
    /// Whether the folder is inside a version-controlled working tree
    fn is_inside_work_tree(&self) -> SkyhookResult<bool>;

    /// Whether HEAD resolves to a commit (false on a freshly initialised repo)
    fn has_commits(&self) -> SkyhookResult<bool>;

    /// Name of the checked-out branch (`HEAD` when detached)
    fn current_branch(&self) -> SkyhookResult<String>;

    /// Whether the folder has staged, unstaged or untracked changes
    fn has_uncommitted_changes(&self) -> SkyhookResult<bool>;

    /// Fetch `branch` from `remote`
    fn fetch(&self, remote: &str, branch: &str) -> SkyhookResult<()>;

    /// Resolve a revision to its commit id
    fn rev_parse(&self, rev: &str) -> SkyhookResult<String>;

    /// Commits unique to each side of `local...remote`
    fn ahead_behind(&self, local: &str, remote: &str) -> SkyhookResult<AheadBehind>;
}
