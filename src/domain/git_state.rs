//! Git validation outcomes

use std::fmt;

/// Commit counts of the local branch relative to its remote tracking branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AheadBehind {
    /// Commits present locally but not on the remote
    pub ahead: u32,
    /// Commits present on the remote but not locally
    pub behind: u32,
}

impl AheadBehind {
    /// Parse the output of `git rev-list --left-right --count a...b`.
    pub fn parse(output: &str) -> Option<Self> {
        let mut parts = output.split_whitespace();
        let ahead = parts.next()?.parse().ok()?;
        let behind = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { ahead, behind })
    }
}

/// Result of validating a working copy before deployment.
///
/// Produced once per run by the validator; every variant except `Passed`
/// stops the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitValidationResult {
    Passed,
    NotARepository,
    NoCommits,
    WrongBranch {
        expected: String,
        actual: String,
    },
    UncommittedChanges,
    OutOfSync {
        /// Remote tracking ref the branch was compared with, e.g. `origin/main`
        tracking: String,
        /// `None` when the counts could not be computed
        counts: Option<AheadBehind>,
    },
}

impl GitValidationResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, GitValidationResult::Passed)
    }

    /// Short status line shown when the validation spinner stops.
    pub fn headline(&self) -> String {
        match self {
            GitValidationResult::Passed => "Git validation passed.".to_string(),
            GitValidationResult::NotARepository => {
                "Validation Failed: Not a git repository.".to_string()
            }
            GitValidationResult::NoCommits => {
                "Validation Failed: Repository has no commits yet.".to_string()
            }
            GitValidationResult::WrongBranch { actual, .. } => {
                format!("Validation Failed: You are on branch '{}'.", actual)
            }
            GitValidationResult::UncommittedChanges => {
                "Validation Failed: Uncommitted changes detected.".to_string()
            }
            GitValidationResult::OutOfSync { tracking, .. } => {
                format!("Validation Failed: Branch is out of sync with {}.", tracking)
            }
        }
    }

    /// What the user should do about it.
    pub fn guidance(&self) -> String {
        match self {
            GitValidationResult::Passed => "Nothing to fix.".to_string(),
            GitValidationResult::NotARepository => {
                "The DAG folder must be version controlled.".to_string()
            }
            GitValidationResult::NoCommits => {
                "Commit the DAG folder before deploying.".to_string()
            }
            GitValidationResult::WrongBranch { expected, .. } => {
                format!("You must be on the '{}' branch to deploy.", expected)
            }
            GitValidationResult::UncommittedChanges => {
                "Commit or stash your changes before deploying.".to_string()
            }
            GitValidationResult::OutOfSync { .. } => {
                "Please pull/push changes before deploying.".to_string()
            }
        }
    }
}

impl fmt::Display for GitValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.headline())
    }
}

/// Individual checks, in the order the validator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitCheck {
    Repository,
    Commits,
    Branch,
    CleanTree,
    RemoteSync,
}

impl GitCheck {
    pub const ALL: [GitCheck; 5] = [
        GitCheck::Repository,
        GitCheck::Commits,
        GitCheck::Branch,
        GitCheck::CleanTree,
        GitCheck::RemoteSync,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            GitCheck::Repository => "Validating Git status...",
            GitCheck::Commits => "Checking commit history...",
            GitCheck::Branch => "Checking current branch...",
            GitCheck::CleanTree => "Checking for uncommitted changes...",
            GitCheck::RemoteSync => "Checking remote sync status...",
        }
    }
}
