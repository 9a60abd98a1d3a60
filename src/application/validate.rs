//! Git-state validation
//!
//! Runs the checks of [`GitCheck::ALL`] in order against one working copy and
//! stops at the first failure:
//!
//! 1. inside a working tree, else `NotARepository`
//! 2. HEAD has a commit, else `NoCommits`
//! 3. on the deployment branch, else `WrongBranch`
//! 4. no uncommitted changes in the folder, else `UncommittedChanges`
//! 5. local tip equals the fetched remote tip, else `OutOfSync`
//!
//! The ahead/behind counts attached to `OutOfSync` are best-effort.

use crate::config::GitConfig;
use crate::domain::ports::GitRepository;
use crate::domain::{GitCheck, GitValidationResult};
use crate::error::SkyhookResult;
use crate::logging::{RunLog, Stage};

#[derive(Debug, Clone)]
pub struct GitValidator {
    branch: String,
    remote: String,
}

impl Default for GitValidator {
    fn default() -> Self {
        Self::from_config(&GitConfig::default())
    }
}

impl GitValidator {
    pub fn new(branch: impl Into<String>, remote: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            remote: remote.into(),
        }
    }

    pub fn from_config(config: &GitConfig) -> Self {
        Self::new(config.branch.clone(), config.remote.clone())
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// `<remote>/<branch>`
    pub fn tracking_ref(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }

    /// Validate `repo`, announcing each check to `on_check` before it runs.
    ///
    /// Returns `Err` only when git itself misbehaves; a failed check is an
    /// `Ok` carrying the failing outcome.
    pub fn validate<G, F>(&self, repo: &G, log: &RunLog, mut on_check: F) -> SkyhookResult<GitValidationResult>
    where
        G: GitRepository + ?Sized,
        F: FnMut(GitCheck),
    {
        on_check(GitCheck::Repository);
        if !repo.is_inside_work_tree()? {
            return Ok(self.fail(log, GitValidationResult::NotARepository));
        }

        on_check(GitCheck::Commits);
        if !repo.has_commits()? {
            return Ok(self.fail(log, GitValidationResult::NoCommits));
        }

        on_check(GitCheck::Branch);
        let actual = repo.current_branch()?;
        if actual != self.branch {
            return Ok(self.fail(
                log,
                GitValidationResult::WrongBranch {
                    expected: self.branch.clone(),
                    actual,
                },
            ));
        }

        on_check(GitCheck::CleanTree);
        if repo.has_uncommitted_changes()? {
            return Ok(self.fail(log, GitValidationResult::UncommittedChanges));
        }

        on_check(GitCheck::RemoteSync);
        let tracking = self.tracking_ref();
        repo.fetch(&self.remote, &self.branch)?;
        let local = repo.rev_parse(&self.branch)?;
        let remote = repo.rev_parse(&tracking)?;
        if local != remote {
            let counts = match repo.ahead_behind(&self.branch, &tracking) {
                Ok(counts) => Some(counts),
                Err(err) => {
                    log.warn(Stage::Git, format!("Could not compute ahead/behind counts: {}", err));
                    None
                }
            };
            return Ok(self.fail(log, GitValidationResult::OutOfSync { tracking, counts }));
        }

        log.info(
            Stage::Git,
            format!("Git validation passed ({} branch, in sync with {}).", self.branch, tracking),
        );
        Ok(GitValidationResult::Passed)
    }

    fn fail(&self, log: &RunLog, result: GitValidationResult) -> GitValidationResult {
        log.error(Stage::Git, result.headline());
        result
    }
}
