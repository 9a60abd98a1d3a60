//! Git CLI adapter
//!
//! Implements the `GitRepository` port by running `git -C <folder> ...`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::domain::ports::GitRepository;
use crate::domain::AheadBehind;
use crate::error::{SkyhookError, SkyhookResult};

/// Git queries scoped to one working-copy folder.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str]) -> SkyhookResult<Output> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            // Never block on a credential prompt behind the spinner.
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()?;
        Ok(output)
    }

    fn run_checked(&self, args: &[&str]) -> SkyhookResult<String> {
        let output = self.run(args)?;
        if !output.status.success() {
            return Err(SkyhookError::GitCommand {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitRepository for GitCli {
    fn is_inside_work_tree(&self) -> SkyhookResult<bool> {
        let output = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    fn has_commits(&self) -> SkyhookResult<bool> {
        let output = self.run(&["rev-parse", "--verify", "--quiet", "HEAD"])?;
        Ok(output.status.success())
    }

    fn current_branch(&self) -> SkyhookResult<String> {
        self.run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn has_uncommitted_changes(&self) -> SkyhookResult<bool> {
        let out = self.run_checked(&["status", "--porcelain", "--untracked-files=all", "--", "."])?;
        Ok(!out.is_empty())
    }

    fn fetch(&self, remote: &str, branch: &str) -> SkyhookResult<()> {
        self.run_checked(&["fetch", "--quiet", remote, branch])?;
        Ok(())
    }

    fn rev_parse(&self, rev: &str) -> SkyhookResult<String> {
        self.run_checked(&["rev-parse", "--verify", rev])
    }

    fn ahead_behind(&self, local: &str, remote: &str) -> SkyhookResult<AheadBehind> {
        let range = format!("{}...{}", local, remote);
        let out = self.run_checked(&["rev-list", "--left-right", "--count", &range])?;
        AheadBehind::parse(&out).ok_or_else(|| SkyhookError::GitCommand {
            args: format!("rev-list --left-right --count {}", range),
            stderr: format!("unexpected output '{}'", out),
        })
    }
}
