//! Common test utilities for Skyhook CLI scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated root directory, bare git remote and a fake `gsutil`
//! - `TestResult`: captured exit code and output of one run
//! - `git`: git invocation with a fixed identity

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub const BUCKET: &str = "test-bucket";
pub const BASE_URL: &str = "https://composer.example.com";

/// Stand-in for `gsutil`: records its arguments, prints the kind of noise
/// and progress the real tool does, and fails when `FAKE_GSUTIL_FAIL` is set.
const FAKE_GSUTIL: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$FAKE_GSUTIL_ARGS"
src=""
prev=""
for a in "$@"; do
  src="$prev"
  prev="$a"
done
echo "WARNING: gsutil rsync uses hashes when modification time is not available" >&2
echo "Building synchronization state..." >&2
echo "Starting synchronization..." >&2
for f in "$src"/*.py; do
  echo "Copying file://$f [Content-Type=text/x-python]..." >&2
done
if [ -n "$FAKE_GSUTIL_FAIL" ]; then
  echo "AccessDeniedException: 403 tester does not have storage.objects.create access" >&2
  exit 1
fi
echo "Operation completed over 2 objects/12.0 B."
"#;

/// Result of running the skyhook binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project root with an optional git history.
pub struct TestEnv {
    pub root: TempDir,
    remote: TempDir,
    bin_dir: TempDir,
    skyhook_bin: PathBuf,
}

impl TestEnv {
    /// Root containing `skyhook.toml` with the quote disabled, and a fake
    /// `gsutil` ready on PATH.
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().unwrap(),
            remote: TempDir::new().unwrap(),
            bin_dir: TempDir::new().unwrap(),
            skyhook_bin: PathBuf::from(env!("CARGO_BIN_EXE_skyhook")),
        };
        env.write_config("[quote]\nenabled = false\n");
        env.install_fake_gsutil();
        env
    }

    /// Root holding one committed DAG folder on `main`, pushed to a bare
    /// `origin`.
    pub fn with_synced_dag(folder: &str) -> Self {
        let env = Self::new();
        env.write_file(&format!("dags/{}/dag.py", folder), "from airflow import DAG\n");
        env.write_file(&format!("dags/{}/helpers.py", folder), "def helper(): ...\n");
        env.write_file(&format!("dags/{}/README.md", folder), "# docs\n");
        env.write_file(".gitignore", "skyhook.toml\nskyhook.log\n");
        git(env.path(), &["init", "-q"]);
        git(env.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        env.commit_all("initial");
        git(env.remote.path(), &["init", "-q", "--bare"]);
        git(
            env.path(),
            &["remote", "add", "origin", &env.remote.path().display().to_string()],
        );
        git(env.path(), &["push", "-q", "origin", "main"]);
        env
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path().join(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        self.write_file("skyhook.toml", content);
    }

    pub fn commit_all(&self, message: &str) {
        git(self.path(), &["add", "-A"]);
        git(self.path(), &["commit", "-q", "-m", message]);
    }

    /// File the fake gsutil writes its arguments to
    pub fn gsutil_args_path(&self) -> PathBuf {
        self.bin_dir.path().join("gsutil.args")
    }

    /// Arguments of the last fake gsutil call, if it ran
    pub fn gsutil_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.gsutil_args_path()).ok()?;
        Some(content.lines().map(String::from).collect())
    }

    /// Run `skyhook <args>` from the root, answering the folder prompt with
    /// `answer`.
    pub fn run(&self, args: &[&str], answer: &str) -> TestResult {
        self.run_with_env(args, answer, &[])
    }

    pub fn run_with_env(&self, args: &[&str], answer: &str, extra_env: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.env("GCS_BUCKET_NAME", BUCKET)
            .env("COMPOSER_URL_BASE", BASE_URL);
        for (key, value) in extra_env {
            cmd.env(key, value);
        }
        run_with_stdin(cmd, answer)
    }

    /// Run without the required environment variables
    pub fn run_without_env(&self, args: &[&str]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.env_remove("GCS_BUCKET_NAME").env_remove("COMPOSER_URL_BASE");
        run_with_stdin(cmd, "")
    }

    fn command(&self, args: &[&str]) -> Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::new(&self.skyhook_bin);
        cmd.current_dir(self.path())
            .args(args)
            .env("PATH", format!("{}:{}", self.bin_dir.path().display(), path))
            .env("FAKE_GSUTIL_ARGS", self.gsutil_args_path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("GIT_CONFIG_NOSYSTEM", "1");
        cmd
    }

    fn install_fake_gsutil(&self) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join("gsutil");
        fs::write(&path, FAKE_GSUTIL).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn run_with_stdin(mut cmd: Command, answer: &str) -> TestResult {
    use std::io::Write;

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run skyhook");
    {
        let mut stdin = child.stdin.take().unwrap();
        let _ = stdin.write_all(answer.as_bytes());
    }
    let output = child.wait_with_output().unwrap();
    to_result(output)
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Run git in `dir` with a fixed identity; panics on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "test-user")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "test-user")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
