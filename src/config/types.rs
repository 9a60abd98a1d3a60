//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SkyhookResult;

use super::loader::{self, ConfigWarning};

/// Name of the optional project configuration file in the root directory
pub const CONFIG_FILE_NAME: &str = "skyhook.toml";

/// Environment variable holding the Composer bucket name
pub const ENV_BUCKET: &str = "GCS_BUCKET_NAME";

/// Environment variable holding the Composer web console base URL
pub const ENV_BASE_URL: &str = "COMPOSER_URL_BASE";

/// Workflow directory layout
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowsConfig {
    /// Directory (relative to root) that holds one folder per DAG
    #[serde(default = "default_dags")]
    pub dir: String,

    /// Object prefix inside the bucket
    #[serde(default = "default_dags")]
    pub bucket_prefix: String,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            dir: default_dags(),
            bucket_prefix: default_dags(),
        }
    }
}

/// Git validation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            remote: default_remote(),
        }
    }
}

/// Sync tool settings
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Program used to mirror the folder to the bucket
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Remove objects at the destination that no longer exist locally
    #[serde(default = "default_true")]
    pub delete_extraneous: bool,

    /// Directory names that are neither uploaded nor counted
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,

    /// File names that are neither uploaded nor counted
    #[serde(default = "default_ignored_files")]
    pub ignored_files: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            delete_extraneous: true,
            ignored_dirs: default_ignored_dirs(),
            ignored_files: default_ignored_files(),
        }
    }
}

/// Terminal output settings
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Never,
}

/// Post-deployment quote settings
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_quote_timeout")]
    pub timeout_secs: u64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_quote_timeout(),
        }
    }
}

/// Contents of `skyhook.toml`; every key is optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub workflows: WorkflowsConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub quote: QuoteConfig,
}

impl Settings {
    /// Load settings from a file, collecting unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> SkyhookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `skyhook.toml` from `root`, or defaults when it does not exist
    pub fn load_or_default(root: &Path) -> SkyhookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root)
    }
}

/// Flags taken from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub verbose: bool,
    pub skip_git_check: bool,
}

/// Everything a run needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root_dir: PathBuf,
    pub workflows_dir: PathBuf,
    pub bucket_id: String,
    pub base_url: String,
    pub verbose: bool,
    pub skip_git_check: bool,
    pub settings: Settings,
}

impl RunConfig {
    /// Resolve from the root argument, flags and environment.
    ///
    /// Reads the process environment; see [`loader::resolve`] for the
    /// testable form.
    pub fn resolve(root_arg: Option<&Path>, flags: RunFlags) -> SkyhookResult<(Self, Vec<ConfigWarning>)> {
        let cwd = std::env::current_dir()?;
        loader::resolve(&cwd, root_arg, flags, |key| std::env::var(key).ok())
    }

    /// `gs://<bucket>/<prefix>`
    pub fn bucket_url(&self) -> String {
        format!(
            "gs://{}/{}",
            self.bucket_id,
            self.settings.workflows.bucket_prefix.trim_matches('/')
        )
    }

    /// Destination URI of a workflow folder
    pub fn destination_for(&self, folder: &str) -> String {
        format!("{}/{}", self.bucket_url(), folder)
    }

    /// Web console link to a deployed workflow folder
    pub fn console_url_for(&self, folder: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.settings.workflows.bucket_prefix.trim_matches('/'),
            folder
        )
    }

    /// Path of the verbose log file
    pub fn log_path(&self) -> PathBuf {
        self.root_dir.join(crate::logging::LOG_FILE_NAME)
    }
}

fn default_true() -> bool {
    true
}

fn default_dags() -> String {
    "dags".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tool() -> String {
    "gsutil".to_string()
}

fn default_quote_timeout() -> u64 {
    3
}

fn default_ignored_dirs() -> Vec<String> {
    [".git", "__pycache__", "tests", ".github"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_ignored_files() -> Vec<String> {
    [
        "pyproject.toml",
        "README.md",
        "Makefile",
        ".gitignore",
        ".pre-commit-config.yaml",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
