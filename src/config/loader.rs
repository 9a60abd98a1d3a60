//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SkyhookError, SkyhookResult};

use super::types::{RunConfig, RunFlags, Settings, CONFIG_FILE_NAME, ENV_BASE_URL, ENV_BUCKET};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key, e.g. `sync.ignored_dir`
    pub key: String,
    pub file: PathBuf,
}

/// Load settings and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> SkyhookResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SkyhookError::Config(format!("invalid {}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((settings, warnings))
}

/// Load `skyhook.toml` from the root directory, or defaults when absent
pub fn load_or_default(root: &Path) -> SkyhookResult<(Settings, Vec<ConfigWarning>)> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok((Settings::default(), Vec::new()));
    }
    load_with_warnings(&path)
}

/// Resolve the run configuration.
///
/// `get_env` stands in for the process environment so tests can run
/// without mutating it.
pub fn resolve(
    cwd: &Path,
    root_arg: Option<&Path>,
    flags: RunFlags,
    get_env: impl Fn(&str) -> Option<String>,
) -> SkyhookResult<(RunConfig, Vec<ConfigWarning>)> {
    let bucket_id = required_env(&get_env, ENV_BUCKET);
    let base_url = required_env(&get_env, ENV_BASE_URL);
    let (Some(bucket_id), Some(base_url)) = (bucket_id, base_url) else {
        return Err(SkyhookError::Config(format!(
            "Missing {} or {} environment variables.",
            ENV_BUCKET, ENV_BASE_URL
        )));
    };

    let root_dir = resolve_root(cwd, root_arg);
    let (settings, warnings) = load_or_default(&root_dir)?;
    let workflows_dir = root_dir.join(&settings.workflows.dir);

    let config = RunConfig {
        root_dir,
        workflows_dir,
        bucket_id,
        base_url,
        verbose: flags.verbose,
        skip_git_check: flags.skip_git_check,
        settings,
    };
    Ok((config, warnings))
}

/// Root directory from the optional positional argument
pub fn resolve_root(cwd: &Path, root_arg: Option<&Path>) -> PathBuf {
    match root_arg {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd.to_path_buf(),
    }
}

fn required_env(get_env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    get_env(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
