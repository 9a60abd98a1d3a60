//! Configuration module for Skyhook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`GCS_BUCKET_NAME`, `COMPOSER_URL_BASE`)
//! 3. Project config (`<root>/skyhook.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, resolve, resolve_root, ConfigWarning};
pub use types::{
    AnimationMode, ColorMode, GitConfig, OutputConfig, QuoteConfig, RunConfig, RunFlags,
    Settings, SyncConfig, WorkflowsConfig, CONFIG_FILE_NAME, ENV_BASE_URL, ENV_BUCKET,
};
