//! Error types for Skyhook
//!
//! Every stage raises a specifically-kinded `SkyhookError`; the binary's
//! orchestrator is the only place that turns a kind into a message and an
//! exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::git_state::GitValidationResult;

/// Result type alias for Skyhook operations
pub type SkyhookResult<T> = Result<T, SkyhookError>;

/// Main error type for Skyhook operations
#[derive(Error, Debug)]
pub enum SkyhookError {
    /// The workflow directory does not exist
    #[error("directory '{}' not found", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The workflow directory holds no deployable folders
    #[error("no folders found in {}", path.display())]
    NoFoldersFound { path: PathBuf },

    /// The user backed out of an interactive step
    #[error("{message}")]
    Cancelled { message: String },

    /// The working copy failed one of the git checks
    #[error("{}", .0.guidance())]
    Validation(GitValidationResult),

    /// Missing or malformed configuration
    #[error("{0}")]
    Config(String),

    /// The sync tool exited non-zero
    #[error("deployment to {destination} failed")]
    DeploymentFailed { destination: String, log: String },

    /// The sync tool binary could not be started
    #[error("sync tool '{tool}' not found on PATH")]
    SyncToolMissing { tool: String },

    /// A git invocation failed in a way that does not map to a check outcome
    #[error("git {args} failed: {stderr}")]
    GitCommand { args: String, stderr: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-facing classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserCancellation,
    ValidationFailure,
    ConfigurationError,
    DeploymentFailure,
    UnexpectedError,
}

impl SkyhookError {
    pub fn cancelled(message: impl Into<String>) -> Self {
        SkyhookError::Cancelled {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SkyhookError::DirectoryNotFound { .. }
            | SkyhookError::NoFoldersFound { .. }
            | SkyhookError::Cancelled { .. } => ErrorCategory::UserCancellation,
            SkyhookError::Validation(_) => ErrorCategory::ValidationFailure,
            SkyhookError::Config(_) => ErrorCategory::ConfigurationError,
            SkyhookError::DeploymentFailed { .. } => ErrorCategory::DeploymentFailure,
            SkyhookError::SyncToolMissing { .. }
            | SkyhookError::GitCommand { .. }
            | SkyhookError::Io(_) => ErrorCategory::UnexpectedError,
        }
    }
}
