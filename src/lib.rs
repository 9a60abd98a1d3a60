//! Skyhook - guarded deployment of Airflow DAG folders to Cloud Composer
//!
//! Skyhook scans a workflow directory, lets the user pick one DAG folder,
//! refuses to continue unless the folder's git working copy is clean, on the
//! deployment branch and in sync with its remote, and then mirrors the folder
//! to the Composer bucket while streaming the sync tool's progress.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{scan_workflows, DeployExecutor, GitValidator, ProgressSink};
pub use config::{RunConfig, RunFlags, Settings};
pub use domain::{classify_line, DeploymentOutcome, GitValidationResult, ProgressEvent, WorkflowFolder};
pub use error::{ErrorCategory, SkyhookError, SkyhookResult};
pub use logging::{RunLog, Stage};
