//! Domain Layer
//!
//! Pure pipeline types and rules with no I/O of their own.
//!
//! ## Structure
//!
//! - `workflow` - Deployable workflow folders
//! - `exclusions` - Files left out of a deployment
//! - `git_state` - Tagged outcome of the git checks
//! - `progress` - Classification of sync tool output lines
//! - `outcome` - Result of a deployment
//! - `ports/` - Interface definitions for infrastructure

pub mod exclusions;
pub mod git_state;
pub mod outcome;
pub mod ports;
pub mod progress;
pub mod workflow;

pub use exclusions::Exclusions;
pub use git_state::{AheadBehind, GitCheck, GitValidationResult};
pub use outcome::DeploymentOutcome;
pub use progress::{classify_line, ProgressEvent, IGNORE_PATTERNS};
pub use workflow::WorkflowFolder;
