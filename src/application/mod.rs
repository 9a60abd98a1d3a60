//! Application Layer
//!
//! Use cases that drive one deployment run.
//! This layer:
//! - Depends on Domain layer (types, ports)
//! - Does NOT talk to the terminal (that is the binary's job)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `scan_workflows` - List deployable folders
//! - `GitValidator` - Guard the working copy before deploying
//! - `DeployExecutor` - Run the sync tool and classify its output

pub mod deploy;
pub mod scan;
pub mod validate;

pub use deploy::{DeployExecutor, NullSink, ProgressSink, IDLE_TICK};
pub use scan::{resolve_choice, scan_workflows};
pub use validate::GitValidator;
