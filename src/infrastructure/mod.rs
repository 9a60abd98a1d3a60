//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs` - Folder listing and file counting
//! - `git` - `git` subprocess adapter
//! - `sync/` - Sync tool adapters (gsutil)
//! - `quotes` - Quote of the day HTTP client

pub mod fs;
pub mod git;
pub mod quotes;
pub mod sync;

// Re-export for convenience
pub use fs::{count_files, list_workflow_folders};
pub use git::GitCli;
pub use quotes::fetch_quote;
pub use sync::GsutilSync;
