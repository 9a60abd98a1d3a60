//! Sync Tool Port
//!
//! Abstracts the external program that mirrors a local folder to object
//! storage. The executor owns spawning, streaming and exit handling; a tool
//! only knows how to build its command line.

use std::path::Path;
use std::process::Command;

pub trait SyncTool {
    /// Program name (for logging and "not found" errors)
    fn name(&self) -> &str;

    /// Build the command that mirrors `source` to `destination`
    fn command(&self, source: &Path, destination: &str) -> Command;
}
