//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod git_repository;
pub mod sync_tool;

pub use git_repository::GitRepository;
pub use sync_tool::SyncTool;
