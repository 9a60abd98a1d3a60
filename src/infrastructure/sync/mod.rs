//! Sync tool implementations

pub mod gsutil;

pub use gsutil::GsutilSync;
