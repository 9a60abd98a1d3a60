pub mod deploy;
pub mod report;
