//! gsutil Sync Tool
//!
//! Mirrors a folder to Cloud Storage with `gsutil -m rsync -r`.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::SyncConfig;
use crate::domain::ports::SyncTool;
use crate::domain::Exclusions;

/// Sync tool backed by `gsutil rsync`
#[derive(Debug, Clone)]
pub struct GsutilSync {
    program: String,
    delete_extraneous: bool,
    exclude_pattern: Option<String>,
}

impl GsutilSync {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            delete_extraneous: true,
            exclude_pattern: None,
        }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.tool.clone())
            .with_delete_extraneous(config.delete_extraneous)
            .with_exclusions(&Exclusions::from_config(config))
    }

    pub fn with_delete_extraneous(mut self, delete: bool) -> Self {
        self.delete_extraneous = delete;
        self
    }

    pub fn with_exclusions(mut self, exclusions: &Exclusions) -> Self {
        self.exclude_pattern = exclusions.to_sync_pattern();
        self
    }

    /// Arguments after the program name
    pub fn args(&self, source: &Path, destination: &str) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "rsync".to_string(), "-r".to_string()];
        if self.delete_extraneous {
            args.push("-d".to_string());
        }
        if let Some(pattern) = &self.exclude_pattern {
            args.push("-x".to_string());
            args.push(pattern.clone());
        }
        args.push(source.display().to_string());
        args.push(destination.to_string());
        args
    }
}

impl SyncTool for GsutilSync {
    fn name(&self) -> &str {
        &self.program
    }

    fn command(&self, source: &Path, destination: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(source, destination))
            .stdin(Stdio::null());
        cmd
    }
}
