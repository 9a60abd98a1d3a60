//! Verbose run log
//!
//! `RunLog` is created once per run and handed by reference to every stage.
//! When disabled every call is a no-op; when enabled each event is appended
//! to `<root>/skyhook.log` as `[timestamp][STAGE][LEVEL] message`.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

/// File name of the verbose log, created in the root directory
pub const LOG_FILE_NAME: &str = "skyhook.log";

/// Pipeline stage a log line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Config,
    Scan,
    Select,
    Git,
    Deploy,
    Sync,
    Quote,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Init => "INIT",
            Stage::Config => "CONFIG",
            Stage::Scan => "SCAN",
            Stage::Select => "SELECT",
            Stage::Git => "GIT",
            Stage::Deploy => "DEPLOY",
            Stage::Sync => "SYNC",
            Stage::Quote => "QUOTE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunLog {
    path: Option<PathBuf>,
}

impl RunLog {
    /// A log that records nothing
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Start a fresh log file at `path`, truncating any previous run.
    ///
    /// A file that cannot be created leaves logging silently disabled for
    /// writes that fail later; start-up never fails because of the log.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let _ = fs::write(&path, "");
        Self { path: Some(path) }
    }

    /// `to_file` when `verbose`, otherwise `disabled`
    pub fn for_run(verbose: bool, path: impl Into<PathBuf>) -> Self {
        if verbose {
            Self::to_file(path)
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, stage: Stage, message: impl AsRef<str>) {
        self.log(stage, Level::Info, message.as_ref());
    }

    pub fn warn(&self, stage: Stage, message: impl AsRef<str>) {
        self.log(stage, Level::Warn, message.as_ref());
    }

    pub fn error(&self, stage: Stage, message: impl AsRef<str>) {
        self.log(stage, Level::Error, message.as_ref());
    }

    fn log(&self, stage: Stage, level: Level, message: &str) {
        let Some(path) = &self.path else { return };

        let line = format_line(&timestamp(), stage, level, message);
        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };
        let _ = file.write_all(line.as_bytes());
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_line(timestamp: &str, stage: Stage, level: Level, message: &str) -> String {
    format!("[{}][{}][{}] {}\n", timestamp, stage, level, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn format_line_matches_log_layout() {
        let line = format_line("2024-01-01T00:00:00.000Z", Stage::Scan, Level::Warn, "hi");
        assert_eq!(line, "[2024-01-01T00:00:00.000Z][SCAN][WARN] hi\n");
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let dir = tempdir().unwrap();
        let log = RunLog::for_run(false, dir.path().join(LOG_FILE_NAME));

        log.info(Stage::Init, "started");

        assert!(!log.is_enabled());
        assert!(!dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn enabled_log_truncates_then_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "stale\n").unwrap();

        let log = RunLog::for_run(true, &path);
        log.info(Stage::Init, "started");
        log.error(Stage::Deploy, "boom");

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[INIT][INFO] started"));
        assert!(lines[1].ends_with("[DEPLOY][ERROR] boom"));
        assert!(lines[0].starts_with('['));
        assert!(lines[0][1..].contains("T"));
    }

    #[test]
    fn unwritable_log_is_silent() {
        let dir = tempdir().unwrap();
        let log = RunLog::to_file(dir.path().join("missing/dir/skyhook.log"));
        log.warn(Stage::Git, "ignored");
        assert!(log.is_enabled());
    }
}
