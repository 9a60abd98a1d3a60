//! Deployment executor
//!
//! Runs the sync tool against one workflow folder and streams its output
//! through [`classify_line`] while it runs:
//!
//! 1. Spawn the tool with piped stdout/stderr
//! 2. Pump both pipes on reader threads into one channel
//! 3. Classify lines in arrival order, ticking the sink when idle
//! 4. On success count the deployed files, on failure keep the raw output

use std::io::{self, BufRead, BufReader, Read};
use std::process::Stdio;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::domain::ports::SyncTool;
use crate::domain::{classify_line, DeploymentOutcome, Exclusions, ProgressEvent, WorkflowFolder};
use crate::error::{SkyhookError, SkyhookResult};
use crate::infrastructure::count_files;
use crate::logging::{RunLog, Stage};

/// How long the consumer waits for output before an idle tick
pub const IDLE_TICK: Duration = Duration::from_millis(80);

/// Receives classified sync output as it arrives.
pub trait ProgressSink {
    fn on_event(&mut self, event: &ProgressEvent);

    /// Called when no output arrived for [`IDLE_TICK`]
    fn on_idle(&mut self) {}
}

/// Sink that drops everything
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_event(&mut self, _event: &ProgressEvent) {}
}

pub struct DeployExecutor<T: SyncTool> {
    tool: T,
    exclusions: Exclusions,
}

impl<T: SyncTool> DeployExecutor<T> {
    pub fn new(tool: T, exclusions: Exclusions) -> Self {
        Self { tool, exclusions }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Run the sync and report what happened.
    ///
    /// A non-zero exit is a failed `DeploymentOutcome`, not an `Err`; `Err`
    /// is reserved for the tool being unavailable or an I/O fault.
    pub fn execute(
        &self,
        folder: &WorkflowFolder,
        destination: &str,
        log: &RunLog,
        sink: &mut dyn ProgressSink,
    ) -> SkyhookResult<DeploymentOutcome> {
        log.info(
            Stage::Deploy,
            format!("Deploying {} to {}", folder.path().display(), destination),
        );

        let mut command = self.tool.command(folder.path(), destination);
        command.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log.error(Stage::Deploy, format!("'{}' not found on PATH", self.tool.name()));
                return Err(SkyhookError::SyncToolMissing {
                    tool: self.tool.name().to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let (tx, rx) = mpsc::channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            let tx = tx.clone();
            readers.push(thread::spawn(move || pump(stdout, tx)));
        }
        if let Some(stderr) = child.stderr.take() {
            let tx = tx.clone();
            readers.push(thread::spawn(move || pump(stderr, tx)));
        }
        drop(tx);

        let mut output = Vec::new();
        loop {
            match rx.recv_timeout(IDLE_TICK) {
                Ok(line) => {
                    let event = classify_line(&line, folder.name());
                    if let ProgressEvent::FileSyncing(path) = &event {
                        log.info(Stage::Sync, format!("Syncing: {}", path));
                    }
                    sink.on_event(&event);
                    output.push(line);
                }
                Err(RecvTimeoutError::Timeout) => sink.on_idle(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        for reader in readers {
            let _ = reader.join();
        }
        let status = child.wait()?;

        if !status.success() {
            let code = status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            log.error(
                Stage::Deploy,
                format!("{} exited with status {}", self.tool.name(), code),
            );
            return Ok(DeploymentOutcome::failed(destination, output.join("\n")));
        }

        let files = count_files(folder.path(), &self.exclusions)?;
        log.info(
            Stage::Deploy,
            format!("Deployment complete: {} files synced to {}", files, destination),
        );
        Ok(DeploymentOutcome::succeeded(destination, files))
    }

    /// `execute`, with a failed outcome turned into `DeploymentFailed`
    pub fn run(
        &self,
        folder: &WorkflowFolder,
        destination: &str,
        log: &RunLog,
        sink: &mut dyn ProgressSink,
    ) -> SkyhookResult<DeploymentOutcome> {
        let outcome = self.execute(folder, destination, log, sink)?;
        if outcome.success {
            return Ok(outcome);
        }
        Err(SkyhookError::DeploymentFailed {
            destination: outcome.destination_uri,
            log: outcome.error_log.unwrap_or_default(),
        })
    }
}

/// Forward `reader` to `tx` one line at a time.
///
/// Both `\n` and `\r` end a line so carriage-return progress updates arrive
/// as they are drawn. Empty segments are dropped.
fn pump<R: Read>(reader: R, tx: Sender<String>) {
    let mut reader = BufReader::new(reader);
    let mut pending: Vec<u8> = Vec::new();

    loop {
        let consumed = match reader.fill_buf() {
            Ok([]) => break,
            Ok(buf) => {
                for &byte in buf {
                    if byte == b'\n' || byte == b'\r' {
                        send_pending(&mut pending, &tx);
                    } else {
                        pending.push(byte);
                    }
                }
                buf.len()
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        };
        reader.consume(consumed);
    }
    send_pending(&mut pending, &tx);
}

fn send_pending(pending: &mut Vec<u8>, tx: &Sender<String>) {
    if pending.is_empty() {
        return;
    }
    let line = String::from_utf8_lossy(pending).into_owned();
    pending.clear();
    let _ = tx.send(line);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::tempdir;

    /// Runs a shell script in place of the real sync tool.
    struct ScriptTool {
        program: String,
        script: String,
    }

    impl ScriptTool {
        fn new(script: &str) -> Self {
            Self {
                program: "sh".to_string(),
                script: script.to_string(),
            }
        }

        fn missing() -> Self {
            Self {
                program: "skyhook-no-such-sync-tool".to_string(),
                script: String::new(),
            }
        }
    }

    impl SyncTool for ScriptTool {
        fn name(&self) -> &str {
            &self.program
        }

        fn command(&self, _source: &Path, _destination: &str) -> Command {
            let mut cmd = Command::new(&self.program);
            cmd.arg("-c").arg(&self.script).stdin(Stdio::null());
            cmd
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<ProgressEvent>,
    }

    impl ProgressSink for Recorder {
        fn on_event(&mut self, event: &ProgressEvent) {
            self.events.push(event.clone());
        }
    }

    fn folder_with_files(root: &Path) -> WorkflowFolder {
        let path = root.join("etl");
        fs::create_dir_all(path.join("__pycache__")).unwrap();
        fs::write(path.join("dag.py"), "dag").unwrap();
        fs::write(path.join("helpers.py"), "helpers").unwrap();
        fs::write(path.join("README.md"), "docs").unwrap();
        fs::write(path.join("__pycache__/dag.cpython-311.pyc"), "x").unwrap();
        WorkflowFolder::new("etl", path)
    }

    fn exclusions() -> Exclusions {
        Exclusions::new(
            vec!["__pycache__".to_string()],
            vec!["README.md".to_string()],
        )
    }

    #[test]
    fn successful_sync_counts_deployed_files() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let executor = DeployExecutor::new(
            ScriptTool::new(
                "echo 'Building synchronization state...' >&2; \
                 echo 'Copying file:///tmp/dags/etl/dag.py [Content-Type=text/x-python]...' >&2",
            ),
            exclusions(),
        );
        let mut sink = Recorder::default();

        let outcome = executor
            .execute(&folder, "gs://bucket/dags/etl", &RunLog::disabled(), &mut sink)
            .unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.files_synced, 2);
        assert_eq!(outcome.destination_uri, "gs://bucket/dags/etl");
        assert_eq!(
            sink.events,
            vec![
                ProgressEvent::Ignored,
                ProgressEvent::FileSyncing("etl/dag.py".to_string()),
            ]
        );
    }

    #[test]
    fn carriage_return_updates_are_separate_lines() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let executor = DeployExecutor::new(
            ScriptTool::new("printf 'Uploading 2 files\\rCopying file:///x/etl/a.py\\r\\n'"),
            exclusions(),
        );
        let mut sink = Recorder::default();

        executor
            .execute(&folder, "gs://b/dags/etl", &RunLog::disabled(), &mut sink)
            .unwrap();

        assert_eq!(
            sink.events,
            vec![
                ProgressEvent::UploadStarted("Uploading 2 files".to_string()),
                ProgressEvent::FileSyncing("etl/a.py".to_string()),
            ]
        );
    }

    #[test]
    fn failed_sync_keeps_combined_output() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let executor = DeployExecutor::new(
            ScriptTool::new("echo 'starting'; echo 'AccessDeniedException: 403' >&2; exit 3"),
            exclusions(),
        );

        let outcome = executor
            .execute(&folder, "gs://b/dags/etl", &RunLog::disabled(), &mut NullSink)
            .unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.files_synced, 0);
        let log = outcome.error_log.unwrap();
        assert!(log.contains("starting"));
        assert!(log.contains("AccessDeniedException: 403"));
    }

    #[test]
    fn run_turns_failure_into_deployment_failed() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let executor = DeployExecutor::new(ScriptTool::new("echo 'quota exceeded' >&2; exit 1"), exclusions());

        let err = executor
            .run(&folder, "gs://b/dags/etl", &RunLog::disabled(), &mut NullSink)
            .unwrap_err();

        match err {
            SkyhookError::DeploymentFailed { destination, log } => {
                assert_eq!(destination, "gs://b/dags/etl");
                assert_eq!(log, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_tool_is_reported_by_name() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let executor = DeployExecutor::new(ScriptTool::missing(), exclusions());

        let err = executor
            .execute(&folder, "gs://b/dags/etl", &RunLog::disabled(), &mut NullSink)
            .unwrap_err();

        assert!(matches!(
            err,
            SkyhookError::SyncToolMissing { ref tool } if tool == "skyhook-no-such-sync-tool"
        ));
    }

    #[test]
    fn synced_files_are_logged_on_sync_stage() {
        let dir = tempdir().unwrap();
        let folder = folder_with_files(dir.path());
        let log_path = dir.path().join("skyhook.log");
        let log = RunLog::to_file(&log_path);
        let executor = DeployExecutor::new(
            ScriptTool::new("echo 'Copying file:///x/etl/dag.py [Content-Type=text/x-python]...'"),
            exclusions(),
        );

        executor
            .execute(&folder, "gs://b/dags/etl", &log, &mut NullSink)
            .unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("[SYNC][INFO] Syncing: etl/dag.py"));
        assert!(content.contains("[DEPLOY][INFO] Deployment complete: 2 files synced"));
    }

    #[test]
    fn pump_splits_on_both_line_endings() {
        let (tx, rx) = mpsc::channel();
        pump(&b"one\r\ntwo\rthree\n\nfour"[..], tx);
        let lines: Vec<String> = rx.iter().collect();
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }
}
