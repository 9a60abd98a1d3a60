//! Sync tool output classification
//!
//! The sync tool reports progress as free text. Everything that depends on
//! its exact phrasing lives in [`classify_line`].

/// Benign warnings printed by `gsutil` and its Python runtime.
pub const IGNORE_PATTERNS: &[&str] = &[
    "WARNING: gsutil rsync uses hashes",
    "module's C extension",
    "checksumming will run very slowly",
    "gsutil help crcmod",
    "Building synchronization state...",
    "problems with multiprocessing",
    "python.org/issue33725",
    "parallel_process_count",
    "multithreading is still available",
];

const UPLOADING: &str = "Uploading";
const FILES: &str = "files";
const COPYING: &str = "Copying";

/// One classified line of sync tool output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Blank line or known noise; never shown
    Ignored,
    /// Batch upload announcement, shown verbatim
    UploadStarted(String),
    /// A file is being copied; path relative to the workflow directory
    FileSyncing(String),
    /// Unknown format; tolerated but not displayed
    Unrecognized,
}

/// Classify a line of sync output for the folder being deployed.
pub fn classify_line(line: &str, folder: &str) -> ProgressEvent {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ProgressEvent::Ignored;
    }

    if IGNORE_PATTERNS.iter().any(|p| line.contains(p)) {
        return ProgressEvent::Ignored;
    }

    if line.contains(UPLOADING) && line.contains(FILES) {
        return ProgressEvent::UploadStarted(trimmed.to_string());
    }

    if line.contains(COPYING) {
        return ProgressEvent::FileSyncing(copied_path(line, folder));
    }

    ProgressEvent::Unrecognized
}

/// Extract the path being copied from a `Copying ...` line.
///
/// `Copying file:///x/dags/etl/sub/f.py [Content-Type=text/x-python]...`
/// becomes `etl/sub/f.py` for folder `etl`. A whole `/etl/` path segment is
/// preferred over a bare substring match, so `/home/etl_ops/...` is skipped.
/// Lines that do not mention the folder fall back to their last path segment
/// (possibly empty).
fn copied_path(line: &str, folder: &str) -> String {
    let clean = line.split('[').next().unwrap_or_default().trim();

    if !folder.is_empty() {
        let segment = format!("/{}/", folder);
        if let Some(idx) = clean.find(&segment) {
            return clean[idx + 1..].to_string();
        }
        if let Some(idx) = clean.find(folder) {
            return clean[idx..].to_string();
        }
    }

    clean
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copying_line_yields_path_from_folder_onward() {
        let event = classify_line(
            "Copying file:///x/dags/my_dag/sub/f.py [Content-Type=text/x-python]",
            "my_dag",
        );
        assert_eq!(event, ProgressEvent::FileSyncing("my_dag/sub/f.py".to_string()));
    }

    #[test]
    fn copying_line_skips_partial_folder_name_matches() {
        let cases = [
            ("Copying file:///home/etl_ops/repo/dags/etl/dag.py", "etl/dag.py"),
            ("Copying file:///etl_repo/dags/etl/sub/f.py [Content-Type=text/x-python]", "etl/sub/f.py"),
            ("Copying file:///repo/dags/etl/etl/nested.py", "etl/etl/nested.py"),
        ];
        for (line, expected) in cases {
            assert_eq!(
                classify_line(line, "etl"),
                ProgressEvent::FileSyncing(expected.to_string()),
                "line: {}",
                line
            );
        }
    }

    #[test]
    fn copying_line_without_metadata_suffix() {
        let event = classify_line("Copying file:///repo/dags/etl/main.py...", "etl");
        assert_eq!(event, ProgressEvent::FileSyncing("etl/main.py...".to_string()));
    }

    #[test]
    fn copying_line_falls_back_to_last_segment() {
        let event = classify_line(
            "Copying file:///elsewhere/report.sql [Content-Type=application/x-sql]",
            "etl",
        );
        assert_eq!(event, ProgressEvent::FileSyncing("report.sql".to_string()));
    }

    #[test]
    fn copying_line_with_trailing_separator_yields_empty_path() {
        let event = classify_line("Copying file:///elsewhere/", "etl");
        assert_eq!(event, ProgressEvent::FileSyncing(String::new()));
    }

    #[test]
    fn copying_line_with_empty_folder_uses_last_segment() {
        let event = classify_line("Copying file:///a/b/c.py", "");
        assert_eq!(event, ProgressEvent::FileSyncing("c.py".to_string()));
    }

    #[test]
    fn uploading_line_is_reported_verbatim() {
        let event = classify_line("Uploading 12 files...", "my_dag");
        assert_eq!(
            event,
            ProgressEvent::UploadStarted("Uploading 12 files...".to_string())
        );
    }

    #[test]
    fn uploading_line_is_trimmed() {
        let event = classify_line("  Uploading 3 files...\r", "my_dag");
        assert_eq!(
            event,
            ProgressEvent::UploadStarted("Uploading 3 files...".to_string())
        );
    }

    #[test]
    fn uploading_without_files_keyword_is_unrecognized() {
        assert_eq!(
            classify_line("Uploading manifest", "my_dag"),
            ProgressEvent::Unrecognized
        );
    }

    #[test]
    fn every_ignore_pattern_is_ignored() {
        for pattern in IGNORE_PATTERNS {
            let line = format!("prefix {} suffix", pattern);
            assert_eq!(classify_line(&line, "my_dag"), ProgressEvent::Ignored, "{line}");
        }
    }

    #[test]
    fn ignore_patterns_win_over_copying() {
        let line = "Copying my_dag/a.py; see gsutil help crcmod";
        assert_eq!(classify_line(line, "my_dag"), ProgressEvent::Ignored);
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(classify_line("", "my_dag"), ProgressEvent::Ignored);
        assert_eq!(classify_line("   \t", "my_dag"), ProgressEvent::Ignored);
    }

    #[test]
    fn unknown_lines_are_unrecognized() {
        assert_eq!(
            classify_line("Operation completed over 4 objects/1.2 KiB.", "my_dag"),
            ProgressEvent::Unrecognized
        );
    }
}
