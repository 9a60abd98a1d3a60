//! Failure reporting: the single place where an error kind becomes a
//! message and an exit code.

use skyhook::error::{ErrorCategory, SkyhookError};
use skyhook::logging::{RunLog, Stage};

use crate::ui::blocks::error::{ErrorReport, Severity};
use crate::ui::context::UiContext;

const OPERATION_CANCELLED: &str = "Operation cancelled.";

pub fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::UserCancellation
        | ErrorCategory::ValidationFailure
        | ErrorCategory::ConfigurationError => 0,
        ErrorCategory::DeploymentFailure | ErrorCategory::UnexpectedError => 1,
    }
}

/// Print `err` the way its category calls for and return the exit code.
pub fn report_error(err: &SkyhookError, ui: &UiContext, log: &RunLog) -> i32 {
    let category = err.category();
    log.error(Stage::Init, format!("Run ended ({:?}): {}", category, err));

    let rendered = build_report(err, ui.verbose).render(ui.color, ui.unicode);
    match category {
        ErrorCategory::DeploymentFailure | ErrorCategory::UnexpectedError => eprint!("\n{}", rendered),
        _ => print!("{}", rendered),
    }
    exit_code(category)
}

pub(crate) fn build_report(err: &SkyhookError, verbose: bool) -> ErrorReport {
    match err {
        SkyhookError::Cancelled { message } => ErrorReport::new(Severity::Neutral, message.as_str()),
        SkyhookError::DirectoryNotFound { .. } | SkyhookError::NoFoldersFound { .. } => {
            ErrorReport::new(Severity::Neutral, OPERATION_CANCELLED)
        }
        SkyhookError::Validation(result) => ErrorReport::new(Severity::Attention, result.guidance()),
        SkyhookError::Config(message) => ErrorReport::new(Severity::Attention, "Configuration Error:")
            .with_message(message.as_str())
            .with_hint("Export them in your shell, or add them to the 'env' block of your editor's task runner."),
        SkyhookError::DeploymentFailed { log, .. } => ErrorReport::new(Severity::Failure, err.to_string())
            .with_details("Error Logs:", log.as_str())
            .with_hint("Correct the errors above and try again."),
        _ => {
            let mut report = ErrorReport::new(Severity::Failure, "Unexpected Error:").with_message(err.to_string());
            if let SkyhookError::SyncToolMissing { .. } = err {
                report = report.with_hint("Install the Google Cloud SDK and make sure gsutil is on PATH.");
            }
            if verbose {
                report = report.with_details("Details:", format!("{:#?}", err));
            }
            report
        }
    }
}
