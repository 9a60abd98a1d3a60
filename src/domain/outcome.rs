//! Deployment outcome

/// What a single run of the sync tool produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    pub files_synced: usize,
    pub destination_uri: String,
    pub success: bool,
    /// Combined stdout/stderr of the sync tool, kept only on failure
    pub error_log: Option<String>,
}

impl DeploymentOutcome {
    pub fn succeeded(destination_uri: impl Into<String>, files_synced: usize) -> Self {
        Self {
            files_synced,
            destination_uri: destination_uri.into(),
            success: true,
            error_log: None,
        }
    }

    pub fn failed(destination_uri: impl Into<String>, log: impl Into<String>) -> Self {
        Self {
            files_synced: 0,
            destination_uri: destination_uri.into(),
            success: false,
            error_log: Some(log.into()),
        }
    }
}
