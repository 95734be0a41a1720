//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;
use stylepeek_core::StyleProject;
use stylepeek_fetch::{FetchAttempt, FetchOutcome};

// ============================================================================
// Output Types
// ============================================================================

/// One line of the project list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryOutput {
    pub title: String,
    pub url: String,
    pub created_at: String,
    pub colors: usize,
    pub type_styles: usize,
    pub button_styles: usize,
    pub link_styles: usize,
}

impl From<&StyleProject> for ProjectSummaryOutput {
    fn from(project: &StyleProject) -> Self {
        Self {
            title: project.title.clone(),
            url: project.url.clone(),
            created_at: project.created_at.clone(),
            colors: project.colors.len(),
            type_styles: project.type_styles.len(),
            button_styles: project.button_styles.len(),
            link_styles: project.link_styles.len(),
        }
    }
}

/// Result of a delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutput {
    pub created_at: String,
    pub deleted: bool,
}

/// A single proxy attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutput {
    pub proxy: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl From<&FetchAttempt> for AttemptOutput {
    fn from(attempt: &FetchAttempt) -> Self {
        Self {
            proxy: attempt.proxy.clone(),
            success: attempt.success,
            error: attempt.error.clone(),
            duration_ms: u64::try_from(attempt.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Proxy check report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput {
    pub url: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub attempts: Vec<AttemptOutput>,
}

impl CheckOutput {
    /// Builds the report from a pipeline outcome.
    pub fn new(url: &str, outcome: &FetchOutcome) -> Self {
        Self {
            url: url.to_string(),
            success: outcome.is_success(),
            proxy: outcome.successful_proxy().map(str::to_string),
            error: outcome.result.as_ref().err().map(ToString::to_string),
            attempts: outcome.attempts.iter().map(AttemptOutput::from).collect(),
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable data.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(output)
    }
}
