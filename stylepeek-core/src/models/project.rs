//! The persisted project record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::interactive::{ButtonStyle, LinkStyle};
use super::typography::TypeStyle;

/// Maximum number of colour literals kept per project.
pub const MAX_COLORS: usize = 20;

/// Maximum number of sampled buttons or links per project.
pub const MAX_INTERACTIVE_SAMPLES: usize = 5;

/// One saved extraction result.
///
/// Immutable once created. `created_at` doubles as the unique key of the
/// project inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProject {
    /// Page `<title>`, first `<h1>`, or hostname.
    pub title: String,
    /// Normalized absolute URL that was fetched.
    pub url: String,
    /// Resolved favicon URL.
    pub favicon: Option<String>,
    /// Colour literals in discovery order.
    pub colors: Vec<String>,
    /// Typography samples, ordered h1..h6 then p.
    pub type_styles: Vec<TypeStyle>,
    /// Button samples.
    pub button_styles: Vec<ButtonStyle>,
    /// Link samples.
    pub link_styles: Vec<LinkStyle>,
    /// ISO-8601 creation instant, also the project key.
    pub created_at: String,
}

impl StyleProject {
    /// Returns the key this project is stored and deleted under.
    pub fn id(&self) -> &str {
        &self.created_at
    }

    /// Parses `created_at` back into a timestamp.
    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Formats an instant the way project keys are written
/// (`2024-01-15T10:00:00.123Z`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the current instant formatted as a project key.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
