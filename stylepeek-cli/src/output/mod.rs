//! Output formatting for CLI.

mod errors;
mod json;
mod text;

pub use errors::friendly_message;
pub use json::{CheckOutput, DeleteOutput, JsonFormatter, ProjectSummaryOutput};
pub use text::TextFormatter;
