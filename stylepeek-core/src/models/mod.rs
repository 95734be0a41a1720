//! Domain models for Stylepeek.
//!
//! ## Submodules
//!
//! - [`project`] - The persisted [`StyleProject`] record and its key format
//! - [`typography`] - Typography samples ([`TypeTag`], [`TypeStyle`])
//! - [`interactive`] - Button and link samples

mod interactive;
mod project;
mod typography;

pub use interactive::{ButtonStyle, LINK_TEXT_LIMIT, LinkStyle, truncate_link_text};
pub use project::{
    MAX_COLORS, MAX_INTERACTIVE_SAMPLES, StyleProject, format_timestamp, timestamp_now,
};
pub use typography::{TypeStyle, TypeTag};
