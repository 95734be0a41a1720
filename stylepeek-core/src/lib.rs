// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Stylepeek Core
//!
//! Core types, models, and traits for the Stylepeek design-system sampler.
//!
//! This crate provides the foundational abstractions used across all other
//! Stylepeek crates:
//!
//! - Domain models (projects, typography, buttons, links)
//! - The caller-facing extraction error taxonomy
//! - The persistence collaborator trait
//!
//! ## Key Types
//!
//! - [`StyleProject`] - One saved extraction result
//! - [`TypeStyle`] / [`TypeTag`] - Typography sample per heading level or paragraph
//! - [`ButtonStyle`] / [`LinkStyle`] - Interactive element samples
//! - [`ExtractError`] - `InvalidUrl`, `Fetch`, `Extraction`
//! - [`ProjectRepository`] - Where finished projects go

pub mod error;
pub mod models;
pub mod traits;

pub use error::{CoreError, ExtractError};

// Project
pub use models::{
    MAX_COLORS, MAX_INTERACTIVE_SAMPLES, StyleProject, format_timestamp, timestamp_now,
};

// Typography
pub use models::{TypeStyle, TypeTag};

// Interactive
pub use models::{ButtonStyle, LINK_TEXT_LIMIT, LinkStyle, truncate_link_text};

pub use traits::ProjectRepository;
