// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Stylepeek Store
//!
//! Local persistence for Stylepeek.
//!
//! This crate provides:
//!
//! - **ProjectStore**: The saved project collection, most recent first
//! - **SettingsStore**: User preferences with persistence and change notification
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use stylepeek_store::{ProjectStore, SettingsStore};
//!
//! let settings = SettingsStore::load_default().await;
//! let projects = ProjectStore::load_default().await?;
//!
//! projects.insert(project).await?;
//! for p in projects.all().await {
//!     println!("{} ({})", p.title, p.created_at);
//! }
//! ```

pub mod error;
pub mod persistence;
pub mod project_store;
pub mod settings_store;

pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_data_dir, default_projects_path, default_settings_path, ensure_dir,
    load_json, load_json_or_default, save_json,
};
pub use project_store::ProjectStore;
pub use settings_store::{LogLevel, Settings, SettingsStore};
#[cfg(test)]
mod persistence_tests;
