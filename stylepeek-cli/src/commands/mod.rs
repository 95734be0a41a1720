//! CLI command implementations.

pub mod check;
pub mod config;
pub mod extract;
pub mod projects;
