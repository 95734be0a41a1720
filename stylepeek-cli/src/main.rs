// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Stylepeek CLI - sample a website's design system from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Extract and save a project
//! stylepeek extract apple.com
//!
//! # Extract without saving, as JSON
//! stylepeek --format json --pretty extract https://example.com --no-save
//!
//! # Saved projects, most recent first
//! stylepeek list
//!
//! # One project in full
//! stylepeek show 2024-01-15T10:30:00.000Z
//!
//! # Which proxies can reach a site right now
//! stylepeek check example.com
//!
//! # Add a proxy
//! stylepeek config add-proxy "https://proxy.example/fetch?u={url}"
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use stylepeek_store::{LogLevel, SettingsStore};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{check, config, extract, projects};
use output::friendly_message;

// ============================================================================
// CLI Definition
// ============================================================================

/// Stylepeek CLI - design system sampling.
#[derive(Parser)]
#[command(name = "stylepeek")]
#[command(about = "Extract colors, typography, buttons and links from any website")]
#[command(long_about = r#"
Stylepeek fetches a page through a chain of CORS proxies and samples its
design system: up to 20 colors, heading and paragraph typography, and a
handful of button and link styles.

Examples:
  stylepeek extract apple.com        # Extract and save
  stylepeek extract apple.com -n     # Extract only
  stylepeek list                     # Saved projects
  stylepeek --format json list       # JSON output
  stylepeek check example.com        # Probe the proxies
"#)]
#[command(version)]
#[command(author = "Stylepeek Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a design system from a website.
    #[command(visible_alias = "x")]
    Extract(extract::ExtractArgs),

    /// List saved projects, most recent first.
    #[command(visible_alias = "ls")]
    List,

    /// Show one saved project in full.
    Show {
        /// The project's createdAt key.
        created_at: String,
    },

    /// Delete a saved project.
    #[command(visible_alias = "rm")]
    Delete {
        /// The project's createdAt key.
        created_at: String,
    },

    /// Run the proxy chain against a site and report each attempt.
    Check(check::CheckArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Every proxy failed during a check.
    Unreachable = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: LogLevel) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("stylepeek=debug,info")
    } else {
        EnvFilter::new(format!("stylepeek={level}"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = SettingsStore::load_default().await;
    setup_logging(cli.verbose, cli.quiet, settings.get().await.log_level);

    let result = match &cli.command {
        Commands::Extract(args) => extract::run(args, &settings, &cli).await,
        Commands::List => projects::list(&cli).await,
        Commands::Show { created_at } => projects::show(created_at, &cli).await,
        Commands::Delete { created_at } => projects::delete(created_at, &cli).await,
        Commands::Check(args) => check::run(args, &settings, &cli).await,
        Commands::Config(args) => config::run(args, &settings, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("{}", friendly_message(&e.to_string()));
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
