//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use stylepeek_store::{SettingsStore, default_config_dir, default_projects_path};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Append a proxy to the list.
    AddProxy {
        /// URL template containing `{url}` (encoded) or `{raw_url}` (verbatim).
        template: String,
    },

    /// Remove a proxy by its position in `config show`.
    RemoveProxy {
        /// Zero-based index.
        index: usize,
    },

    /// Set the per-proxy timeout.
    Timeout {
        /// Seconds, at least 1.
        secs: u64,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, store: &SettingsStore, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(store, cli).await,
        ConfigAction::Path => show_paths(store, cli),
        ConfigAction::AddProxy { template } => add_proxy(store, template).await,
        ConfigAction::RemoveProxy { index } => remove_proxy(store, *index).await,
        ConfigAction::Timeout { secs } => set_timeout(store, *secs).await,
        ConfigAction::Reset => reset_config(store).await,
    }
}

async fn show_config(store: &SettingsStore, cli: &Cli) -> Result<()> {
    let settings = store.get().await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_settings(&settings));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&settings)?);
        }
    }

    Ok(())
}

fn show_paths(store: &SettingsStore, cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let projects_path = default_projects_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", store.path().display());
            println!("Projects file: {}", projects_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": store.path().display().to_string(),
                "projects_file": projects_path.display().to_string(),
            });
            println!("{}", JsonFormatter::new(cli.pretty).format(&paths)?);
        }
    }

    Ok(())
}

async fn add_proxy(store: &SettingsStore, template: &str) -> Result<()> {
    let proxy = store.add_proxy(template).await?;
    store.save().await?;

    info!(proxy = %proxy, "Proxy added");
    println!("Added proxy: {} ({})", proxy.name, proxy.template);

    Ok(())
}

async fn remove_proxy(store: &SettingsStore, index: usize) -> Result<()> {
    let proxy = store.remove_proxy(index).await?;
    store.save().await?;

    info!(proxy = %proxy, "Proxy removed");
    println!("Removed proxy: {}", proxy.name);
    if store.get().await.proxies.is_empty() {
        println!("Warning: no proxies left, extraction will fail until one is added");
    }

    Ok(())
}

async fn set_timeout(store: &SettingsStore, secs: u64) -> Result<()> {
    store.set_request_timeout(secs).await?;
    store.save().await?;

    info!(secs, "Request timeout updated");
    println!("Request timeout set to: {secs}s");

    Ok(())
}

async fn reset_config(store: &SettingsStore) -> Result<()> {
    store.reset().await;
    store.save().await?;

    info!(path = %store.path().display(), "Settings reset");
    println!("Configuration reset to defaults");

    Ok(())
}
