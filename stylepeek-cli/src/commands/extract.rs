//! Extract command - sample a website and save the project.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use stylepeek_extract::StyleExtractor;
use stylepeek_fetch::{CancelHandle, FetchContext, FetchSettings, ProxyEndpoint, ProxyFetcher};
use stylepeek_store::{ProjectStore, Settings, SettingsStore};
use tracing::{debug, info};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Proxy overrides shared by commands that fetch.
#[derive(Args, Debug, Default, Clone)]
pub struct FetchOverrides {
    /// Proxy template to use instead of the configured list (repeatable).
    /// `{url}` is replaced by the encoded target, `{raw_url}` by the raw one.
    #[arg(long = "proxy", value_name = "TEMPLATE")]
    pub proxies: Vec<String>,

    /// Per-proxy timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl FetchOverrides {
    /// Applies the overrides on top of the stored settings.
    pub fn apply(&self, settings: &Settings) -> Result<FetchSettings> {
        let mut settings = settings.clone();
        if !self.proxies.is_empty() {
            settings.proxies = self.proxies.iter().map(ProxyEndpoint::new).collect();
        }
        if let Some(secs) = self.timeout {
            settings.request_timeout_secs = secs;
        }
        settings.validate()?;
        Ok(settings.fetch_settings())
    }
}

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Domain (apple.com) or full URL (https://example.com).
    pub url: String,

    /// Don't save the project.
    #[arg(long, short = 'n')]
    pub no_save: bool,

    #[command(flatten)]
    pub fetch: FetchOverrides,
}

/// Runs the extract command.
pub async fn run(args: &ExtractArgs, store: &SettingsStore, cli: &Cli) -> Result<()> {
    let settings = store.get().await;
    let fetch_settings = args.fetch.apply(&settings)?;
    debug!(proxies = fetch_settings.proxies.len(), timeout = ?fetch_settings.timeout, "Fetch settings");

    let cancel = Arc::new(CancelHandle::new());
    let ctx = FetchContext::builder()
        .settings(fetch_settings)
        .cancel_token(cancel.token())
        .build()?;
    let extractor = StyleExtractor::new(ProxyFetcher::new(ctx));

    let interrupt = {
        let cancel = Arc::clone(&cancel);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };
    let result = extractor.extract(&args.url).await;
    interrupt.abort();
    let project = result?;

    let saved = !args.no_save && settings.auto_save;
    if saved {
        let projects = ProjectStore::load_default().await?;
        projects.insert(project.clone()).await?;
        info!(created_at = %project.created_at, "Project saved");
    }

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_project(&project));
            if saved && !cli.quiet {
                println!();
                println!("{}", formatter.format_saved(&project.created_at));
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&project)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_overrides_replace_proxies() {
        let overrides = FetchOverrides {
            proxies: vec!["https://proxy.test/?u={url}".into()],
            timeout: Some(3),
        };
        let fetch = overrides.apply(&Settings::default()).unwrap();
        assert_eq!(fetch.proxies.len(), 1);
        assert_eq!(fetch.proxies[0].name, "proxy.test");
        assert_eq!(fetch.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_no_overrides_keeps_settings() {
        let settings = Settings::default();
        let fetch = FetchOverrides::default().apply(&settings).unwrap();
        assert_eq!(fetch.proxies, settings.proxies);
        assert_eq!(fetch.timeout, Duration::from_secs(settings.request_timeout_secs));
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let zero = FetchOverrides {
            timeout: Some(0),
            ..FetchOverrides::default()
        };
        assert!(zero.apply(&Settings::default()).is_err());

        let no_placeholder = FetchOverrides {
            proxies: vec!["https://proxy.test/".into()],
            timeout: None,
        };
        assert!(no_placeholder.apply(&Settings::default()).is_err());
    }
}
