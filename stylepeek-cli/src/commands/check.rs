//! Check command - run the proxy chain and report each attempt.

use anyhow::Result;
use clap::Args;
use stylepeek_extract::normalize_url;
use stylepeek_fetch::{FetchContext, ProxyPipeline};
use stylepeek_store::SettingsStore;
use tracing::info;

use super::extract::FetchOverrides;
use crate::output::{CheckOutput, JsonFormatter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Site probed when no URL is given.
pub const DEFAULT_CHECK_TARGET: &str = "https://example.com";

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Site to fetch.
    #[arg(default_value = DEFAULT_CHECK_TARGET)]
    pub url: String,

    #[command(flatten)]
    pub fetch: FetchOverrides,
}

/// Runs the check command.
pub async fn run(args: &CheckArgs, store: &SettingsStore, cli: &Cli) -> Result<()> {
    let url = normalize_url(&args.url)?;
    let settings = args.fetch.apply(&store.get().await)?;
    let ctx = FetchContext::builder().settings(settings).build()?;

    let pipeline = ProxyPipeline::from_context(&ctx);
    info!(url = %url, proxies = pipeline.len(), "Checking proxies");
    let outcome = pipeline.execute(&ctx, &url).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_check(&url, &outcome));
        }
        OutputFormat::Json => {
            let output = CheckOutput::new(&url, &outcome);
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }

    if !outcome.is_success() {
        std::process::exit(ExitCode::Unreachable as i32);
    }

    Ok(())
}
