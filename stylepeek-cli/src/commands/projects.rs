//! Project commands - list, show and delete saved projects.

use anyhow::Result;
use stylepeek_store::ProjectStore;
use tracing::info;

use crate::output::{DeleteOutput, JsonFormatter, ProjectSummaryOutput, TextFormatter};
use crate::{Cli, OutputFormat};

/// Lists saved projects, most recent first.
pub async fn list(cli: &Cli) -> Result<()> {
    let store = ProjectStore::load_default().await?;
    let projects = store.all().await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_project_list(&projects));
        }
        OutputFormat::Json => {
            let summaries: Vec<ProjectSummaryOutput> =
                projects.iter().map(ProjectSummaryOutput::from).collect();
            println!("{}", JsonFormatter::new(cli.pretty).format(&summaries)?);
        }
    }

    Ok(())
}

/// Shows one project in full.
pub async fn show(created_at: &str, cli: &Cli) -> Result<()> {
    let store = ProjectStore::load_default().await?;
    let Some(project) = store.find(created_at).await else {
        anyhow::bail!("No saved project with createdAt {created_at}");
    };

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_project(&project));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&project)?);
        }
    }

    Ok(())
}

/// Deletes one project.
pub async fn delete(created_at: &str, cli: &Cli) -> Result<()> {
    let store = ProjectStore::load_default().await?;
    let deleted = store.delete(created_at).await?;
    if deleted {
        info!(created_at, "Project deleted");
    }

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_deleted(created_at, deleted));
        }
        OutputFormat::Json => {
            let output = DeleteOutput {
                created_at: created_at.to_string(),
                deleted,
            };
            println!("{}", JsonFormatter::new(cli.pretty).format(&output)?);
        }
    }

    Ok(())
}
