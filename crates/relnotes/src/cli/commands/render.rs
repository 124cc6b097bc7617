//! Render command

use clap::Args;
use tracing::info;

use relnotes_changelog::{render_in_dir, RenderedPage};

use super::artifacts_config;
use crate::cli::{output, Cli, OutputFormat};

/// Render the extracted entry as an HTML page
#[derive(Debug, Default, Args)]
pub struct RenderCommand {}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let dir = cli.working_dir()?;
        info!(dir = %dir.display(), "executing render command");
        let config = artifacts_config(cli)?;

        let page = render_in_dir(&dir, &config)?;

        if !cli.quiet {
            let output_path = dir.join(&config.html);
            print_page(&page, &output_path, cli.format)?;
        }

        Ok(())
    }
}

/// Print the rendering summary
pub(crate) fn print_page(
    page: &RenderedPage,
    output_path: &std::path::Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "title": page.title,
                "output": output_path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            output::success(&format!("Generated HTML for: {}", page.title));
        }
    }
    Ok(())
}
