//! Extract command

use clap::Args;
use console::style;
use tracing::info;

use relnotes_changelog::{extract_to_dir, ExtractionResult};

use super::artifacts_config;
use crate::cli::output::key_value;
use crate::cli::{Cli, OutputFormat};

/// Extract the newest changelog entry into flat files
#[derive(Debug, Default, Args)]
pub struct ExtractCommand {}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let dir = cli.working_dir()?;
        info!(dir = %dir.display(), "executing extract command");
        let config = artifacts_config(cli)?;

        let result = extract_to_dir(&dir, &config)?;

        if !cli.quiet {
            print_result(&result, cli.format)?;
        }

        Ok(())
    }
}

/// Print the extraction summary
pub(crate) fn print_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                key_value("New version", &style(result.version()).green().bold().to_string())
            );
            println!("{}", key_value("Old version", result.old_version()));
            println!("{}", key_value("Title", result.title()));
            println!("{}", style("Changes:").bold());
            println!("{}", result.changes_block());
        }
    }
    Ok(())
}
