//! Run command: both stages in sequence

use clap::Args;
use tracing::info;

use relnotes_changelog::{extract_to_dir, render_in_dir};

use super::artifacts_config;
use super::extract::print_result;
use super::render::print_page;
use crate::cli::Cli;

/// Extract the newest entry, then render it
#[derive(Debug, Default, Args)]
pub struct RunCommand {}

impl RunCommand {
    /// Execute the run command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let dir = cli.working_dir()?;
        info!(dir = %dir.display(), "executing run command");
        let config = artifacts_config(cli)?;

        let result = extract_to_dir(&dir, &config)?;
        if !cli.quiet {
            print_result(&result, cli.format)?;
        }

        let page = render_in_dir(&dir, &config)?;
        if !cli.quiet {
            print_page(&page, &dir.join(&config.html), cli.format)?;
        }

        Ok(())
    }
}
