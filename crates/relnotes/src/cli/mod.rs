//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{ExtractCommand, RenderCommand, RunCommand};

/// Relnotes - extract the newest changelog entry and render it as HTML
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory holding the changelog and flat files
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (default: search for relnotes.toml / relnotes.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the newest changelog entry into flat files
    Extract(ExtractCommand),

    /// Render the extracted entry as an HTML page
    Render(RenderCommand),

    /// Extract then render
    Run(RunCommand),
}

impl Cli {
    /// Build a CLI with default global options, for the single-stage binaries
    pub fn for_command(command: Commands) -> Self {
        Self {
            verbose: false,
            quiet: false,
            format: OutputFormat::Text,
            directory: None,
            config: None,
            command,
        }
    }

    /// Directory the stages operate in
    pub fn working_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Extract(ref cmd) => cmd.execute(&self),
            Commands::Render(ref cmd) => cmd.execute(&self),
            Commands::Run(ref cmd) => cmd.execute(&self),
        }
    }
}
