//! CLI commands

mod extract;
mod render;
mod run;

pub use extract::ExtractCommand;
pub use render::RenderCommand;
pub use run::RunCommand;

use relnotes_core::config::{load_config, load_config_or_default, ArtifactsConfig};
use tracing::debug;

use crate::cli::{output, Cli};

/// Resolve artifact names from `--config` or by searching the working directory
pub(crate) fn artifacts_config(cli: &Cli) -> anyhow::Result<ArtifactsConfig> {
    let (config, path) = match &cli.config {
        Some(path) => (load_config(path)?, Some(path.clone())),
        None => load_config_or_default(&cli.working_dir()?)?,
    };

    if let Some(path) = &path {
        debug!(path = %path.display(), "using config file");
        if cli.verbose && !cli.quiet {
            output::info(&format!("Using config {}", path.display()));
        }
    }

    Ok(config.artifacts)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use crate::cli::{Cli, Commands, OutputFormat};

    /// A quiet CLI pointed at `dir`
    pub fn quiet_cli(dir: &Path, command: Commands) -> Cli {
        Cli {
            verbose: false,
            quiet: true,
            format: OutputFormat::Text,
            directory: Some(dir.to_path_buf()),
            config: None,
            command,
        }
    }

    pub const TWO_RELEASES: &str = "# 1.1.0 - New Feature\n* First change\n* Second change\n\n# 1.0.0 - Initial Release\n* Initial features\n";
}
