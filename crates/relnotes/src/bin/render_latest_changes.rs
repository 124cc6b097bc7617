//! Rendering stage: turns `title` and `latest_changes` into `latest_changes.html`

use std::process::ExitCode;

use relnotes::cli::{Cli, Commands};
use relnotes::{exit_codes, logging};

fn main() -> ExitCode {
    let _guard = logging::init_tracing();

    let cli = Cli::for_command(Commands::Render(Default::default()));
    exit_codes::report(cli.execute())
}
