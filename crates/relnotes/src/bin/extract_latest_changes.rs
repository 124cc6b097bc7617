//! Extraction stage: reads `Release_Notes.md` and writes the flat files

use std::process::ExitCode;

use relnotes::cli::{Cli, Commands};
use relnotes::{exit_codes, logging};

fn main() -> ExitCode {
    let _guard = logging::init_tracing();

    let cli = Cli::for_command(Commands::Extract(Default::default()));
    exit_codes::report(cli.execute())
}
