//! Relnotes - Release notes extraction and HTML rendering CLI

use std::process::ExitCode;

use clap::Parser;

use relnotes::cli::Cli;
use relnotes::{exit_codes, logging};

fn main() -> ExitCode {
    let _guard = logging::init_tracing();

    let cli = Cli::parse();
    exit_codes::report(cli.execute())
}
