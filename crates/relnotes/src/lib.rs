//! Relnotes - Release notes extraction and HTML rendering CLI
//!
//! Shared by the `relnotes` binary and the two single-stage entry points.

pub mod cli;
pub mod exit_codes;
pub mod logging;
