//! Exit codes for the CLI

use std::process::ExitCode;

use relnotes_core::RelnotesError;

use crate::cli::output;

/// Success
pub const SUCCESS: u8 = 0;

/// Extraction or artifact error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Map a command failure to its exit code
pub fn code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<RelnotesError>() {
        Some(e) if e.is_config() => CONFIG_ERROR,
        _ => ERROR,
    }
}

/// Print any failure and return the numeric exit status
pub fn status_for(result: anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "command failed");
            output::error(&format!("{:#}", err));
            code_for(&err)
        }
    }
}

/// Print any failure and turn the command result into a process exit code
pub fn report(result: anyhow::Result<()>) -> ExitCode {
    ExitCode::from(status_for(result))
}
