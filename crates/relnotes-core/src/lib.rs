//! Relnotes Core - Core library for release-notes automation
//!
//! This crate provides the error types and configuration shared by the
//! changelog extraction and HTML rendering stages.

pub mod config;
pub mod error;

pub use error::{ArtifactError, ConfigError, ExtractError, RelnotesError, Result};
