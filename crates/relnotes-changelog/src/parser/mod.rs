//! Changelog parsing
//!
//! A release notes changelog is a sequence of version blocks, newest first:
//!
//! ```text
//! # 1.1.0 - New Feature
//! * First change
//! * Second change
//!
//! # 1.0.0 - Initial Release
//! * Initial features
//! ```

mod heading;
mod latest;

pub use heading::{parse_heading, HEADING_PREFIX, TITLE_SEPARATOR};
pub use latest::{extract_latest, extract_latest_from, is_bullet};
