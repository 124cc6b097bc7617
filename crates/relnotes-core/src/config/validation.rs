//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_artifacts(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_artifacts(config: &Config) -> Result<()> {
    let files = config.artifacts.named_files();

    for (field, name) in &files {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "file name cannot be empty".to_string(),
            }
            .into());
        }
    }

    let mut seen = HashSet::new();
    for (field, name) in &files {
        if !seen.insert(*name) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("'{}' is already used by another artifact", name),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut config = Config::default();
        config.artifacts.title = "  ".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("artifacts.title"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut config = Config::default();
        config.artifacts.html = "Release_Notes.md".to_string();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("artifacts.html"));
    }
}
