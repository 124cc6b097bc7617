//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog extraction errors
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Flat-file artifact errors
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

impl RelnotesError {
    /// Whether this error came from loading or validating configuration
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while extracting the latest entry from a changelog
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The changelog has no lines at all
    #[error("{0} is empty")]
    EmptyInput(String),

    /// The first line is not a `# ` heading
    #[error("First line must be a header starting with '# ' (found {0:?})")]
    MalformedHeader(String),
}

/// Errors reading or writing the flat files passed between stages
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An expected input file does not exist
    #[error("Required file not found: {0}")]
    Missing(PathBuf),

    /// Any other IO failure on an artifact
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    /// Classify an IO error raised while reading `path`
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Wrap an IO error raised while writing `path`
    pub fn from_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_messages() {
        let empty = ExtractError::EmptyInput("Release_Notes.md".to_string());
        assert_eq!(empty.to_string(), "Release_Notes.md is empty");

        let malformed = ExtractError::MalformedHeader("1.0.0".to_string());
        assert!(malformed
            .to_string()
            .starts_with("First line must be a header starting with '# '"));
    }

    #[test]
    fn test_artifact_error_from_read_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ArtifactError::from_read("title", io);
        assert!(matches!(err, ArtifactError::Missing(ref p) if p == &PathBuf::from("title")));
    }

    #[test]
    fn test_artifact_error_from_read_other() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ArtifactError::from_read("title", io);
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn test_is_config() {
        let err: RelnotesError = ConfigError::InvalidValue {
            field: "artifacts.title".to_string(),
            message: "file name cannot be empty".to_string(),
        }
        .into();
        assert!(err.is_config());

        let err: RelnotesError = ExtractError::EmptyInput("x".to_string()).into();
        assert!(!err.is_config());
    }
}
