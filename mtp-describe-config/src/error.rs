//! Error types for annotation file loading

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested annotation file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is not one of toml, yaml, yml or json
    #[error("Unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// A source could not be read or did not match the annotation shape
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: figment::Error },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError { source: error }
    }
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_the_path() {
        let err = ConfigError::FileNotFound {
            path: PathBuf::from("/nowhere/describe.toml"),
        };
        assert!(err.to_string().contains("/nowhere/describe.toml"));
    }

    #[test]
    fn test_figment_error_converts_to_parse_error() {
        let err: ConfigError = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("bad value"));
    }
}
