//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from propwire-core
    #[error("{0}")]
    Core(#[from] propwire_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input file could not be parsed into a document
    #[error("Invalid file format for {}: expected {}", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl From<propwire_core::SchemaError> for Error {
    fn from(err: propwire_core::SchemaError) -> Self {
        Self::Core(err.into())
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(propwire_core::Error::Schema(_)) => 2,
            Self::Core(propwire_core::Error::Document(_)) => 3,
            Self::Core(_) => 4,
            Self::FileNotFound { .. } => 5,
            Self::InvalidFormat { .. } => 6,
            Self::Config(_) => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::TomlDe(_) | Self::TomlSer(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::InvalidFormat { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propwire_core::{DocumentError, SchemaError};

    fn missing_properties() -> Error {
        Error::Core(
            DocumentError::MissingProperties {
                schema: "contact".to_string(),
                key: "properties".to_string(),
                found: "nothing".to_string(),
            }
            .into(),
        )
    }

    #[test]
    fn test_exit_codes_follow_error_kind() {
        assert_eq!(missing_properties().exit_code(), 3);

        let schema = Error::Core(
            SchemaError::NoCollectionField {
                schema: "contact_list".to_string(),
            }
            .into(),
        );
        assert_eq!(schema.exit_code(), 2);

        assert_eq!(Error::config("bad").exit_code(), 7);
        assert_eq!(Error::other("boom").exit_code(), 99);
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("x.json")
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_format_error_keeps_core_label() {
        let text = format_error(&missing_properties(), false);
        assert!(text.starts_with("Error: Document error: "));
        assert!(text.contains("properties"));

        assert_eq!(format_error(&Error::other("boom"), false), "Error: boom");
    }

    #[test]
    fn test_help_hint_for_input_errors() {
        assert!(Error::InvalidFormat {
            path: PathBuf::from("x.txt"),
            expected: "a JSON or YAML object".to_string(),
        }
        .should_show_help());
        assert!(!missing_properties().should_show_help());
    }
}
