//! Error types for texlip.

use thiserror::Error;

use crate::text_location::TextLocation;

/// Main error type for texlip operations.
#[derive(Error, Debug)]
pub enum TexlipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Parse error at {location}: {message}")]
    Parse { location: TextLocation, message: String },

    #[error("Unknown language at {location}: {name}")]
    UnknownLanguage { location: TextLocation, name: String },

    #[error("Invalid comment format at {location}: {format:?} has no COMMENT marker")]
    InvalidCommentFormat {
        location: TextLocation,
        format: String,
    },
}

/// Result type alias for texlip operations.
pub type Result<T> = std::result::Result<T, TexlipError>;
