//! Error types for settings loading and validation.
//!
//! The resolver itself is infallible; every variant here belongs to the
//! boundary in front of it (settings discovery, path derivation, checks).

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors (for CLI use)
    #[error("page template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    // Settings parsing/loading errors
    #[error("settings file not found")]
    NotFound,

    #[error(
        "invalid value for '{field}'{}",
        .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default()
    )]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid project paths: {message}")]
    InvalidPaths { message: String },

    // Schema validation errors (no filesystem checks)
    #[error(
        "{message}{}",
        .hint.as_ref().map(|h| format!("\n\nHint: {h}")).unwrap_or_default()
    )]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        let field = err
            .path
            .last()
            .cloned()
            .unwrap_or_else(|| "settings".to_string());
        ConfigError::InvalidValue {
            field,
            hint: Some(err.to_string()),
        }
    }
}
