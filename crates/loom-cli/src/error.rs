//! CLI error type and its miette rendering.

use std::path::PathBuf;

use loom_config::ConfigError;
use miette::Report;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings loading, path derivation or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File passed to `loom rule` is not handled by any rule
    #[error("No rule handles {}", .0.display())]
    Unmatched(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::TemplateNotFound { path }) => miette::miette!(
            "Page template not found: {}\n\n\
             Hint: Create the template or remove the page from loom.toml",
            path.display()
        ),
        CliError::Config(ConfigError::NotFound) => miette::miette!(
            "Settings file not found\n\nHint: Check the --config path"
        ),
        _ => miette::miette!("{}", err),
    }
}
