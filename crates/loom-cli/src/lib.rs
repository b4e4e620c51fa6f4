//! loom CLI - resolve build configurations for the asset pipeline.
//!
//! - [`cli`] - clap definitions
//! - [`commands`] - `resolve`, `check` and `rule`
//! - [`error`] - CLI errors and their miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
