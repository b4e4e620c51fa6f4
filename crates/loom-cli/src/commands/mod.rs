//! Command implementations.
//!
//! Each command module exposes an `execute` function taking its parsed
//! arguments.

pub mod check;
pub mod resolve;
pub mod rule;

pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use rule::execute as rule_execute;

use loom_config::{ResolverSettings, SettingsDiscovery};

use crate::cli::ProjectArgs;
use crate::error::Result;

/// Load settings for the project the arguments point at.
pub(crate) fn load_settings(project: &ProjectArgs) -> Result<ResolverSettings> {
    let discovery = SettingsDiscovery::new(&project.root);
    let settings = match &project.config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };

    tracing::debug!(
        root = %settings.root().display(),
        pages = settings.pages.len(),
        "loaded project settings"
    );

    Ok(settings)
}
