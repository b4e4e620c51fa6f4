//! Build-configuration resolver for a Pug/SCSS/Babel asset pipeline.
//!
//! Given project [`ResolverSettings`] and a snapshot of
//! [`EnvironmentInputs`], [`ConfigResolver`] produces one
//! [`BuildConfiguration`]: paths, derived mode flags, the ordered rule
//! table, the plugin list and dev-server settings. The bundling itself is
//! done by an external engine that consumes [`BuildConfiguration::to_value`].

pub mod build;
pub mod discovery;
pub mod env;
pub mod error;
pub mod mode;
pub mod paths;
pub mod resolver;
pub mod settings;
pub mod validation;

// Re-export main types
pub use build::*;
pub use env::*;
pub use error::*;
pub use mode::*;
pub use paths::PathSet;
pub use resolver::{ConfigResolver, resolve};
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ENV_PREFIX, SETTINGS_FILE, SettingsDiscovery, discover};
pub use validation::{
    FsValidator, SchemaValidator, SettingsValidator, is_in_source, validate_fs, validate_schema,
};
