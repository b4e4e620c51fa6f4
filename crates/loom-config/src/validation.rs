//! Pluggable settings validation strategies
//!
//! The resolver never looks at the filesystem. These checks are opt-in and
//! run before resolving, so a broken page list surfaces here instead of as
//! an engine failure halfway through a build.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::paths::check_segment;
use crate::settings::ResolverSettings;

/// Trait for pluggable settings validation strategies
pub trait SettingsValidator {
    fn validate(&self, settings: &ResolverSettings) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use loom_config::{ResolverSettings, SchemaValidator, SettingsValidator};
///
/// let settings = ResolverSettings::new("/srv/site");
/// SchemaValidator.validate(&settings).unwrap();
/// ```
pub struct SchemaValidator;

impl SettingsValidator for SchemaValidator {
    fn validate(&self, settings: &ResolverSettings) -> Result<()> {
        for (field, segment) in [
            ("source_dir", settings.source_dir.as_str()),
            ("build_dir", settings.build_dir.as_str()),
        ] {
            check_segment(field, segment).map_err(|message| ConfigError::SchemaValidation {
                message,
                hint: Some("Name directories inside the project, such as \"src\"".to_string()),
            })?;
        }

        if Path::new(&settings.source_dir) == Path::new(&settings.build_dir) {
            return Err(ConfigError::SchemaValidation {
                message: format!("source_dir and build_dir are both '{}'", settings.source_dir),
                hint: Some("Build output must not overwrite sources".to_string()),
            });
        }

        if settings.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "port cannot be 0".to_string(),
                hint: Some("Pick a fixed port such as 4200".to_string()),
            });
        }

        if settings.pages.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no pages declared".to_string(),
                hint: Some("Add at least one [[pages]] entry".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for page in &settings.pages {
            if !page.filename.ends_with(".html") {
                return Err(ConfigError::SchemaValidation {
                    message: format!("page filename '{}' must end in .html", page.filename),
                    hint: None,
                });
            }

            if !seen.insert(page.filename.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("page filename '{}' is declared twice", page.filename),
                    hint: Some("Each page needs its own output file".to_string()),
                });
            }

            if page.template.extension().and_then(|ext| ext.to_str()) != Some("pug") {
                return Err(ConfigError::SchemaValidation {
                    message: format!("template {} is not a .pug file", page.template.display()),
                    hint: None,
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then confirms every page template exists under
/// the source root.
pub struct FsValidator;

impl SettingsValidator for FsValidator {
    fn validate(&self, settings: &ResolverSettings) -> Result<()> {
        SchemaValidator.validate(settings)?;

        let paths = settings.paths()?;
        for page in &settings.pages {
            let path = paths.in_source(&page.template);
            if !path.exists() {
                return Err(ConfigError::TemplateNotFound { path });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(settings: &ResolverSettings) -> Result<()> {
    SchemaValidator.validate(settings)
}

/// Convenience function for filesystem validation
pub fn validate_fs(settings: &ResolverSettings) -> Result<()> {
    FsValidator.validate(settings)
}

/// True when `path` sits inside the settings' source directory.
pub fn is_in_source(settings: &ResolverSettings, path: &Path) -> bool {
    settings
        .paths()
        .map(|paths| path.starts_with(paths.source_root()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PageEntry;

    fn settings() -> ResolverSettings {
        ResolverSettings::new(std::env::temp_dir().join("validation-unit"))
    }

    #[test]
    fn schema_validator_accepts_defaults() {
        assert!(SchemaValidator.validate(&settings()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_duplicate_pages() {
        let settings = settings().with_page("index.html", "pages/other.pug");
        assert!(matches!(
            SchemaValidator.validate(&settings).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_pages() {
        let mut settings = settings();
        settings.pages.clear();
        assert!(validate_schema(&settings).is_err());
    }

    #[test]
    fn schema_validator_rejects_non_pug_template() {
        let mut settings = settings();
        settings.pages = vec![PageEntry::new("index.html", "pages/index.html")];
        assert!(validate_schema(&settings).is_err());
    }

    #[test]
    fn schema_validator_rejects_port_zero() {
        let mut settings = settings();
        settings.port = 0;
        assert!(validate_schema(&settings).is_err());
    }

    #[test]
    fn schema_validator_rejects_escaping_dirs() {
        let mut parent = settings();
        parent.source_dir = "x/../dist".into();
        assert!(validate_schema(&parent).is_err());

        let mut rooted = settings();
        rooted.source_dir = "/".into();
        assert!(matches!(
            validate_schema(&rooted).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_compares_dirs_by_component() {
        let mut settings = settings();
        settings.build_dir = "./src".into();
        assert!(validate_schema(&settings).is_err());
    }

    #[test]
    fn is_in_source_checks_prefix() {
        let settings = settings();
        let inside = settings.root().join("src/pages/index/index.pug");
        let outside = settings.root().join("dist/index.html");
        assert!(is_in_source(&settings, &inside));
        assert!(!is_in_source(&settings, &outside));
    }
}
