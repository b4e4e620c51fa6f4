//! File-based settings discovery for CLI use
//!
//! Layers built-in defaults, an optional settings file and `LOOM_`-prefixed
//! environment variables into one [`ResolverSettings`].

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::settings::ResolverSettings;

pub const SETTINGS_FILE: &str = "loom.toml";
pub const ENV_PREFIX: &str = "LOOM_";

/// File-based settings discovery
///
/// Priority: environment variables > settings file > defaults.
///
/// # Example
///
/// ```no_run
/// use loom_config::SettingsDiscovery;
///
/// let settings = SettingsDiscovery::new(".").load().unwrap();
/// assert!(settings.root().is_absolute());
/// ```
pub struct SettingsDiscovery {
    root: PathBuf,
    env_prefix: Option<String>,
}

impl SettingsDiscovery {
    /// Create a new discovery rooted at a project directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }

    /// Skip the environment layer entirely.
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Find a settings file in the root directory
    ///
    /// Searches in this order:
    /// 1. loom.toml
    /// 2. package.json (loom field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(SETTINGS_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get("loom") {
            Some(value) if !value.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load settings, falling back to defaults when no file exists.
    pub fn load(&self) -> Result<ResolverSettings> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no settings file, using defaults");
                self.extract(Figment::new())
            }
        }
    }

    /// Load settings from a specific file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist.
    pub fn load_from(&self, path: &Path) -> Result<ResolverSettings> {
        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        tracing::debug!(path = %path.display(), "loading settings");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        self.extract(Figment::new().merge(Toml::file(path)))
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ResolverSettings> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        })?;

        let loom_value = match parsed.get("loom") {
            Some(value) if !value.is_null() => value.clone(),
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "loom".to_string(),
                    hint: Some("Add a 'loom' object to your package.json".to_string()),
                });
            }
        };

        self.extract(Figment::new().merge(Serialized::defaults(loom_value)))
    }

    fn extract(&self, file_layer: Figment) -> Result<ResolverSettings> {
        let mut figment =
            Figment::from(Serialized::defaults(ResolverSettings::default())).merge(file_layer);

        if let Some(prefix) = &self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix));
        }

        let mut settings: ResolverSettings = figment.extract()?;
        settings.root = std::path::absolute(&self.root)?;
        Ok(settings)
    }
}

/// Discover and load settings from the current directory
pub fn discover() -> Result<ResolverSettings> {
    let root = std::env::current_dir()?;
    SettingsDiscovery::new(&root).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_settings() {
        let dir = TempDir::new().unwrap();
        assert!(SettingsDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_ignores_package_json_without_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "site" }"#).unwrap();
        assert!(SettingsDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = SettingsDiscovery::new(dir.path())
            .without_env()
            .load_from(&dir.path().join(SETTINGS_FILE));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = SettingsDiscovery::new(dir.path())
            .without_env()
            .load()
            .unwrap();
        assert_eq!(settings.port, 4200);
        assert_eq!(settings.root(), std::path::absolute(dir.path()).unwrap());
    }
}
