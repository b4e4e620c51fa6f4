//! The resolved build configuration handed to the bundling engine.

mod dev_server;
mod plugins;
mod rules;
mod stylesheet;
mod table;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

pub use dev_server::{DevServerSettings, StaticFiles};
pub use plugins::{
    CLEAN_PLUGIN, CSS_CHUNK_FILENAME, CSS_EXTRACT_PLUGIN, CSS_FILENAME, HTML_PLUGIN,
    PluginInvocation,
};
pub use rules::{
    AssetGenerator, FileCategory, FilePattern, LoaderStage, RuleAction, TransformRule,
};
pub use stylesheet::{
    CSS_LOADER as CSS_LOADER_NAME, STAGE_ORDER as STYLESHEET_STAGES, import_loader_count,
};
pub use table::{
    DEPENDENCY_DIR, FONT_EXTENSIONS, FONT_FILENAME, IMAGE_EXTENSIONS, IMAGE_FILENAME,
    SCRIPT_EXTENSIONS, STYLESHEET_EXTENSIONS, TEMPLATE_EXTENSIONS,
};

pub(crate) use plugins::plugin_list;
pub(crate) use table::rule_table;

use crate::error::{ConfigError, Result};
use crate::mode::{BuildMode, Devtool, ResolvedMode};
use crate::paths::PathSet;

/// Script bundle naming relative to the build root.
pub const SCRIPT_FILENAME: &str = "app/[name]-bandle.js";

/// Complete configuration for one build invocation.
///
/// Assembled once by [`ConfigResolver`](crate::ConfigResolver) and read-only
/// afterwards. Serializes to the object shape the engine expects; the path
/// set and derived flags stay on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    #[serde(skip)]
    pub(crate) paths: PathSet,

    #[serde(skip)]
    pub(crate) resolved: ResolvedMode,

    pub(crate) entry: PathBuf,

    pub(crate) output: OutputOptions,

    pub(crate) devtool: Devtool,

    pub(crate) mode: BuildMode,

    pub(crate) dev_server: DevServerSettings,

    pub(crate) module: ModuleOptions,

    pub(crate) plugins: Vec<PluginInvocation>,

    pub(crate) optimization: OptimizationOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOptions {
    pub rules: Vec<TransformRule>,
}

/// Minification and chunk-splitting policy. Nothing is set yet; the map
/// exists so the slot is present in the output and open for extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OptimizationOptions(IndexMap<String, Value>);

impl OptimizationOptions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl BuildConfiguration {
    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn resolved_mode(&self) -> &ResolvedMode {
        &self.resolved
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn output(&self) -> &OutputOptions {
        &self.output
    }

    pub fn devtool(&self) -> Devtool {
        self.devtool
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn dev_server(&self) -> &DevServerSettings {
        &self.dev_server
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.module.rules
    }

    pub fn plugins(&self) -> &[PluginInvocation] {
        &self.plugins
    }

    pub fn optimization(&self) -> &OptimizationOptions {
        &self.optimization
    }

    pub fn rule(&self, category: FileCategory) -> Option<&TransformRule> {
        self.module.rules.iter().find(|rule| rule.category == category)
    }

    /// First rule, in declared order, that accepts `path`.
    ///
    /// # Example
    ///
    /// ```
    /// use loom_config::{ConfigResolver, EnvironmentInputs, FileCategory, ResolverSettings};
    ///
    /// let settings = ResolverSettings::new(std::env::temp_dir().join("site"));
    /// let config = ConfigResolver::new(settings, EnvironmentInputs::new())
    ///     .unwrap()
    ///     .resolve();
    ///
    /// let rule = config.rule_for("src/styles/main.scss").unwrap();
    /// assert_eq!(rule.category, FileCategory::Stylesheet);
    /// assert!(config.rule_for("node_modules/lib/index.js").is_none());
    /// ```
    pub fn rule_for(&self, path: impl AsRef<Path>) -> Option<&TransformRule> {
        let path = path.as_ref();
        self.module.rules.iter().find(|rule| rule.matches(path))
    }

    pub fn plugins_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a PluginInvocation> {
        self.plugins.iter().filter(move |plugin| plugin.name == name)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
