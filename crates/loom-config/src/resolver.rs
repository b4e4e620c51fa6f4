//! Environment inputs plus project settings in, build configuration out.

use crate::build::{
    BuildConfiguration, DevServerSettings, ModuleOptions, OptimizationOptions, OutputOptions,
    SCRIPT_FILENAME, StaticFiles, plugin_list, rule_table,
};
use crate::env::EnvironmentInputs;
use crate::error::Result;
use crate::mode::ResolvedMode;
use crate::paths::PathSet;
use crate::settings::ResolverSettings;

/// Builds [`BuildConfiguration`]s for one project and one environment.
///
/// All validation of the project paths happens in [`ConfigResolver::new`];
/// [`ConfigResolver::resolve`] cannot fail and has no side effects.
///
/// # Example
///
/// ```
/// use loom_config::{ConfigResolver, EnvironmentInputs, ResolverSettings};
///
/// let settings = ResolverSettings::new(std::env::temp_dir().join("site"));
/// let env = EnvironmentInputs::new().with("NODE_ENV", "watch");
///
/// let config = ConfigResolver::new(settings, env).unwrap().resolve();
/// assert!(config.resolved_mode().is_development());
/// assert!(config.dev_server().open);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    settings: ResolverSettings,
    paths: PathSet,
    mode: ResolvedMode,
}

impl ConfigResolver {
    pub fn new(settings: ResolverSettings, env: EnvironmentInputs) -> Result<Self> {
        let paths = settings.paths()?;
        let mode = ResolvedMode::derive(&env);
        Ok(Self {
            settings,
            paths,
            mode,
        })
    }

    pub fn mode(&self) -> &ResolvedMode {
        &self.mode
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn resolve(&self) -> BuildConfiguration {
        let mode = self.mode;
        let paths = self.paths.clone();

        tracing::debug!(
            build_mode = mode.build_mode().as_str(),
            watch = mode.is_watch(),
            image_policy = mode.image_policy().label(),
            "derived build mode"
        );

        let rules = rule_table(&mode, &self.settings);
        let plugins = plugin_list(mode.dry_clean(), &self.settings.pages, &paths);

        tracing::debug!(
            rules = rules.len(),
            plugins = plugins.len(),
            source_root = %paths.source_root().display(),
            "assembled build configuration"
        );

        BuildConfiguration {
            entry: paths.source_root().to_path_buf(),
            output: OutputOptions {
                filename: SCRIPT_FILENAME.to_string(),
                path: paths.build_root().to_path_buf(),
            },
            devtool: mode.devtool(),
            mode: mode.build_mode(),
            dev_server: DevServerSettings {
                host: self.settings.host.clone(),
                port: self.settings.port,
                hot: true,
                open: mode.auto_open(),
                static_files: StaticFiles {
                    directory: paths.source_root().to_path_buf(),
                },
            },
            module: ModuleOptions { rules },
            plugins,
            optimization: OptimizationOptions::default(),
            paths,
            resolved: mode,
        }
    }
}

/// One-shot form of [`ConfigResolver::new`] followed by `resolve`.
pub fn resolve(settings: ResolverSettings, env: EnvironmentInputs) -> Result<BuildConfiguration> {
    Ok(ConfigResolver::new(settings, env)?.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::FileCategory;
    use crate::mode::AssetPolicy;

    fn settings() -> ResolverSettings {
        ResolverSettings::new(std::env::temp_dir().join("resolver-unit"))
    }

    #[test]
    fn relative_root_is_rejected_before_resolving() {
        let result = ConfigResolver::new(ResolverSettings::new("site"), EnvironmentInputs::new());
        assert!(result.is_err());
    }

    #[test]
    fn fonts_are_emitted_in_production() {
        let config = resolve(settings(), EnvironmentInputs::new()).unwrap();
        let fonts = config.rule(FileCategory::Font).unwrap();
        assert_eq!(fonts.asset_policy(), Some(AssetPolicy::EmitAll));
    }

    #[test]
    fn entry_and_watch_dir_are_source_root() {
        let config = resolve(settings(), EnvironmentInputs::new()).unwrap();
        assert_eq!(config.entry(), config.paths().source_root());
        assert_eq!(
            config.dev_server().watched_directory(),
            config.paths().source_root()
        );
        assert_eq!(config.output().path, config.paths().build_root());
    }
}
