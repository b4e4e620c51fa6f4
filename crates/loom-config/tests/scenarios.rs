//! Mode scenarios: one NODE_ENV value in, the full set of derived settings out.

use loom_config::{
    AssetPolicy, BuildConfiguration, BuildMode, CLEAN_PLUGIN, CSS_EXTRACT_PLUGIN, Devtool,
    EnvironmentInputs, FileCategory, HTML_PLUGIN, ResolverSettings, STYLESHEET_STAGES, resolve,
};
use serde_json::json;
use std::path::PathBuf;

fn project_root() -> PathBuf {
    std::env::temp_dir().join("loom-scenarios")
}

fn resolve_with(mode: Option<&str>) -> BuildConfiguration {
    let mut env = EnvironmentInputs::new();
    if let Some(mode) = mode {
        env = env.with("NODE_ENV", mode);
    }
    resolve(ResolverSettings::new(project_root()), env).expect("resolve")
}

fn image_policy(config: &BuildConfiguration) -> AssetPolicy {
    config
        .rule(FileCategory::Image)
        .and_then(|rule| rule.asset_policy())
        .expect("image rule")
}

fn dry_clean(config: &BuildConfiguration) -> bool {
    let clean = config
        .plugins_named(CLEAN_PLUGIN)
        .next()
        .expect("clean plugin");
    clean.option("dry") == Some(&json!(true))
}

#[test]
fn production_scenario() {
    let config = resolve_with(Some("production"));
    let mode = config.resolved_mode();

    assert!(!mode.is_development());
    assert!(!mode.is_watch());
    assert!(!config.dev_server().open);
    assert!(!dry_clean(&config));
    assert_eq!(image_policy(&config).label(), "inline-small");
    assert_eq!(config.mode(), BuildMode::Production);
    assert_eq!(config.devtool(), Devtool::Disabled);
}

#[test]
fn watch_scenario() {
    let config = resolve_with(Some("watch"));
    let mode = config.resolved_mode();

    assert!(mode.is_development());
    assert!(mode.is_watch());
    assert!(config.dev_server().open);
    assert!(dry_clean(&config));
    assert_eq!(image_policy(&config).label(), "emit-all");
    assert_eq!(config.mode(), BuildMode::Development);
    assert_eq!(config.devtool(), Devtool::SourceMap);
}

#[test]
fn development_scenario() {
    let config = resolve_with(Some("development"));
    let mode = config.resolved_mode();

    assert!(mode.is_development());
    assert!(!mode.is_watch());
    assert!(!config.dev_server().open);
    assert!(!dry_clean(&config));
    assert_eq!(image_policy(&config).label(), "emit-all");
    assert_eq!(config.devtool(), Devtool::SourceMap);
}

#[test]
fn empty_environment_matches_production() {
    assert_eq!(resolve_with(None), resolve_with(Some("production")));
}

#[test]
fn unrecognized_mode_matches_production() {
    assert_eq!(resolve_with(Some("test")), resolve_with(Some("production")));
}

#[test]
fn dev_server_defaults() {
    let config = resolve_with(Some("development"));
    let server = config.dev_server();
    assert_eq!(server.port, 4200);
    assert_eq!(server.host, "localhost");
    assert!(server.hot);
    assert_eq!(server.watched_directory(), project_root().join("src"));
}

#[test]
fn rules_follow_declared_category_order() {
    for mode in [None, Some("development"), Some("watch")] {
        let config = resolve_with(mode);
        let categories: Vec<FileCategory> = config.rules().iter().map(|r| r.category).collect();
        assert_eq!(categories, FileCategory::ALL);
    }
}

#[test]
fn stylesheet_pipeline_is_identical_across_modes() {
    let production = resolve_with(Some("production"));
    let watch = resolve_with(Some("watch"));

    let prod_rule = production.rule(FileCategory::Stylesheet).unwrap();
    let watch_rule = watch.rule(FileCategory::Stylesheet).unwrap();

    assert_eq!(prod_rule.loader_names(), STYLESHEET_STAGES);
    assert_eq!(prod_rule, watch_rule);
}

#[test]
fn plugins_are_clean_then_pages_then_extract() {
    let config = resolve_with(None);
    let names: Vec<&str> = config.plugins().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [CLEAN_PLUGIN, HTML_PLUGIN, HTML_PLUGIN, CSS_EXTRACT_PLUGIN]
    );

    let filenames: Vec<&serde_json::Value> = config
        .plugins_named(HTML_PLUGIN)
        .filter_map(|p| p.option("filename"))
        .collect();
    assert_eq!(filenames, [&json!("index.html"), &json!("page-1.html")]);
}

#[test]
fn custom_page_set_is_honoured() {
    let settings = ResolverSettings::new(project_root())
        .with_page("contact.html", "pages/contact/contact.pug");
    let config = resolve(settings, EnvironmentInputs::new()).unwrap();
    assert_eq!(config.plugins_named(HTML_PLUGIN).count(), 3);
}

#[test]
fn optimization_is_empty() {
    for mode in [None, Some("development"), Some("watch")] {
        assert!(resolve_with(mode).optimization().is_empty());
    }
}

#[test]
fn rule_matching_precedence() {
    let config = resolve_with(None);

    let category = |path: &str| config.rule_for(path).map(|rule| rule.category);

    assert_eq!(category("src/pages/index/index.pug"), Some(FileCategory::Template));
    assert_eq!(category("src/styles/main.scss"), Some(FileCategory::Stylesheet));
    assert_eq!(category("src/app/main.js"), Some(FileCategory::Script));
    assert_eq!(category("src/img/logo.jpeg"), Some(FileCategory::Image));
    assert_eq!(category("src/img/icon.svg"), Some(FileCategory::Image));
    assert_eq!(category("src/fonts/Inter.woff2"), Some(FileCategory::Font));
    assert_eq!(category("node_modules/lodash/lodash.js"), None);
    assert_eq!(category("src/styles/plain.css"), None);
    assert_eq!(category("README.md"), None);
}
