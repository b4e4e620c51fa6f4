use serde_json::json;

use crate::build::rules::{FileCategory, FilePattern, LoaderStage, TransformRule};
use crate::build::stylesheet;
use crate::mode::{AssetPolicy, ResolvedMode};
use crate::settings::ResolverSettings;

pub const TEMPLATE_EXTENSIONS: &[&str] = &["pug"];
pub const STYLESHEET_EXTENSIONS: &[&str] = &["scss"];
pub const SCRIPT_EXTENSIONS: &[&str] = &["js"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp", "ico"];
pub const FONT_EXTENSIONS: &[&str] = &["woff", "woff2", "eot", "ttf", "otf"];

pub const DEPENDENCY_DIR: &str = "node_modules";
pub const IMAGE_FILENAME: &str = "img/[name]-[hash].[ext]";
pub const FONT_FILENAME: &str = "fonts/[name].[ext]";

/// One rule per category, in [`FileCategory::ALL`] order.
pub(crate) fn rule_table(mode: &ResolvedMode, settings: &ResolverSettings) -> Vec<TransformRule> {
    FileCategory::ALL
        .iter()
        .map(|category| rule_for_category(*category, mode, settings))
        .collect()
}

fn rule_for_category(
    category: FileCategory,
    mode: &ResolvedMode,
    settings: &ResolverSettings,
) -> TransformRule {
    match category {
        FileCategory::Template => TransformRule::pipeline(
            category,
            FilePattern::extensions(TEMPLATE_EXTENSIONS),
            vec![LoaderStage::new(
                "pug-loader",
                json!({
                    "pretty": true,
                    "exports": false,
                }),
            )],
        ),
        FileCategory::Stylesheet => TransformRule::pipeline(
            category,
            FilePattern::extensions(STYLESHEET_EXTENSIONS),
            stylesheet::pipeline(&settings.browsers),
        ),
        FileCategory::Script => TransformRule::pipeline(
            category,
            FilePattern::extensions(SCRIPT_EXTENSIONS),
            vec![LoaderStage::new(
                "babel-loader",
                json!({
                    "presets": ["@babel/preset-env"],
                    "plugins": ["@babel/plugin-proposal-class-properties"],
                }),
            )],
        )
        .excluding(FilePattern::literal(DEPENDENCY_DIR)),
        FileCategory::Image => TransformRule::asset(
            category,
            FilePattern::extensions(IMAGE_EXTENSIONS),
            mode.image_policy(),
            IMAGE_FILENAME,
        ),
        // Fonts are never inlined.
        FileCategory::Font => TransformRule::asset(
            category,
            FilePattern::extensions(FONT_EXTENSIONS),
            AssetPolicy::EmitAll,
            FONT_FILENAME,
        ),
    }
}
