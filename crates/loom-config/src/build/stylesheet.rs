//! The stylesheet pipeline.
//!
//! CSS loading needs to know how many stages after it rewrite stylesheet
//! syntax, so nested `@import`s get run through them too. That count is
//! read off the pipeline here rather than written down next to it.

use serde_json::json;

use crate::build::rules::LoaderStage;

pub const EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";
pub const CSS_LOADER: &str = "css-loader";
pub const POSTCSS_LOADER: &str = "postcss-loader";
pub const RESOLVE_URL_LOADER: &str = "resolve-url-loader";
pub const SASS_LOADER: &str = "sass-loader";

/// Output-first stage order of every stylesheet rule.
pub const STAGE_ORDER: [&str; 5] = [
    EXTRACT_LOADER,
    CSS_LOADER,
    POSTCSS_LOADER,
    RESOLVE_URL_LOADER,
    SASS_LOADER,
];

pub(crate) fn pipeline(browsers: &str) -> Vec<LoaderStage> {
    let source_side = vec![
        postcss(browsers),
        LoaderStage::new(
            RESOLVE_URL_LOADER,
            json!({
                "sourceMap": true,
                "removeCR": true,
            }),
        ),
        LoaderStage::new(SASS_LOADER, json!({ "sourceMap": true }))
            .transforming_syntax(),
    ];

    let mut stages = vec![
        LoaderStage::new(EXTRACT_LOADER, json!({ "publicPath": "../" })),
        css_loader(import_loader_count(&source_side)),
    ];
    stages.extend(source_side);
    stages
}

/// Stages in `after_css` that rewrite stylesheet syntax.
pub fn import_loader_count(after_css: &[LoaderStage]) -> usize {
    after_css.iter().filter(|stage| stage.transforms_syntax).count()
}

fn css_loader(import_loaders: usize) -> LoaderStage {
    LoaderStage::new(
        CSS_LOADER,
        json!({
            "sourceMap": true,
            "importLoaders": import_loaders,
            "modules": false,
        }),
    )
}

fn postcss(browsers: &str) -> LoaderStage {
    LoaderStage::new(
        POSTCSS_LOADER,
        json!({
            "sourceMap": true,
            "postcssOptions": {
                "plugins": [
                    ["postcss-preset-env", {
                        "browsers": browsers,
                        "autoprefixer": { "grid": true },
                    }],
                ],
            },
        }),
    )
    .transforming_syntax()
}
