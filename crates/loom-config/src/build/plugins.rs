use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, json};

use crate::build::rules::option_map;
use crate::paths::PathSet;
use crate::settings::PageEntry;

pub const CLEAN_PLUGIN: &str = "clean-webpack-plugin";
pub const HTML_PLUGIN: &str = "html-webpack-plugin";
pub const CSS_EXTRACT_PLUGIN: &str = "mini-css-extract-plugin";

/// Content-hashed so browsers refetch changed stylesheets.
pub const CSS_FILENAME: &str = "./css/[name]-[hash].css";
pub const CSS_CHUNK_FILENAME: &str = "./css/[id].css";

/// A named post-processing step and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInvocation {
    pub name: String,
    pub options: IndexMap<String, Value>,
}

impl PluginInvocation {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options: option_map(options),
        }
    }

    pub fn clean(dry: bool) -> Self {
        Self::new(CLEAN_PLUGIN, json!({ "dry": dry }))
    }

    pub fn html_page(page: &PageEntry, paths: &PathSet) -> Self {
        let template = paths.in_source(&page.template);
        Self::new(
            HTML_PLUGIN,
            json!({
                "filename": page.filename,
                "template": template.to_string_lossy(),
            }),
        )
    }

    pub fn css_extract() -> Self {
        Self::new(
            CSS_EXTRACT_PLUGIN,
            json!({
                "filename": CSS_FILENAME,
                "chunkFilename": CSS_CHUNK_FILENAME,
            }),
        )
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}

/// Cleanup first, then one page per entry, then stylesheet extraction.
pub(crate) fn plugin_list(
    dry_clean: bool,
    pages: &[PageEntry],
    paths: &PathSet,
) -> Vec<PluginInvocation> {
    let mut plugins = Vec::with_capacity(pages.len() + 2);
    plugins.push(PluginInvocation::clean(dry_clean));
    plugins.extend(pages.iter().map(|page| PluginInvocation::html_page(page, paths)));
    plugins.push(PluginInvocation::css_extract());
    plugins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_template_is_under_source_root() {
        let root = std::env::temp_dir().join("site");
        let paths = PathSet::new(&root, "src", "dist").unwrap();
        let page = PageEntry::new("about.html", "pages/about/about.pug");
        let plugin = PluginInvocation::html_page(&page, &paths);

        let expected = root.join("src").join("pages/about/about.pug");
        assert_eq!(
            plugin.option("template"),
            Some(&json!(expected.to_string_lossy()))
        );
        assert_eq!(plugin.option("filename"), Some(&json!("about.html")));
    }

    #[test]
    fn list_order_with_no_pages() {
        let paths = PathSet::new(&std::env::temp_dir(), "src", "dist").unwrap();
        let names: Vec<String> = plugin_list(false, &[], &paths)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, [CLEAN_PLUGIN, CSS_EXTRACT_PLUGIN]);
    }
}
