//! Project-level settings the resolver is constructed with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::PathSet;

/// Everything about the project that is fixed across modes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Absolute project root. Set by discovery, never read from files.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browserslist query forwarded to the CSS post-processor
    #[serde(default = "default_browsers")]
    pub browsers: String,

    /// Pages rendered from templates, in output order
    #[serde(default = "default_pages")]
    pub pages: Vec<PageEntry>,
}

/// One generated HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Output file name inside the build root
    pub filename: String,

    /// Template path relative to the source root
    pub template: PathBuf,
}

impl PageEntry {
    pub fn new(filename: impl Into<String>, template: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            template: template.into(),
        }
    }
}

impl ResolverSettings {
    /// Default settings anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, filename: impl Into<String>, template: impl Into<PathBuf>) -> Self {
        self.pages.push(PageEntry::new(filename, template));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn paths(&self) -> Result<PathSet> {
        PathSet::new(&self.root, &self.source_dir, &self.build_dir)
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            source_dir: default_source_dir(),
            build_dir: default_build_dir(),
            host: default_host(),
            port: default_port(),
            browsers: default_browsers(),
            pages: default_pages(),
        }
    }
}

fn default_source_dir() -> String {
    "src".into()
}

fn default_build_dir() -> String {
    "dist".into()
}

fn default_host() -> String {
    "localhost".into()
}

fn default_port() -> u16 {
    4200
}

fn default_browsers() -> String {
    "last 2 versions".into()
}

fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("index.html", "pages/index/index.pug"),
        PageEntry::new("page-1.html", "pages/page-1/page-1.pug"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_declare_two_pages() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.pages.len(), 2);
        assert_eq!(settings.pages[0].filename, "index.html");
        assert_eq!(settings.port, 4200);
    }

    #[test]
    fn empty_table_deserializes_to_defaults() {
        let settings: ResolverSettings = toml::from_str("").unwrap();
        assert_eq!(settings, ResolverSettings::default());
    }

    #[test]
    fn with_page_appends() {
        let settings = ResolverSettings::new("/project").with_page("about.html", "pages/about.pug");
        assert_eq!(settings.pages.len(), 3);
        assert_eq!(settings.pages[2].template, PathBuf::from("pages/about.pug"));
    }
}
