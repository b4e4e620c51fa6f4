//! Development server settings.

use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerSettings {
    pub host: String,

    pub port: u16,

    /// Hot module replacement
    pub hot: bool,

    /// Open a browser once the server is up
    pub open: bool,

    #[serde(rename = "static")]
    pub static_files: StaticFiles,
}

/// Directory the server serves and watches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticFiles {
    pub directory: PathBuf,
}

impl DevServerSettings {
    pub fn watched_directory(&self) -> &Path {
        &self.static_files.directory
    }
}
