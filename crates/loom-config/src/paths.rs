//! Source and build locations derived from the project root.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, Result};

/// The two absolute locations every other setting hangs off.
///
/// Only constructible through [`PathSet::new`], which guarantees both paths
/// are absolute, non-empty, distinct and inside the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    source_root: PathBuf,
    build_root: PathBuf,
}

impl PathSet {
    pub fn new(project_root: &Path, source_dir: &str, build_dir: &str) -> Result<Self> {
        if !project_root.is_absolute() {
            return Err(ConfigError::InvalidPaths {
                message: format!(
                    "project root must be absolute, got {}",
                    project_root.display()
                ),
            });
        }

        for (field, segment) in [("source_dir", source_dir), ("build_dir", build_dir)] {
            check_segment(field, segment)
                .map_err(|message| ConfigError::InvalidPaths { message })?;
        }

        // Segments hold only normal and `.` components here; path equality
        // compares components and skips interior `.`.
        let source_root = project_root.join(source_dir);
        let build_root = project_root.join(build_dir);

        if source_root == build_root {
            return Err(ConfigError::InvalidPaths {
                message: format!(
                    "source and build directories both point at {}",
                    source_root.display()
                ),
            });
        }

        Ok(Self {
            source_root,
            build_root,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Join a path relative to the source root.
    pub fn in_source(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.source_root.join(relative)
    }
}

/// A directory segment must be a non-empty relative path that stays under the
/// project root: no root, drive prefix or `..` components.
pub(crate) fn check_segment(field: &str, segment: &str) -> std::result::Result<(), String> {
    if segment.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let path = Path::new(segment);
    if path.is_absolute() || path.has_root() {
        return Err(format!(
            "{field} must be relative to the project root, got '{segment}'"
        ));
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(format!("{field} cannot contain '..', got '{segment}'"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(format!(
                    "{field} must be relative to the project root, got '{segment}'"
                ));
            }
        }
    }

    if !path.components().any(|c| matches!(c, Component::Normal(_))) {
        return Err(format!("{field} must name a directory below the project root"));
    }

    Ok(())
}
