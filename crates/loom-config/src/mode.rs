//! Mode derivation: one flag in, every mode-dependent setting out.

use serde::{Serialize, Serializer};

use crate::env::EnvironmentInputs;

/// Flags derived from the mode variable.
///
/// Always built through [`ResolvedMode::derive`] or
/// [`ResolvedMode::from_flag`], so `is_watch` implies `is_development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMode {
    is_development: bool,
    is_watch: bool,
}

impl ResolvedMode {
    pub fn derive(env: &EnvironmentInputs) -> Self {
        Self::from_flag(env.mode())
    }

    /// Missing or unrecognized flags resolve to production.
    pub fn from_flag(flag: Option<&str>) -> Self {
        let is_watch = flag == Some("watch");
        let is_development = is_watch || flag == Some("development");

        match flag {
            Some("development" | "production" | "watch") | None => {}
            Some(other) => {
                tracing::warn!(mode = other, "unrecognized mode, falling back to production");
            }
        }

        Self {
            is_development,
            is_watch,
        }
    }

    pub fn is_development(&self) -> bool {
        self.is_development
    }

    pub fn is_watch(&self) -> bool {
        self.is_watch
    }

    pub fn build_mode(&self) -> BuildMode {
        if self.is_development {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn devtool(&self) -> Devtool {
        if self.is_development {
            Devtool::SourceMap
        } else {
            Devtool::Disabled
        }
    }

    pub fn emit_source_maps(&self) -> bool {
        self.devtool() == Devtool::SourceMap
    }

    /// The browser only opens for an interactive watch session.
    pub fn auto_open(&self) -> bool {
        self.is_watch
    }

    pub fn image_policy(&self) -> AssetPolicy {
        if self.is_development {
            AssetPolicy::EmitAll
        } else {
            AssetPolicy::InlineSmall
        }
    }

    /// Cleanup only simulates deletion while a watch loop writes output.
    pub fn dry_clean(&self) -> bool {
        self.is_watch
    }
}

/// Build mode label handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

/// Debug-symbol emission. Serializes as `"source-map"` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
    SourceMap,
    Disabled,
}

impl Serialize for Devtool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Devtool::SourceMap => serializer.serialize_str("source-map"),
            Devtool::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// How the asset emitter treats matched files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetPolicy {
    /// Every file is written to the build directory.
    EmitAll,
    /// Files under the engine's size threshold are inlined, the rest emitted.
    InlineSmall,
}

impl AssetPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            AssetPolicy::EmitAll => "emit-all",
            AssetPolicy::InlineSmall => "inline-small",
        }
    }

    /// Module type understood by the engine.
    pub fn module_type(&self) -> &'static str {
        match self {
            AssetPolicy::EmitAll => "asset/resource",
            AssetPolicy::InlineSmall => "asset",
        }
    }
}

impl Serialize for AssetPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.module_type())
    }
}
