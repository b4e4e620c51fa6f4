use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::mode::AssetPolicy;

/// File categories with a dedicated rule, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Template,
    Stylesheet,
    Script,
    Image,
    Font,
}

impl FileCategory {
    pub const ALL: [FileCategory; 5] = [
        FileCategory::Template,
        FileCategory::Stylesheet,
        FileCategory::Script,
        FileCategory::Image,
        FileCategory::Font,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Template => "template",
            FileCategory::Stylesheet => "stylesheet",
            FileCategory::Script => "script",
            FileCategory::Image => "image",
            FileCategory::Font => "font",
        }
    }
}

/// A compiled path pattern. Compares and serializes by its source text.
#[derive(Debug, Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    /// Match file names ending in any of `extensions`.
    ///
    /// A single extension renders as `\.pug$`, several as `\.(png|jpg)$`.
    pub fn extensions(extensions: &[&str]) -> Self {
        let escaped: Vec<String> = extensions.iter().map(|ext| regex::escape(ext)).collect();
        let source = match escaped.as_slice() {
            [single] => format!(r"\.{single}$"),
            many => format!(r"\.({})$", many.join("|")),
        };
        Self::compiled(source)
    }

    /// Match anywhere in the path.
    pub fn literal(text: &str) -> Self {
        Self::compiled(regex::escape(text))
    }

    fn compiled(source: String) -> Self {
        let regex = Regex::new(&source).expect("escaped pattern is always valid");
        Self { source, regex }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FilePattern {}

impl Serialize for FilePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// One loader in a rule pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStage {
    pub loader: String,

    pub options: IndexMap<String, Value>,

    /// Whether this stage rewrites stylesheet syntax before CSS loading sees it
    #[serde(skip)]
    pub transforms_syntax: bool,
}

impl LoaderStage {
    pub fn new(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options: option_map(options),
            transforms_syntax: false,
        }
    }

    pub fn transforming_syntax(mut self) -> Self {
        self.transforms_syntax = true;
        self
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }
}

/// Output naming for emitted assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetGenerator {
    pub filename: String,
}

/// What happens to a matched file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleAction {
    /// Loaders listed output-first; the last one reads the raw file.
    Pipeline {
        #[serde(rename = "use")]
        stages: Vec<LoaderStage>,
    },
    Asset {
        #[serde(rename = "type")]
        policy: AssetPolicy,
        generator: AssetGenerator,
    },
}

/// Pattern plus action for one file category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRule {
    #[serde(skip)]
    pub category: FileCategory,

    pub test: FilePattern,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    #[serde(flatten)]
    pub action: RuleAction,
}

impl TransformRule {
    pub fn pipeline(category: FileCategory, test: FilePattern, stages: Vec<LoaderStage>) -> Self {
        Self {
            category,
            test,
            exclude: None,
            action: RuleAction::Pipeline { stages },
        }
    }

    pub fn asset(
        category: FileCategory,
        test: FilePattern,
        policy: AssetPolicy,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            category,
            test,
            exclude: None,
            action: RuleAction::Asset {
                policy,
                generator: AssetGenerator {
                    filename: filename.into(),
                },
            },
        }
    }

    pub fn excluding(mut self, exclude: FilePattern) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// `test` runs against the file name, `exclude` against the whole path.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if !self.test.is_match(&name.to_string_lossy()) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(&path.to_string_lossy()),
            None => true,
        }
    }

    /// Pipeline stages; empty for asset rules.
    pub fn stages(&self) -> &[LoaderStage] {
        match &self.action {
            RuleAction::Pipeline { stages } => stages,
            RuleAction::Asset { .. } => &[],
        }
    }

    pub fn loader_names(&self) -> Vec<&str> {
        self.stages().iter().map(|s| s.loader.as_str()).collect()
    }

    pub fn asset_policy(&self) -> Option<AssetPolicy> {
        match &self.action {
            RuleAction::Asset { policy, .. } => Some(*policy),
            RuleAction::Pipeline { .. } => None,
        }
    }
}

/// Convert a `json!({..})` object into an ordered option map.
///
/// Non-object values produce an empty map.
pub(crate) fn option_map(value: Value) -> IndexMap<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => IndexMap::new(),
    }
}
