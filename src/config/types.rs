//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ObjviewError, ObjviewResult};
use crate::expansion::path::MAX_TEMPLATE_SEGMENTS;
use crate::iterator::KeySort;
use crate::tree::InspectorOptions;

use super::loader::{self, ConfigWarning};

/// Initial expansion and iteration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default = "default_expand_level")]
    pub expand_level: usize,

    /// Accepts a single path or a list of paths:
    ///   expand_paths = "$.a"
    ///   expand_paths = ["$.a", "$.b.*"]
    #[serde(default, deserialize_with = "string_or_list")]
    pub expand_paths: Vec<String>,

    #[serde(default)]
    pub show_nonenumerable: bool,

    #[serde(default)]
    pub sort_object_keys: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            expand_level: default_expand_level(),
            expand_paths: Vec::new(),
            show_nonenumerable: false,
            sort_object_keys: false,
        }
    }
}

fn default_expand_level() -> usize {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(path) => vec![path],
        StringOrList::Many(paths) => paths,
    })
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inspect: InspectConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ObjviewResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ObjviewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load user and project config, then apply env overrides.
    pub fn load_layered(project_root: &Path) -> ObjviewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root)
    }

    /// Apply environment variable overrides (OBJVIEW_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reject settings the expansion engine cannot honor.
    pub fn validate(&self) -> ObjviewResult<()> {
        if self.inspect.expand_level > MAX_TEMPLATE_SEGMENTS {
            return Err(ObjviewError::InvalidExpandLevel {
                value: self.inspect.expand_level,
                max: MAX_TEMPLATE_SEGMENTS,
            });
        }
        Ok(())
    }

    pub fn inspector_options(&self) -> InspectorOptions {
        InspectorOptions {
            name: None,
            expand_level: self.inspect.expand_level,
            expand_paths: self.inspect.expand_paths.clone(),
            show_non_enumerable: self.inspect.show_nonenumerable,
            sort_object_keys: KeySort::from(self.inspect.sort_object_keys),
        }
    }
}
