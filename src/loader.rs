//! Document loading
//!
//! Builds a [`Heap`] and a root [`Value`] from JSON, YAML or TOML input.
//! Object key order is preserved as written in the source document.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{ObjviewError, ObjviewResult};
use crate::value::{Heap, Value};

/// Path that reads the document from stdin
pub const STDIN_PATH: &str = "-";

/// Supported input formats
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

/// A loaded document: the heap plus its root value.
#[derive(Debug, Clone)]
pub struct Document {
    pub heap: Heap,
    pub root: Value,
}

/// Load a document from `path` (`-` for stdin).
///
/// Without an explicit `format` the extension decides; stdin defaults to JSON.
pub fn load(path: &Path, format: Option<Format>) -> ObjviewResult<Document> {
    let is_stdin = path.as_os_str() == STDIN_PATH;
    let format = match format.or_else(|| Format::from_path(path)) {
        Some(format) => format,
        None if is_stdin => Format::Json,
        None => {
            return Err(ObjviewError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = if is_stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    tracing::debug!(
        path = %path.display(),
        format = format.as_str(),
        bytes = content.len(),
        "loading document"
    );
    parse_str(&content, format)
}

/// Parse `input` as `format` into a fresh heap.
pub fn parse_str(input: &str, format: Format) -> ObjviewResult<Document> {
    let mut heap = Heap::new();
    let root = match format {
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(input)?;
            from_json(&mut heap, &value)
        }
        Format::Yaml => {
            let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(input)?;
            from_yaml(&mut heap, &value)
        }
        Format::Toml => {
            let value: toml::Table = toml::from_str(input)?;
            from_toml(&mut heap, &toml::Value::Table(value))
        }
    };
    Ok(Document { heap, root })
}

fn from_json(heap: &mut Heap, value: &serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match value {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => {
            let items = items.iter().map(|item| from_json(heap, item)).collect();
            Value::Object(heap.array(items))
        }
        Json::Object(map) => {
            let id = heap.plain();
            for (key, item) in map {
                let item = from_json(heap, item);
                heap.insert(id, key.as_str(), item);
            }
            Value::Object(id)
        }
    }
}

fn from_yaml(heap: &mut Heap, value: &serde_yaml_ng::Value) -> Value {
    use serde_yaml_ng::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => {
            let items = items.iter().map(|item| from_yaml(heap, item)).collect();
            Value::Object(heap.array(items))
        }
        Yaml::Mapping(mapping) => {
            // Non-string keys cannot be property names, so such mappings
            // become map objects keyed by the converted values.
            if mapping.keys().all(|k| k.is_string()) {
                let id = heap.plain();
                for (key, item) in mapping {
                    let item = from_yaml(heap, item);
                    heap.insert(id, key.as_str().unwrap_or_default(), item);
                }
                Value::Object(id)
            } else {
                let entries = mapping
                    .iter()
                    .map(|(key, item)| (from_yaml(heap, key), from_yaml(heap, item)))
                    .collect();
                Value::Object(heap.map(entries))
            }
        }
        Yaml::Tagged(tagged) => from_yaml(heap, &tagged.value),
    }
}

fn from_toml(heap: &mut Heap, value: &toml::Value) -> Value {
    use toml::Value as Toml;

    match value {
        Toml::String(s) => Value::String(s.clone()),
        Toml::Integer(i) => Value::from(*i),
        Toml::Float(f) => Value::Number(*f),
        Toml::Boolean(b) => Value::Bool(*b),
        Toml::Datetime(dt) => Value::String(dt.to_string()),
        Toml::Array(items) => {
            let items = items.iter().map(|item| from_toml(heap, item)).collect();
            Value::Object(heap.array(items))
        }
        Toml::Table(table) => {
            let id = heap.plain();
            for (key, item) in table {
                let item = from_toml(heap, item);
                heap.insert(id, key.as_str(), item);
            }
            Value::Object(id)
        }
    }
}
