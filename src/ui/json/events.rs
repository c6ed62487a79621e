//! Shared JSON event types for consistent CLI output.
//!
//! All commands use these event types for JSON output so field naming stays
//! the same across the CLI.

use serde::Serialize;

use objview::tree::RenderedNode;
use objview::ExpandedPaths;

/// The set of expanded paths, emitted by `paths` and when `view` quits.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandedPathsEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub paths: Vec<&'a str>,
}

impl<'a> ExpandedPathsEvent<'a> {
    /// Only paths marked expanded are listed.
    pub fn new(command: &'a str, state: &'a ExpandedPaths) -> Self {
        Self {
            event: "expanded_paths",
            command,
            paths: state
                .iter()
                .filter(|(_, expanded)| **expanded)
                .map(|(path, _)| path.as_str())
                .collect(),
        }
    }
}

/// One rendered tree node, emitted by `print`.
#[derive(Debug, Clone, Serialize)]
pub struct NodeEvent<'a> {
    pub event: &'static str,
    pub path: &'a str,
    pub name: &'a str,
    pub depth: usize,
    pub expanded: bool,
    pub has_children: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub non_enumerable: bool,
    pub label: String,
}

impl<'a> NodeEvent<'a> {
    pub fn new(node: &'a RenderedNode) -> Self {
        Self {
            event: "node",
            path: &node.path,
            name: &node.name,
            depth: node.depth,
            expanded: node.expanded,
            has_children: node.show_arrow,
            non_enumerable: node.is_non_enumerable,
            label: node.label.text(),
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}
