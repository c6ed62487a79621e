//! Declarative expansion policy.

use serde::{Deserialize, Serialize};

use super::path::wildcard_paths_from_level;

/// Which nodes start out expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionPolicy {
    /// Expand every node within this many levels of the root
    #[serde(default)]
    pub expand_level: usize,

    /// Explicit paths, each segment a child name or `*`
    #[serde(default)]
    pub expand_paths: Vec<String>,
}

impl ExpansionPolicy {
    pub fn new(expand_level: usize, expand_paths: Vec<String>) -> Self {
        Self {
            expand_level,
            expand_paths,
        }
    }

    pub fn level(expand_level: usize) -> Self {
        Self::new(expand_level, Vec::new())
    }

    pub fn paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(0, paths.into_iter().map(Into::into).collect())
    }

    /// Level templates first, then explicit paths.
    pub fn templates(&self) -> Vec<String> {
        let mut templates = wildcard_paths_from_level(self.expand_level);
        templates.extend(self.expand_paths.iter().cloned());
        templates
    }

    pub fn is_empty(&self) -> bool {
        self.expand_level == 0 && self.expand_paths.is_empty()
    }
}
