//! Expansion state store.

use std::fmt;

use super::ExpandedPaths;

/// Callback fired after every toggle with the toggled path and the new state.
pub type OnExpand = Box<dyn FnMut(&str, &ExpandedPaths)>;

/// The single mutable cell of expansion state.
///
/// All mutation goes through [`toggle`](Self::toggle) and
/// [`replace`](Self::replace).
#[derive(Default)]
pub struct ExpansionStore {
    paths: ExpandedPaths,
    on_expand: Option<OnExpand>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_expand(on_expand: OnExpand) -> Self {
        Self {
            paths: ExpandedPaths::new(),
            on_expand: Some(on_expand),
        }
    }

    pub fn set_on_expand(&mut self, on_expand: Option<OnExpand>) {
        self.on_expand = on_expand;
    }

    /// Hand the callback over, e.g. to a fresh store.
    pub fn take_on_expand(&mut self) -> Option<OnExpand> {
        self.on_expand.take()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.paths.get(path).copied().unwrap_or(false)
    }

    pub fn paths(&self) -> &ExpandedPaths {
        &self.paths
    }

    /// Number of paths currently marked expanded.
    pub fn expanded_count(&self) -> usize {
        self.paths.values().filter(|expanded| **expanded).count()
    }

    /// Flip the entry at `path` (absent counts as collapsed) and notify.
    ///
    /// Returns the new expanded flag.
    pub fn toggle(&mut self, path: &str) -> bool {
        let expanded = !self.is_expanded(path);
        self.paths.insert(path.to_string(), expanded);
        tracing::debug!(path, expanded, "toggled");

        if let Some(on_expand) = self.on_expand.as_mut() {
            on_expand(path, &self.paths);
        }
        expanded
    }

    /// Merge a recomputed state in.
    ///
    /// `true` entries are set, `false` entries only fill gaps; nothing already
    /// expanded is cleared.
    pub fn replace(&mut self, state: ExpandedPaths) {
        for (path, expanded) in state {
            if expanded {
                self.paths.insert(path, true);
            } else {
                self.paths.entry(path).or_insert(false);
            }
        }
    }
}

impl fmt::Debug for ExpansionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpansionStore")
            .field("paths", &self.paths)
            .field("on_expand", &self.on_expand.is_some())
            .finish()
    }
}
