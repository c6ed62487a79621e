//! Tree traversal and render loop.
//!
//! A [`TreeView`] owns the expansion store for one inspected root. Root and
//! policy changes are recorded and resolved in [`TreeView::flush`], which
//! [`TreeView::render`] runs before drawing; toggles apply immediately.

use crate::expansion::{
    child_path, compute_expanded_paths, ExpandedPaths, ExpansionPolicy, ExpansionStore, OnExpand,
    ROOT_PATH,
};
use crate::iterator::{DataIterator, KeySort};
use crate::value::{Heap, Value};

use super::node::{NameRenderer, NodeProps, NodeRenderer, RenderedNode, ToggleHandle};
use super::styles::Styles;

/// Entry configuration of an inspector.
#[derive(Debug, Clone, Default)]
pub struct InspectorOptions {
    pub name: Option<String>,
    pub expand_level: usize,
    pub expand_paths: Vec<String>,
    pub show_non_enumerable: bool,
    pub sort_object_keys: KeySort,
}

impl InspectorOptions {
    pub fn policy(&self) -> ExpansionPolicy {
        ExpansionPolicy::new(self.expand_level, self.expand_paths.clone())
    }

    pub fn iterator(&self) -> DataIterator {
        DataIterator::new(self.show_non_enumerable, self.sort_object_keys.clone())
    }
}

/// Expandable view over one inspected value.
pub struct TreeView<'h> {
    heap: &'h Heap,
    name: Option<String>,
    data: Value,
    iterator: DataIterator,
    policy: ExpansionPolicy,
    store: ExpansionStore,
    renderer: Box<dyn NodeRenderer + 'h>,
    styles: Styles,
    needs_recompute: bool,
}

impl<'h> TreeView<'h> {
    /// Mount a view; the initial expansion is computed on first flush.
    pub fn new(heap: &'h Heap, data: Value) -> Self {
        Self {
            heap,
            name: None,
            data,
            iterator: DataIterator::default(),
            policy: ExpansionPolicy::default(),
            store: ExpansionStore::new(),
            renderer: Box::new(NameRenderer),
            styles: Styles::default(),
            needs_recompute: true,
        }
    }

    pub fn from_options(heap: &'h Heap, data: Value, options: &InspectorOptions) -> Self {
        let mut view = Self::new(heap, data)
            .with_iterator(options.iterator())
            .with_policy(options.policy());
        view.name = options.name.clone();
        view
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_iterator(mut self, iterator: DataIterator) -> Self {
        self.set_iterator(iterator);
        self
    }

    pub fn with_policy(mut self, policy: ExpansionPolicy) -> Self {
        self.set_policy(policy);
        self
    }

    pub fn with_renderer(mut self, renderer: impl NodeRenderer + 'h) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_on_expand(mut self, on_expand: OnExpand) -> Self {
        self.store.set_on_expand(Some(on_expand));
        self
    }

    pub fn heap(&self) -> &'h Heap {
        self.heap
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn iterator(&self) -> &DataIterator {
        &self.iterator
    }

    pub fn policy(&self) -> &ExpansionPolicy {
        &self.policy
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn store(&self) -> &ExpansionStore {
        &self.store
    }

    pub fn expanded_paths(&self) -> &ExpandedPaths {
        self.store.paths()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.store.is_expanded(path)
    }

    /// Whether a recompute is waiting for the next flush.
    pub fn is_pending(&self) -> bool {
        self.needs_recompute
    }

    /// Swap the inspected root.
    ///
    /// A root with a different identity starts a fresh expansion state; the
    /// same root keeps everything the user expanded.
    pub fn set_data(&mut self, data: Value) {
        if !self.data.same_identity(&data) {
            let on_expand = self.store.take_on_expand();
            self.store = ExpansionStore::new();
            self.store.set_on_expand(on_expand);
        }
        self.data = data;
        self.needs_recompute = true;
    }

    pub fn set_policy(&mut self, policy: ExpansionPolicy) {
        self.policy = policy;
        self.needs_recompute = true;
    }

    pub fn set_iterator(&mut self, iterator: DataIterator) {
        self.iterator = iterator;
        self.needs_recompute = true;
    }

    /// Run a pending recompute and merge it into the store.
    pub fn flush(&mut self) {
        if !self.needs_recompute {
            return;
        }
        let state = compute_expanded_paths(
            self.heap,
            &self.data,
            &self.iterator,
            &self.policy,
            self.store.paths(),
        );
        self.store.replace(state);
        self.needs_recompute = false;
    }

    /// Toggle the node at `path`.
    ///
    /// Returns `false` without touching the store when the path does not
    /// resolve or names a leaf.
    pub fn toggle(&mut self, path: &str) -> bool {
        match self.resolve(path) {
            Some(value) if self.iterator.has_children(self.heap, &value) => {
                self.store.toggle(path);
                true
            }
            _ => false,
        }
    }

    /// Toggle through a handle produced by [`render`](Self::render).
    pub fn apply_toggle(&mut self, handle: &ToggleHandle) -> bool {
        handle.is_enabled() && self.toggle(handle.path())
    }

    /// Find the value at `path` by following child names from the root.
    ///
    /// Child names may contain the separator, so candidates are matched by
    /// prefix and the walk backtracks on a dead end.
    pub fn resolve(&self, path: &str) -> Option<Value> {
        let rest = path.strip_prefix(ROOT_PATH)?;
        self.resolve_from(&self.data, rest)
    }

    fn resolve_from(&self, value: &Value, rest: &str) -> Option<Value> {
        if rest.is_empty() {
            return Some(value.clone());
        }
        let rest = rest.strip_prefix('.')?;
        for child in self.iterator.iterate(self.heap, value) {
            let Some(tail) = rest.strip_prefix(child.name.as_str()) else {
                continue;
            };
            if !(tail.is_empty() || tail.starts_with('.')) {
                continue;
            }
            if let Some(found) = self.resolve_from(&child.value, tail) {
                return Some(found);
            }
        }
        None
    }

    /// Flush pending effects and produce the visible nodes, depth-first.
    pub fn render(&mut self) -> Vec<RenderedNode> {
        self.flush();

        let mut out = Vec::new();
        let name = self.name.clone().unwrap_or_default();
        let root = self.data.clone();
        self.render_node(&name, &root, ROOT_PATH.to_string(), 0, false, &mut out);
        out
    }

    fn render_node(
        &self,
        name: &str,
        value: &Value,
        path: String,
        depth: usize,
        is_non_enumerable: bool,
        out: &mut Vec<RenderedNode>,
    ) {
        let has_children = self.iterator.has_children(self.heap, value);
        let expanded = self.store.is_expanded(&path);
        let toggle = ToggleHandle::new(path.clone(), has_children);

        let props = NodeProps {
            name,
            value,
            heap: self.heap,
            iterator: &self.iterator,
            depth,
            is_non_enumerable,
            expanded,
            has_children,
            path: &path,
            on_toggle: toggle.clone(),
            styles: &self.styles,
        };
        let label = self.renderer.render(&props);

        out.push(RenderedNode {
            path: path.clone(),
            name: name.to_string(),
            depth,
            expanded,
            show_arrow: has_children,
            show_placeholder: depth > 0,
            is_non_enumerable,
            label,
            toggle,
        });

        if !expanded {
            return;
        }

        let children: Vec<_> = self.iterator.iterate(self.heap, value).collect();
        for child in children {
            self.render_node(
                &child.name,
                &child.value,
                child_path(&path, &child.name),
                depth + 1,
                child.is_non_enumerable,
                out,
            );
        }
    }
}
