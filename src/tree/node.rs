//! Node rendering capability.

use crate::iterator::DataIterator;
use crate::value::{Heap, Value};

use super::styles::{StyleSlot, Styles};

/// Handle a renderer can expose to let the shell toggle this node.
///
/// Holding it does not grant mutation: the shell passes it back to
/// [`TreeView::apply_toggle`](super::TreeView::apply_toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleHandle {
    path: String,
    enabled: bool,
}

impl ToggleHandle {
    pub(crate) fn new(path: String, enabled: bool) -> Self {
        Self { path, enabled }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Leaves carry a disabled handle.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Everything a renderer gets to know about a node.
pub struct NodeProps<'a> {
    pub name: &'a str,
    pub value: &'a Value,
    pub heap: &'a Heap,
    pub iterator: &'a DataIterator,
    pub depth: usize,
    pub is_non_enumerable: bool,
    pub expanded: bool,
    pub has_children: bool,
    pub path: &'a str,
    pub on_toggle: ToggleHandle,
    pub styles: &'a Styles,
}

/// Run of label text in one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub slot: StyleSlot,
    pub text: String,
}

/// Rendered node content (everything after the arrow).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    pub spans: Vec<Span>,
}

impl Label {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(slot: StyleSlot, text: impl Into<String>) -> Self {
        Self::new().push(slot, text)
    }

    pub fn push(mut self, slot: StyleSlot, text: impl Into<String>) -> Self {
        self.append(slot, text);
        self
    }

    pub fn append(&mut self, slot: StyleSlot, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { slot, text });
        }
    }

    pub fn extend(&mut self, other: Label) {
        self.spans.extend(other.spans);
    }

    /// Concatenated text without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Pluggable node presentation.
///
/// Renderers only describe a node; they cannot change expansion state.
pub trait NodeRenderer {
    fn render(&self, props: &NodeProps<'_>) -> Label;
}

impl<F> NodeRenderer for F
where
    F: Fn(&NodeProps<'_>) -> Label,
{
    fn render(&self, props: &NodeProps<'_>) -> Label {
        self(props)
    }
}

/// Renders the node name and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRenderer;

impl NodeRenderer for NameRenderer {
    fn render(&self, props: &NodeProps<'_>) -> Label {
        Label::plain(StyleSlot::Name, props.name)
    }
}

/// One line of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub path: String,
    pub name: String,
    pub depth: usize,
    pub expanded: bool,
    /// Child-bearing nodes get an arrow
    pub show_arrow: bool,
    /// Non-root leaves get a placeholder where the arrow would be
    pub show_placeholder: bool,
    pub is_non_enumerable: bool,
    pub label: Label,
    pub toggle: ToggleHandle,
}
