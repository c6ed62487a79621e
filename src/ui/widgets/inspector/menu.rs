//! InspectorMenu state management and action handling.
//!
//! The menu owns a `TreeView`, keeps the rendered node list in sync with it,
//! and moves a cursor over that list.

use objview::tree::{RenderedNode, Styles};
use objview::TreeView;

use super::render::{render_help_bar, render_status_bar, render_tree_node_clipped};

/// Inspector menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Move cursor one page up
    PageUp,
    /// Move cursor one page down
    PageDown,
    /// Jump to the first node
    Home,
    /// Jump to the last node
    End,
    /// Toggle the node under the cursor
    Toggle,
    /// Expand node
    Expand,
    /// Collapse node, or jump to its parent
    Collapse,
    /// Leave the inspector
    Quit,
}

/// Interactive tree inspector
pub struct InspectorMenu<'h> {
    view: TreeView<'h>,
    nodes: Vec<RenderedNode>,
    /// Current cursor position in the rendered list
    cursor: usize,
    /// First visible row
    scroll: usize,
    page: usize,
}

impl<'h> InspectorMenu<'h> {
    pub fn new(view: TreeView<'h>) -> Self {
        let mut menu = Self {
            view,
            nodes: Vec::new(),
            cursor: 0,
            scroll: 0,
            page: 10,
        };
        menu.rebuild();
        menu
    }

    /// Number of rows a page move covers.
    pub fn set_page_size(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn view(&self) -> &TreeView<'h> {
        &self.view
    }

    pub fn nodes(&self) -> &[RenderedNode] {
        &self.nodes
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&RenderedNode> {
        self.nodes.get(self.cursor)
    }

    /// Re-render from the view, keeping the cursor on the same path.
    fn rebuild(&mut self) {
        let current = self.current().map(|n| n.path.clone());
        self.nodes = self.view.render();

        if let Some(path) = current {
            if let Some(i) = self.nodes.iter().position(|n| n.path == path) {
                self.cursor = i;
            }
        }
        if !self.nodes.is_empty() && self.cursor >= self.nodes.len() {
            self.cursor = self.nodes.len() - 1;
        }
    }

    /// Handle an action; returns `true` when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        let last = self.nodes.len().saturating_sub(1);
        match action {
            TreeAction::Up => self.cursor = self.cursor.saturating_sub(1),
            TreeAction::Down => self.cursor = (self.cursor + 1).min(last),
            TreeAction::PageUp => self.cursor = self.cursor.saturating_sub(self.page),
            TreeAction::PageDown => self.cursor = (self.cursor + self.page).min(last),
            TreeAction::Home => self.cursor = 0,
            TreeAction::End => self.cursor = last,
            TreeAction::Toggle => {
                if let Some(handle) = self.current().map(|n| n.toggle.clone()) {
                    if self.view.apply_toggle(&handle) {
                        self.rebuild();
                    }
                }
            }
            TreeAction::Expand => {
                let target = self
                    .current()
                    .filter(|n| n.show_arrow && !n.expanded)
                    .map(|n| n.toggle.clone());
                if let Some(handle) = target {
                    self.view.apply_toggle(&handle);
                    self.rebuild();
                }
            }
            TreeAction::Collapse => {
                let Some(node) = self.current() else {
                    return false;
                };
                if node.expanded {
                    let handle = node.toggle.clone();
                    self.view.apply_toggle(&handle);
                    self.rebuild();
                } else if let Some(parent) = self.parent_of(self.cursor) {
                    self.cursor = parent;
                }
            }
            TreeAction::Quit => return true,
        }
        false
    }

    fn parent_of(&self, index: usize) -> Option<usize> {
        let depth = self.nodes.get(index)?.depth;
        if depth == 0 {
            return None;
        }
        self.nodes[..index].iter().rposition(|n| n.depth == depth - 1)
    }

    /// Keep the cursor inside a window of `height` rows.
    fn visible_range(&mut self, height: usize) -> std::ops::Range<usize> {
        let height = height.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
        let end = (self.scroll + height).min(self.nodes.len());
        self.scroll..end
    }

    /// Render the visible part of the tree, `height` rows of `width` columns.
    pub fn render(&mut self, height: usize, width: usize, styles: &Styles, color: bool) -> String {
        let mut out = String::new();
        for i in self.visible_range(height) {
            let cursor = if i == self.cursor { "> " } else { "  " };
            out.push_str(cursor);
            out.push_str(&render_tree_node_clipped(
                &self.nodes[i],
                styles,
                color,
                width.saturating_sub(cursor.len()),
            ));
            out.push('\n');
        }
        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self) -> String {
        let path = self.current().map(|n| n.path.as_str()).unwrap_or_default();
        render_status_bar(path, self.view.store().expanded_count())
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }

    /// Give the view back, e.g. to report the final expansion state.
    pub fn into_view(self) -> TreeView<'h> {
        self.view
    }
}
