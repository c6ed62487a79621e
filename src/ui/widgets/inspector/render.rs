//! Terminal rendering functions for the inspector.
//!
//! Everything renders to strings; the caller decides where they go.

use crossterm::style::ContentStyle;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use objview::tree::{Label, RenderedNode, StyleSlot, Styles};

use crate::ui::labels::escape_control;

fn paint(out: &mut String, text: &str, style: ContentStyle, color: bool) {
    if color && style != ContentStyle::default() {
        out.push_str(&style.apply(text).to_string());
    } else {
        out.push_str(text);
    }
}

fn paint_slot(out: &mut String, styles: &Styles, slot: StyleSlot, color: bool) {
    paint(out, styles.glyph(slot), styles.style(slot), color);
}

/// Render the label spans of a node.
pub fn render_label(label: &Label, styles: &Styles, color: bool) -> String {
    let mut out = String::new();
    for span in &label.spans {
        paint(&mut out, &escape_control(&span.text), styles.style(span.slot), color);
    }
    out
}

/// Indent plus arrow or placeholder, and its width in columns.
fn node_prefix(node: &RenderedNode, styles: &Styles, color: bool) -> (String, usize) {
    let mut out = String::new();
    let mut width = 0;
    let mut put = |out: &mut String, slot: StyleSlot, trailing: bool| {
        paint_slot(out, styles, slot, color);
        width += styles.glyph(slot).width();
        if trailing {
            out.push(' ');
            width += 1;
        }
    };

    for _ in 0..node.depth {
        put(&mut out, StyleSlot::Indent, false);
    }

    if node.show_arrow {
        let slot = if node.expanded {
            StyleSlot::NodeArrowExpanded
        } else {
            StyleSlot::NodeArrowCollapsed
        };
        put(&mut out, slot, true);
    } else if node.show_placeholder {
        put(&mut out, StyleSlot::Placeholder, true);
    }

    (out, width)
}

/// Keep the leading spans of `label` that fit in `width` columns.
pub fn clip_label(label: &Label, width: usize) -> Label {
    let mut clipped = Label::new();
    let mut used = 0;
    for span in &label.spans {
        let mut text = String::new();
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                clipped.append(span.slot, text);
                return clipped;
            }
            used += w;
            text.push(c);
        }
        clipped.append(span.slot, text);
    }
    clipped
}

/// Render a single tree node: indent, arrow or placeholder, then the label.
pub fn render_tree_node(node: &RenderedNode, styles: &Styles, color: bool) -> String {
    let (mut out, _) = node_prefix(node, styles, color);
    out.push_str(&render_label(&node.label, styles, color));
    out
}

/// Like [`render_tree_node`], cut to `width` columns.
pub fn render_tree_node_clipped(
    node: &RenderedNode,
    styles: &Styles,
    color: bool,
    width: usize,
) -> String {
    let (mut out, used) = node_prefix(node, styles, color);
    let label = clip_label(&node.label, width.saturating_sub(used));
    out.push_str(&render_label(&label, styles, color));
    out
}

/// Render all nodes, one per line.
pub fn render_tree(nodes: &[RenderedNode], styles: &Styles, color: bool) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&render_tree_node(node, styles, color));
        out.push('\n');
    }
    out
}

/// Render the status bar for the node under the cursor
pub fn render_status_bar(path: &str, expanded: usize) -> String {
    format!("{}    ({} expanded)", path, expanded)
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[Space] Toggle    [q] Quit\n\
         (Use ↑↓ to navigate, →← to expand/collapse)",
    )
}
