use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

use objview::tree::{SlotStyle, StyleSlot, Styles};

/// Design tokens for the objview terminal UI.
///
/// Design constraints:
/// - Status colors (`colors::*`) are only used for messages
/// - Value colors (`syntax::*`) are only used inside the tree
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod syntax {
    use super::Color;

    pub const NAME: Color = Color::Magenta;
    pub const STRING: Color = Color::Red;
    pub const NUMBER: Color = Color::Blue;
    pub const BOOLEAN: Color = Color::Blue;
    pub const NULL: Color = Color::DarkGrey;
    pub const FUNCTION: Color = Color::Cyan;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const PLACEHOLDER: &str = " ";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[ERROR]";
    pub const WARNING: &str = "[WARN]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
    pub const PLACEHOLDER: &str = "   ";
    pub const ELLIPSIS: &str = "...";
}

/// Indentation per tree level
pub const INDENT: &str = "  ";

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn with_attr(mut style: ContentStyle, attribute: Attribute) -> ContentStyle {
    style.attributes = Attributes::from(attribute);
    style
}

/// Slot table for the tree: glyphs per `unicode`, colors only when `color`.
pub fn tree_styles(unicode: bool, color: bool) -> Styles {
    let (expand, collapse, placeholder) = if unicode {
        (icons::EXPAND, icons::COLLAPSE, icons::PLACEHOLDER)
    } else {
        (icons_ascii::EXPAND, icons_ascii::COLLAPSE, icons_ascii::PLACEHOLDER)
    };

    let glyphs = Styles::new()
        .with(StyleSlot::NodeArrowExpanded, SlotStyle::glyph(expand))
        .with(StyleSlot::NodeArrowCollapsed, SlotStyle::glyph(collapse))
        .with(StyleSlot::Placeholder, SlotStyle::glyph(placeholder))
        .with(StyleSlot::Indent, SlotStyle::glyph(INDENT));

    if !color {
        return glyphs;
    }

    let colored = |slot: StyleSlot, style: ContentStyle| {
        let glyph = glyphs.get(slot).and_then(|s| s.glyph.clone());
        SlotStyle { glyph, style }
    };

    Styles::new()
        .with(
            StyleSlot::NodeArrowExpanded,
            colored(StyleSlot::NodeArrowExpanded, fg(colors::DIM)),
        )
        .with(
            StyleSlot::NodeArrowCollapsed,
            colored(StyleSlot::NodeArrowCollapsed, fg(colors::DIM)),
        )
        .with(StyleSlot::Placeholder, colored(StyleSlot::Placeholder, ContentStyle::default()))
        .with(StyleSlot::Indent, colored(StyleSlot::Indent, ContentStyle::default()))
        .with(StyleSlot::Name, SlotStyle::default().with_style(fg(syntax::NAME)))
        .with(
            StyleSlot::NonEnumerableName,
            SlotStyle::default().with_style(with_attr(fg(syntax::NAME), Attribute::Dim)),
        )
        .with(StyleSlot::String, SlotStyle::default().with_style(fg(syntax::STRING)))
        .with(StyleSlot::Number, SlotStyle::default().with_style(fg(syntax::NUMBER)))
        .with(StyleSlot::Boolean, SlotStyle::default().with_style(fg(syntax::BOOLEAN)))
        .with(StyleSlot::Null, SlotStyle::default().with_style(fg(syntax::NULL)))
        .with(StyleSlot::Undefined, SlotStyle::default().with_style(fg(syntax::NULL)))
        .with(
            StyleSlot::Function,
            SlotStyle::default().with_style(with_attr(fg(syntax::FUNCTION), Attribute::Italic)),
        )
}

pub fn error_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::ERROR
    } else {
        icons_ascii::ERROR
    }
}

pub fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

pub fn ellipsis(unicode: bool) -> &'static str {
    if unicode {
        icons::ELLIPSIS
    } else {
        icons_ascii::ELLIPSIS
    }
}
