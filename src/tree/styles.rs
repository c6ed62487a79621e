//! Named presentation slots.
//!
//! The tree core stores and hands out these styles but never looks inside
//! them; the terminal layer decides what a slot means.

use std::collections::HashMap;

use crossterm::style::ContentStyle;

/// Presentation slot a piece of a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    TreeOutline,
    NodeArrowExpanded,
    NodeArrowCollapsed,
    Placeholder,
    Indent,
    Name,
    NonEnumerableName,
    Punctuation,
    Description,
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Function,
}

/// Glyph and terminal style for one slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStyle {
    pub glyph: Option<String>,
    pub style: ContentStyle,
}

impl SlotStyle {
    pub fn glyph(glyph: impl Into<String>) -> Self {
        Self {
            glyph: Some(glyph.into()),
            style: ContentStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ContentStyle) -> Self {
        self.style = style;
        self
    }
}

/// Slot table supplied by the embedder.
#[derive(Debug, Clone, Default)]
pub struct Styles {
    slots: HashMap<StyleSlot, SlotStyle>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: StyleSlot, style: SlotStyle) -> Self {
        self.slots.insert(slot, style);
        self
    }

    pub fn get(&self, slot: StyleSlot) -> Option<&SlotStyle> {
        self.slots.get(&slot)
    }

    /// Glyph for `slot`, or the empty string.
    pub fn glyph(&self, slot: StyleSlot) -> &str {
        self.get(slot)
            .and_then(|s| s.glyph.as_deref())
            .unwrap_or("")
    }

    pub fn style(&self, slot: StyleSlot) -> ContentStyle {
        self.get(slot).map(|s| s.style).unwrap_or_default()
    }
}
