//! Terminal front end: capabilities, theme, labels, JSON events and widgets.

pub mod context;
pub mod json;
pub mod labels;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
