//! Inspector Widget
//!
//! Interactive, keyboard-driven browser over a `TreeView`.
//!
//! # Module Structure
//!
//! - `menu` - InspectorMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::InspectorMenu;
pub use render::render_tree;
