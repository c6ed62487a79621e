//! Tree traversal, node rendering and styles.
//!
//! # Module Structure
//!
//! - `view` - `TreeView`, the render loop that owns the expansion store
//! - `node` - `NodeRenderer` capability and the per-node records it gets and produces
//! - `styles` - named presentation slots

mod node;
mod styles;
mod view;

pub use node::{Label, NameRenderer, NodeProps, NodeRenderer, RenderedNode, Span, ToggleHandle};
pub use styles::{SlotStyle, StyleSlot, Styles};
pub use view::{InspectorOptions, TreeView};
