//! objview - lazy, expandable inspection of nested data
//!
//! objview renders an arbitrary, possibly cyclic, nested value as a tree that
//! only materializes the nodes a user has expanded. The library exposes the
//! data iterator, the path expansion engine and the tree render loop; the
//! `objview` binary adds the terminal front end.

pub mod config;
pub mod error;
pub mod expansion;
pub mod iterator;
pub mod loader;
pub mod presentation;
pub mod tree;
pub mod value;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use error::{AccessError, ObjviewError, ObjviewResult};
pub use expansion::{
    compute_expanded_paths, ExpandedPaths, ExpansionPolicy, ExpansionStore, OnExpand,
};
pub use iterator::{ChildDescriptor, ContainerKind, DataIterator, KeySort};
pub use loader::{Document, Format};
pub use tree::{
    InspectorOptions, Label, NodeProps, NodeRenderer, RenderedNode, StyleSlot, Styles, TreeView,
};
pub use value::{Heap, ObjectId, ObjectKind, Value};
