//! Expansion policy, engine and state.
//!
//! # Module Structure
//!
//! - `path` - root marker, wildcard, separator and level templates
//! - `policy` - `ExpansionPolicy`
//! - `engine` - `compute_expanded_paths` and the monotone merge
//! - `store` - `ExpansionStore` with `toggle` / `replace`

use std::collections::BTreeMap;

mod engine;
pub mod path;
mod policy;
mod store;

pub use engine::{compute_expanded_paths, merge};
pub use path::{child_path, wildcard_paths_from_level, ROOT_PATH, WILDCARD};
pub use policy::ExpansionPolicy;
pub use store::{ExpansionStore, OnExpand};

/// Path → expanded flag. Absent means collapsed.
pub type ExpandedPaths = BTreeMap<String, bool>;
