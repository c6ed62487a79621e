//! Path expansion engine.
//!
//! Resolves an [`ExpansionPolicy`] against a value into the set of paths that
//! must start expanded. The walk only goes as deep as the longest template, so
//! cyclic values need no visited-set bookkeeping.

use crate::iterator::DataIterator;
use crate::value::{Heap, Value};

use super::path::{
    child_path, is_root_segment, segments, MAX_TEMPLATE_SEGMENTS, ROOT_PATH, WILDCARD,
};
use super::policy::ExpansionPolicy;
use super::ExpandedPaths;

/// Compute the expansion state for `value` under `policy`.
///
/// The result is `previous` plus every path the policy reaches; entries that
/// are already `true` stay `true`.
pub fn compute_expanded_paths(
    heap: &Heap,
    value: &Value,
    iterator: &DataIterator,
    policy: &ExpansionPolicy,
    previous: &ExpandedPaths,
) -> ExpandedPaths {
    let templates = policy.templates();
    let mut recorded = Vec::new();

    for template in &templates {
        let mut segs = segments(template);
        if segs.len() > MAX_TEMPLATE_SEGMENTS {
            tracing::warn!(
                template = %template,
                max = MAX_TEMPLATE_SEGMENTS,
                "expansion template truncated"
            );
            segs.truncate(MAX_TEMPLATE_SEGMENTS);
        }

        match segs.split_first() {
            Some((root, rest)) if is_root_segment(root) => {
                if !iterator.has_children(heap, value) {
                    continue;
                }
                recorded.push(ROOT_PATH.to_string());
                walk(heap, iterator, value, ROOT_PATH, rest, &mut recorded);
            }
            _ => tracing::debug!(template = %template, "template does not start at the root"),
        }
    }

    tracing::debug!(
        templates = templates.len(),
        recorded = recorded.len(),
        "computed expanded paths"
    );
    merge(previous, recorded)
}

fn walk(
    heap: &Heap,
    iterator: &DataIterator,
    value: &Value,
    path: &str,
    rest: &[&str],
    recorded: &mut Vec<String>,
) {
    let Some((segment, rest)) = rest.split_first() else {
        return;
    };

    if *segment == WILDCARD {
        for child in iterator.iterate(heap, value) {
            if iterator.has_children(heap, &child.value) {
                let path = child_path(path, &child.name);
                recorded.push(path.clone());
                walk(heap, iterator, &child.value, &path, rest, recorded);
            }
        }
        return;
    }

    match iterator.child(heap, value, segment) {
        Some(child) if iterator.has_children(heap, &child.value) => {
            let path = child_path(path, &child.name);
            recorded.push(path.clone());
            walk(heap, iterator, &child.value, &path, rest, recorded);
        }
        _ => {}
    }
}

/// Copy of `previous` with every path in `recorded` set to `true`.
pub fn merge(
    previous: &ExpandedPaths,
    recorded: impl IntoIterator<Item = String>,
) -> ExpandedPaths {
    let mut merged = previous.clone();
    for path in recorded {
        merged.insert(path, true);
    }
    merged
}
