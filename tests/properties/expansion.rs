//! Property tests for path expansion and the tree walk.

use proptest::prelude::*;

use objview::expansion::{merge, wildcard_paths_from_level};
use objview::{
    compute_expanded_paths, DataIterator, ExpandedPaths, ExpansionPolicy, ExpansionStore, Heap,
    TreeView, Value,
};

/// Graph of `nodes` plain objects; each edge is `(from, key, to)` and may
/// point back at any node, including itself.
fn graph() -> impl Strategy<Value = (usize, Vec<(usize, String, usize)>)> {
    (1usize..=6).prop_flat_map(|nodes| {
        let edge = (0..nodes, "[a-d]", 0..nodes);
        (Just(nodes), proptest::collection::vec(edge, 0..=16))
    })
}

fn build(nodes: usize, edges: &[(usize, String, usize)]) -> (Heap, Value) {
    let mut heap = Heap::new();
    let ids: Vec<_> = (0..nodes).map(|_| heap.plain()).collect();
    for (from, key, to) in edges {
        heap.insert(ids[*from], key.as_str(), ids[*to]);
    }
    (heap, Value::Object(ids[0]))
}

fn depth(path: &str) -> usize {
    path.split('.').count() - 1
}

fn state() -> impl Strategy<Value = ExpandedPaths> {
    proptest::collection::btree_map("\\$(\\.[a-c]){0,3}", any::<bool>(), 0..=8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Level expansion of any graph, cycles included, terminates
    /// and never records a path deeper than the level allows.
    #[test]
    fn property_level_expansion_is_bounded((nodes, edges) in graph(), level in 0usize..=5) {
        let (heap, root) = build(nodes, &edges);
        let iterator = DataIterator::default();

        let paths = compute_expanded_paths(
            &heap,
            &root,
            &iterator,
            &ExpansionPolicy::level(level),
            &ExpandedPaths::new(),
        );

        for (path, expanded) in &paths {
            prop_assert!(*expanded);
            prop_assert!(path.starts_with('$'));
            prop_assert!(depth(path) < level, "{} too deep for level {}", path, level);
        }
        if level == 0 {
            prop_assert!(paths.is_empty());
        }
    }

    /// PROPERTY: Every recorded path names a reachable node that has children.
    #[test]
    fn property_expanded_paths_resolve_to_containers(
        (nodes, edges) in graph(),
        level in 1usize..=4,
    ) {
        let (heap, root) = build(nodes, &edges);
        let mut view = TreeView::new(&heap, root).with_policy(ExpansionPolicy::level(level));
        view.flush();

        let iterator = DataIterator::default();
        for path in view.expanded_paths().keys() {
            let value = view.resolve(path);
            prop_assert!(value.is_some(), "{} does not resolve", path);
            prop_assert!(iterator.has_children(&heap, &value.unwrap_or(Value::Undefined)));
        }
    }

    /// PROPERTY: Rendered nodes only appear under expanded parents, one
    /// level deeper than the parent.
    #[test]
    fn property_render_follows_expansion((nodes, edges) in graph(), level in 0usize..=4) {
        let (heap, root) = build(nodes, &edges);
        let mut view = TreeView::new(&heap, root).with_policy(ExpansionPolicy::level(level));
        let rendered = view.render();

        prop_assert_eq!(rendered[0].path.as_str(), "$");
        for node in &rendered[1..] {
            let parent = &node.path[..node.path.rfind('.').unwrap_or(0)];
            prop_assert!(
                view.is_expanded(parent),
                "{} shown under collapsed {}",
                node.path,
                parent
            );
            prop_assert_eq!(node.depth, depth(&node.path));
        }
    }

    /// PROPERTY: Merging never clears an entry that was already expanded.
    #[test]
    fn property_merge_is_monotone(
        previous in state(),
        recorded in proptest::collection::vec("\\$(\\.[a-c]){0,3}", 0..=6),
    ) {
        let merged = merge(&previous, recorded.clone());

        for (path, expanded) in &previous {
            if *expanded {
                prop_assert_eq!(merged.get(path), Some(&true));
            }
        }
        for path in &recorded {
            prop_assert_eq!(merged.get(path), Some(&true));
        }
    }

    /// PROPERTY: Toggling a path twice restores its expanded flag.
    #[test]
    fn property_double_toggle_restores_flag(initial in state(), path in "\\$(\\.[a-c]){0,3}") {
        let mut store = ExpansionStore::new();
        store.replace(initial);
        let before = store.is_expanded(&path);

        let first = store.toggle(&path);
        prop_assert_eq!(first, !before);
        let second = store.toggle(&path);
        prop_assert_eq!(second, before);
        prop_assert_eq!(store.is_expanded(&path), before);
    }

    /// PROPERTY: Level templates are `$` followed by one wildcard per depth.
    #[test]
    fn property_level_templates_shape(level in 0usize..=64) {
        let templates = wildcard_paths_from_level(level);
        prop_assert_eq!(templates.len(), level);
        for (i, template) in templates.iter().enumerate() {
            prop_assert_eq!(template.split('.').count(), i + 1);
            prop_assert!(template.starts_with('$'));
        }
    }
}
