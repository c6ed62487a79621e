//! Tree paths and wildcard templates.

/// Path of the root node.
pub const ROOT_PATH: &str = "$";

/// Template segment matching every child at its level.
pub const WILDCARD: &str = "*";

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Longest template the engine will walk.
pub const MAX_TEMPLATE_SEGMENTS: usize = 64;

/// Path of a named child of `parent`.
pub fn child_path(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + name.len() + 1);
    path.push_str(parent);
    path.push(SEPARATOR);
    path.push_str(name);
    path
}

/// Whether `segment` may start a template.
pub fn is_root_segment(segment: &str) -> bool {
    segment == ROOT_PATH || segment == WILDCARD
}

/// One template per depth below `level`: `$`, `$.*`, `$.*.*`, ...
pub fn wildcard_paths_from_level(level: usize) -> Vec<String> {
    (0..level)
        .map(|depth| {
            std::iter::once(ROOT_PATH)
                .chain(std::iter::repeat(WILDCARD).take(depth))
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

/// Split a template into segments.
pub fn segments(template: &str) -> Vec<&str> {
    template.split(SEPARATOR).collect()
}
