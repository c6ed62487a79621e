//! Snapshot tests for `objview print` output

mod common;

use common::{TestEnv, SAMPLE_JSON};

#[test]
fn print_default_level_expands_root() {
    let env = TestEnv::new();
    env.write("data.json", SAMPLE_JSON);

    let result = env.run(&["print", "data.json"]);
    assert!(result.success, "stderr: {}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r#"
▼ {name: "objview", tags: Array(2), nested: Object, empty: Object, none: null}
    name: "objview"
  ▶ tags: Array(2)
  ▶ nested: Object
    empty: Object
    none: null
"#);
}

#[test]
fn print_level_two_with_ascii_glyphs() {
    let env = TestEnv::new();
    env.write("data.json", SAMPLE_JSON);

    let result = env.run(&["print", "data.json", "-l", "2", "--ascii"]);
    assert!(result.success, "stderr: {}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r#"
[v] {name: "objview", tags: Array(2), nested: Object, empty: Object, none: null}
      name: "objview"
  [v] tags: Array(2)
        0: "tree"
        1: "cli"
  [v] nested: Object
    [>] deep: Object
      empty: Object
      none: null
"#);
}

#[test]
fn print_expand_path_reaches_deep_node_only() {
    let env = TestEnv::new();
    env.write("data.json", SAMPLE_JSON);

    let result = env.run(&["print", "data.json", "-p", "$.nested.deep"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert!(lines.contains(&"  ▼ nested: Object"));
    assert!(lines.contains(&"    ▼ deep: Object"));
    assert!(lines.contains(&"        x: 1"));
    assert!(lines.contains(&"  ▶ tags: Array(2)"));
}

#[test]
fn print_named_root_and_sorted_keys() {
    let env = TestEnv::new();
    env.write("data.json", r#"{"b": 1, "a": 2}"#);

    let result = env.run(&["print", "data.json", "--name", "doc", "--sort-keys"]);
    assert!(result.success, "stderr: {}", result.stderr);
    insta::assert_snapshot!(result.stdout, @r#"
▼ doc: {a: 2, b: 1}
    a: 2
    b: 1
"#);
}

#[test]
fn print_yaml_and_toml_documents() {
    let env = TestEnv::new();
    env.write("data.yaml", "items:\n  - 1\n  - two\n");
    env.write("data.toml", "[server]\nport = 8080\n");

    let yaml = env.run(&["print", "data.yaml", "-l", "2"]);
    assert!(yaml.success, "stderr: {}", yaml.stderr);
    assert!(yaml.stdout.contains("  ▼ items: Array(2)"));
    assert!(yaml.stdout.contains("      1: \"two\""));

    let toml = env.run(&["print", "data.toml", "-l", "2"]);
    assert!(toml.success, "stderr: {}", toml.stderr);
    assert!(toml.stdout.contains("      port: 8080"));
}

#[test]
fn print_scalar_root_has_no_arrow() {
    let env = TestEnv::new();
    env.write("data.json", "42");

    let result = env.run(&["print", "data.json"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "42\n");
}

#[test]
fn view_without_terminal_falls_back_to_print() {
    let env = TestEnv::new();
    env.write("data.json", SAMPLE_JSON);

    let view = env.run(&["view", "data.json"]);
    let print = env.run(&["print", "data.json"]);
    assert!(view.success, "stderr: {}", view.stderr);
    assert_eq!(view.stdout, print.stdout);
}

#[test]
fn print_escapes_control_characters() {
    let env = TestEnv::new();
    env.write("data.json", r#"{"a": "line1\nline2", "b": "\u001b[31mred"}"#);

    let result = env.run(&["print", "data.json"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!result.stdout.contains('\u{1b}'));
    insta::assert_snapshot!(result.stdout, @r#"
▼ {a: "line1\nline2", b: "\u{1b}[31mred"}
    a: "line1\nline2"
    b: "\u{1b}[31mred"
"#);
    assert_eq!(result.stdout.lines().count(), 3);
}
