mod common;

use common::analyze;
use treescope_java::JavaAnalyzer;

const SAMPLE: &str = r#"package com.example.shop;

import java.util.*;
import static java.util.List.of;

public class Cart {
    private final List<Item> items = new ArrayList<>();

    public void add(Item item) {
        items.add(item);
    }

    record Item(String name, int price) {}
}
"#;

#[test]
fn test_format_renders_indented_tree() {
    let expected = "\
File
  import java.util.*
  import static java.util.List.of
  Package com.example.shop
  public class Cart
    private final items: List<Item>
    Invoke: new ArrayList<>()
    public add (Item item): void
      Invoke: items.add(item)
    default record Item(String name, int price)
";
    assert_eq!(analyze(SAMPLE).format(0), expected);
}

#[test]
fn test_format_with_base_indent() {
    let formatted = analyze("class A {}").format(2);
    assert_eq!(formatted, "  File\n    default class A\n");
}

#[test]
fn test_analyze_is_idempotent() {
    let analyzer = JavaAnalyzer::new();
    let first = analyzer.analyze(SAMPLE).unwrap();
    let second = analyzer.analyze(SAMPLE).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, JavaAnalyzer::new().analyze(SAMPLE).unwrap());
}

#[test]
fn test_source_lines_are_kept_with_the_model() {
    let tree = analyze(SAMPLE);
    assert_eq!(tree.lines.line(0), Some("package com.example.shop;"));
    assert_eq!(tree.lines.len(), SAMPLE.lines().count());
}

#[test]
fn test_json_serialization_of_scopes() {
    let tree = analyze(SAMPLE);
    let json = serde_json::to_value(&tree.root).unwrap();

    assert_eq!(json["kind"], "file");
    assert_eq!(json["imports"][1]["is_static"], true);
    assert_eq!(json["children"][0]["kind"], "package");
    assert_eq!(json["children"][1]["kind"], "class");
    assert_eq!(json["children"][1]["identifier"], "Cart");

    let field_type = &json["children"][1]["fields"][0]["type_identifier"];
    assert_eq!(field_type["type"], "generic");
    assert_eq!(field_type["name"], "List");
    assert_eq!(field_type["type_parameters"][0]["name"], "Item");

    let invocation = &json["children"][1]["children"][0]["invocations"][0];
    assert_eq!(invocation["type"], "function");
    assert_eq!(invocation["access_path"][1], "add");
}

#[test]
fn test_render_tree_is_independent_of_the_model() {
    let rendered = JavaAnalyzer::new()
        .render_tree("import a.B;")
        .unwrap();
    let expected = "\
program [0, 0] - [0, 11]
  import_declaration [0, 0] - [0, 11]
    import [0, 0] - [0, 6]
    scoped_identifier [0, 7] - [0, 10]
      identifier [0, 7] - [0, 8]
      . [0, 8] - [0, 9]
      identifier [0, 9] - [0, 10]
    ; [0, 10] - [0, 11]
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_tree_of_deep_expression() {
    let terms = vec!["a"; 3000].join(" + ");
    let source = format!("class A {{ int s = {}; }}", terms);
    let rendered = JavaAnalyzer::new().render_tree(&source).unwrap();
    let binaries = rendered
        .lines()
        .filter(|l| l.trim_start().starts_with("binary_expression"))
        .count();
    assert_eq!(binaries, 2999);
    assert!(rendered.starts_with("program [0, 0]"));
    let last = rendered.lines().last().unwrap();
    assert_eq!(last, format!("      }} [0, {}] - [0, {}]", source.len() - 1, source.len()));
}

#[test]
fn test_analyzer_is_shareable_across_threads() {
    let analyzer = std::sync::Arc::new(JavaAnalyzer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || {
                let source = format!("class C{} {{ void run() {{ go(); }} }}", i);
                analyzer.analyze(&source).unwrap().all_classes()[0].identifier.clone()
            })
        })
        .collect();
    let names: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names, vec!["C0", "C1", "C2", "C3"]);
}
