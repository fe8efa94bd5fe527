use proptest::prelude::*;
use serde_json::{json, Value};
use webstrates_json_ml::node::{child_step, children};
use webstrates_json_ml::{parse_path, resolve, resolve_attribute, validate_path, Path, PathStep};

fn jsonml() -> impl Strategy<Value = Value> {
    let leaf = "[a-z ]{0,6}".prop_map(Value::from);
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            "[a-z]{1,5}",
            prop::collection::btree_map("[a-z]{1,4}", "[a-z0-9]{0,4}", 0..3),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, attrs, kids)| {
                let mut node = vec![Value::from(tag), json!(attrs)];
                node.extend(kids);
                Value::Array(node)
            })
    })
}

/// Every node of `tree` paired with the structural path leading to it.
fn node_paths(tree: &Value) -> Vec<(Path, &Value)> {
    let mut out = Vec::new();
    let mut stack: Vec<(Path, &Value)> = vec![(Vec::new(), tree)];
    while let Some((path, node)) = stack.pop() {
        for logical in 0..children(node).len() {
            let mut child_path = path.clone();
            child_path.push(child_step(node, logical));
            stack.push((child_path, &children(node)[logical]));
        }
        out.push((path, node));
    }
    out
}

proptest! {
    #[test]
    fn prop_resolve_returns_the_addressed_node(tree in jsonml()) {
        for (path, node) in node_paths(&tree) {
            let found = resolve(&tree, &path);
            prop_assert!(found.is_some_and(|f| std::ptr::eq(f, node)));
        }
    }

    #[test]
    fn prop_attribute_terminal_never_resolves(tree in jsonml(), name in "[a-z]{1,4}") {
        for (mut path, _) in node_paths(&tree) {
            path.push(PathStep::Attr(name.clone()));
            prop_assert_eq!(resolve(&tree, &path), None);
        }
    }
}

#[test]
fn test_wire_path_against_snapshot() {
    let snapshot = json!(["html", {"__wid": "root"},
        ["head", {}],
        ["body", {},
            ["script", {"src": "app.js", "async": ""}],
            ["div", {"class": "note"}, "hello"]]]);

    let div = parse_path(&json!([3, 3])).unwrap();
    assert_eq!(resolve(&snapshot, &div).and_then(|v| v.get(0)), Some(&json!("div")));

    let src = parse_path(&json!([3, 2, "src"])).unwrap();
    assert!(validate_path(&src).is_ok());
    assert_eq!(resolve(&snapshot, &src), None);
    assert_eq!(resolve_attribute(&snapshot, &src), Some("app.js"));

    let text = parse_path(&json!([3, 3, 2])).unwrap();
    assert_eq!(resolve(&snapshot, &text), Some(&json!("hello")));
}

#[test]
fn test_missing_nodes_resolve_to_none() {
    let snapshot = json!(["p", {}, "only"]);
    assert_eq!(resolve(&snapshot, &[PathStep::Index(3)]), None);
    assert_eq!(resolve(&snapshot, &[PathStep::Index(2), PathStep::Index(0)]), None);
}
