use serde_json::Value;

use crate::node::attributes;
use crate::types::PathStep;

/// Resolve a path against a JsonML snapshot.
///
/// Index steps descend into array slots; a path ending in an attribute step
/// never resolves, since attributes are not nodes (use
/// [`resolve_attribute`] for those). An attribute step anywhere else, an
/// out-of-bounds index, or descending into a non-array all yield `None`.
pub fn resolve<'a>(tree: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    if matches!(path.last(), Some(PathStep::Attr(_))) {
        return None;
    }
    let mut current = tree;
    for step in path {
        match step {
            PathStep::Index(i) => current = current.as_array()?.get(*i)?,
            PathStep::Attr(_) => return None,
        }
    }
    Some(current)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(tree: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    if matches!(path.last(), Some(PathStep::Attr(_))) {
        return None;
    }
    let mut current = tree;
    for step in path {
        match step {
            PathStep::Index(i) => current = current.as_array_mut()?.get_mut(*i)?,
            PathStep::Attr(_) => return None,
        }
    }
    Some(current)
}

/// Resolve a path ending in an attribute step to that attribute's value.
///
/// The index steps before the attribute locate the element; the attribute
/// is then read from its attribute map.
pub fn resolve_attribute<'a>(tree: &'a Value, path: &[PathStep]) -> Option<&'a str> {
    let (PathStep::Attr(name), head) = path.split_last()? else {
        return None;
    };
    let element = resolve(tree, head)?;
    attributes(element)?.get(name)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use PathStep::Index as I;

    fn doc() -> Value {
        json!(["html", {},
            ["head", {}, ["title", {}, "Hi"]],
            ["body", {"class": "main", "data-x": "1"},
                "text",
                ["p", {"id": "p1"}, "para"]]
        ])
    }

    #[test]
    fn test_empty_path_is_root() {
        let doc = doc();
        assert!(std::ptr::eq(resolve(&doc, &[]).unwrap(), &doc));
    }

    #[test]
    fn test_tag_and_attribute_slots() {
        let doc = doc();
        assert_eq!(resolve(&doc, &[I(0)]), Some(&json!("html")));
        assert_eq!(resolve(&doc, &[I(1)]), Some(&json!({})));
    }

    #[test]
    fn test_descend_into_children() {
        let doc = doc();
        let p = resolve(&doc, &[I(3), I(3)]).unwrap();
        assert_eq!(p, &json!(["p", {"id": "p1"}, "para"]));
        assert_eq!(resolve(&doc, &[I(3), I(2)]), Some(&json!("text")));
    }

    #[test]
    fn test_terminal_attribute_is_none() {
        let doc = doc();
        assert_eq!(resolve(&doc, &[I(3), "class".into()]), None);
        assert_eq!(resolve(&doc, &["class".into()]), None);
    }

    #[test]
    fn test_inner_attribute_is_none() {
        let doc = doc();
        assert_eq!(resolve(&doc, &["class".into(), I(0)]), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let doc = doc();
        assert_eq!(resolve(&doc, &[I(9)]), None);
        assert_eq!(resolve(&doc, &[I(3), I(2), I(0)]), None);
    }

    #[test]
    fn test_resolve_mut_edits_in_place() {
        let mut doc = doc();
        *resolve_mut(&mut doc, &[I(2), I(2), I(2)]).unwrap() = json!("Bye");
        assert_eq!(doc[2][2][2], json!("Bye"));
        assert!(resolve_mut(&mut doc, &[I(2), "x".into()]).is_none());
    }

    #[test]
    fn test_resolve_attribute() {
        let doc = doc();
        assert_eq!(resolve_attribute(&doc, &[I(3), "class".into()]), Some("main"));
        assert_eq!(resolve_attribute(&doc, &[I(3), I(3), "id".into()]), Some("p1"));
        assert_eq!(resolve_attribute(&doc, &[I(3), "missing".into()]), None);
        assert_eq!(resolve_attribute(&doc, &[I(3)]), None);
        assert_eq!(resolve_attribute(&doc, &[]), None);
    }

    #[test]
    fn test_resolve_attribute_without_map() {
        let doc = json!(["ul", ["li", "a"]]);
        assert_eq!(resolve_attribute(&doc, &["class".into()]), None);
    }
}
