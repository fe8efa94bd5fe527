//! Side-effect-free insertion.
//!
//! [`insert_inert`] lands a subtree in a live tree without letting any
//! script in it run. A script is inserted carrying an inert placeholder
//! source (and an inert `src` when it had one), which is what the host
//! starts; its real attributes and content are restored right after, by
//! which point the host considers the script already started. Every node's
//! children are detached first and re-inserted one by one, so nested scripts
//! get the same treatment. Run them later with [`crate::execute`].
//!
//! The target should be connected (or inside template content). Inserting
//! into a detached parent leaves scripts unstarted, and a later plain
//! insertion of that parent would run them.

use log::{debug, trace};

use crate::error::DomError;
use crate::host::{is_script, script_src, LiveTree};

/// Placeholder resource reference used while a script is inserted.
pub const INERT_SRC: &str = "about:blank";

/// Placeholder source text used while a script is inserted.
pub const INERT_BODY: &str = "// Execution prevention";

/// Insert `child` into `parent` before `reference` (or at the end) without
/// running any script in `child`'s subtree.
///
/// Template parents receive the node in their content container. Order,
/// attributes (including their order) and text are preserved.
pub fn insert_inert<T: LiveTree>(
    tree: &mut T,
    parent: T::Node,
    child: T::Node,
    reference: Option<T::Node>,
) -> Result<(), DomError> {
    let mut work = vec![(parent, child, reference)];
    while let Some((parent, child, reference)) = work.pop() {
        let parent = tree.template_content(parent).unwrap_or(parent);
        let descendants = detach_children(tree, child)?;
        if is_script(tree, child) {
            insert_neutralized(tree, parent, child, reference)?;
        } else {
            trace!("inserting {child:?} into {parent:?}");
            tree.insert_before(parent, child, reference)?;
        }
        work.extend(descendants.into_iter().rev().map(|d| (child, d, None)));
    }
    Ok(())
}

fn detach_children<T: LiveTree>(tree: &mut T, node: T::Node) -> Result<Vec<T::Node>, DomError> {
    let children = tree.children(node);
    for child in &children {
        tree.remove_child(node, *child)?;
    }
    Ok(children)
}

fn insert_neutralized<T: LiveTree>(
    tree: &mut T,
    parent: T::Node,
    script: T::Node,
    reference: Option<T::Node>,
) -> Result<(), DomError> {
    let attributes = tree.attributes(script);
    let content = tree.text_content(script);
    let external = script_src(tree, script).is_some();
    debug!("neutralizing {script:?} ({} attributes, external: {external})", attributes.len());

    strip_attributes(tree, script)?;
    if external {
        tree.set_attribute(script, "src", INERT_SRC)?;
    }
    tree.set_text_content(script, INERT_BODY)?;

    tree.insert_before(parent, script, reference)?;

    // the placeholder `src` would otherwise keep the first slot
    strip_attributes(tree, script)?;
    for (name, value) in &attributes {
        tree.set_attribute(script, name, value)?;
    }
    tree.set_text_content(script, &content)?;
    Ok(())
}

fn strip_attributes<T: LiveTree>(tree: &mut T, node: T::Node) -> Result<(), DomError> {
    for (name, _) in tree.attributes(node) {
        tree.remove_attribute(node, &name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Activation, Document, NodeId};
    use crate::host::LoadOutcome;

    fn connected_body(doc: &mut Document) -> NodeId {
        let root = doc.root();
        let body = doc.create_element("body");
        doc.append_child(root, body).unwrap();
        body
    }

    #[test]
    fn test_inline_script_does_not_run() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let script = doc.create_element("script");
        doc.set_text_content(script, "counter += 1").unwrap();

        insert_inert(&mut doc, body, script, None).unwrap();

        assert!(doc.effective_activations().is_empty());
        assert_eq!(
            doc.activations(),
            &[Activation::Inline { node: script, text: INERT_BODY.into() }]
        );
        assert_eq!(doc.outer_html(body), "<body><script>counter += 1</script></body>");
    }

    #[test]
    fn test_external_script_fetches_placeholder_only() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let script = doc.create_element("script");
        doc.set_attribute(script, "type", "module").unwrap();
        doc.set_attribute(script, "src", "app.js").unwrap();
        doc.set_attribute(script, "integrity", "sha384-x").unwrap();

        insert_inert(&mut doc, body, script, None).unwrap();

        assert_eq!(doc.pending_loads().collect::<Vec<_>>(), vec![(script, INERT_SRC)]);
        doc.drain_loads(|_| LoadOutcome::Loaded);
        assert!(doc.effective_activations().is_empty());
        assert_eq!(
            doc.attributes(script),
            vec![
                ("type".to_string(), "module".to_string()),
                ("src".to_string(), "app.js".to_string()),
                ("integrity".to_string(), "sha384-x".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_scripts_are_neutralized() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let section = doc.create_element("section");
        let wrapper = doc.create_element("div");
        let script = doc.create_element("script");
        doc.set_text_content(script, "nested()").unwrap();
        doc.append_child(wrapper, script).unwrap();
        doc.append_child(section, wrapper).unwrap();

        insert_inert(&mut doc, body, section, None).unwrap();

        assert!(doc.effective_activations().is_empty());
        assert!(doc.is_started(script));
        assert_eq!(
            doc.outer_html(body),
            "<body><section><div><script>nested()</script></div></section></body>"
        );
    }

    #[test]
    fn test_insert_before_reference_preserves_order() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let last = doc.create_element("footer");
        doc.append_child(body, last).unwrap();

        let list = doc.create_element("ul");
        for label in ["a", "b", "c"] {
            let li = doc.create_element("li");
            doc.set_text_content(li, label).unwrap();
            doc.append_child(list, li).unwrap();
        }
        insert_inert(&mut doc, body, list, Some(last)).unwrap();

        assert_eq!(
            doc.outer_html(body),
            "<body><ul><li>a</li><li>b</li><li>c</li></ul><footer></footer></body>"
        );
    }

    #[test]
    fn test_template_parent_redirects_to_content() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let template = doc.create_element("template");
        doc.append_child(body, template).unwrap();
        let script = doc.create_element("script");
        doc.set_text_content(script, "tpl()").unwrap();

        insert_inert(&mut doc, template, script, None).unwrap();

        let content = doc.template_content(template).unwrap();
        assert_eq!(doc.children(content), vec![script]);
        assert!(doc.children(template).is_empty());
        assert!(doc.activations().is_empty());
    }

    #[test]
    fn test_moving_an_attached_subtree() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let from = doc.create_element("aside");
        let to = doc.create_element("main");
        doc.append_child(body, from).unwrap();
        doc.append_child(body, to).unwrap();
        let script = doc.create_element("script");
        doc.set_text_content(script, "moved()").unwrap();
        insert_inert(&mut doc, from, script, None).unwrap();

        insert_inert(&mut doc, to, script, None).unwrap();

        assert!(doc.children(from).is_empty());
        assert_eq!(doc.children(to), vec![script]);
        assert!(doc.effective_activations().is_empty());
    }

    #[test]
    fn test_invalid_reference_is_reported() {
        let mut doc = Document::new();
        let body = connected_body(&mut doc);
        let stranger = doc.create_element("p");
        let child = doc.create_element("span");
        assert!(matches!(
            insert_inert(&mut doc, body, child, Some(stranger)),
            Err(DomError::InvalidSibling { .. })
        ));
    }
}
