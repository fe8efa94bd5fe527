//! Building live nodes from JsonML.

use log::trace;
use serde_json::Value;
use webstrates_dom::{LiveTree, HTML_NAMESPACE, SVG_NAMESPACE};
use webstrates_json_ml::node::{attributes, children, tag_name};
use webstrates_util::{sanitize, unescape, IdGenerator, IdOptions};

use crate::error::ReplicateError;

/// Options for [`materialize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Attribute that receives a fresh identifier on every element that
    /// does not already carry it. `None` (the default) adds nothing.
    pub id_attribute: Option<String>,
    /// Size and alphabet of minted identifiers.
    pub id_options: IdOptions,
    /// Seed for the identifier generator, for reproducible output.
    pub seed: Option<[u8; 32]>,
}

/// Build a detached live subtree mirroring `value`.
///
/// Tag and attribute names go through [`sanitize`] (attribute names of HTML
/// elements are lowercased too), string attribute values through
/// [`unescape`]; other scalar values are stringified. Children of a template
/// go into its content container. Elements take
/// the namespace named by their `xmlns` attribute, switch to SVG at `svg`
/// and otherwise inherit their parent's (HTML at the root).
///
/// Nothing is connected, so no script starts. Land the result with
/// [`webstrates_dom::insert_inert`].
pub fn materialize<T: LiveTree>(
    tree: &mut T,
    value: &Value,
    options: &MaterializeOptions,
) -> Result<T::Node, ReplicateError> {
    let mut ids = match options.id_attribute {
        Some(_) => Some(IdGenerator::new(options.id_options.clone(), options.seed)?),
        None => None,
    };

    let mut root = None;
    let mut work: Vec<(&Value, Option<T::Node>, String)> =
        vec![(value, None, HTML_NAMESPACE.to_string())];
    while let Some((value, parent, inherited)) = work.pop() {
        let node = match value {
            Value::String(text) => tree.create_text(text),
            Value::Array(_) => {
                let namespace = namespace_of(value, &inherited);
                let node = element(tree, value, &namespace, options, ids.as_mut())?;
                work.extend(
                    children(value)
                        .iter()
                        .rev()
                        .map(|child| (child, Some(node), namespace.clone())),
                );
                node
            }
            other => return Err(ReplicateError::InvalidNode(other.to_string())),
        };
        match parent {
            Some(parent) => {
                let parent = tree.template_content(parent).unwrap_or(parent);
                tree.insert_before(parent, node, None)?
            }
            None => root = Some(node),
        }
    }
    root.ok_or_else(|| ReplicateError::InvalidNode(value.to_string()))
}

fn namespace_of(value: &Value, inherited: &str) -> String {
    if let Some(xmlns) = attributes(value)
        .and_then(|attrs| attrs.get("xmlns"))
        .and_then(Value::as_str)
    {
        return xmlns.to_string();
    }
    match tag_name(value) {
        Some(tag) if tag.eq_ignore_ascii_case("svg") => SVG_NAMESPACE.to_string(),
        _ => inherited.to_string(),
    }
}

fn element<T: LiveTree>(
    tree: &mut T,
    value: &Value,
    namespace: &str,
    options: &MaterializeOptions,
    ids: Option<&mut IdGenerator>,
) -> Result<T::Node, ReplicateError> {
    let tag = tag_name(value)
        .map(sanitize)
        .filter(|tag| !tag.is_empty())
        .ok_or_else(|| ReplicateError::InvalidNode(value.to_string()))?;
    let node = tree.create_element_ns(Some(namespace), &tag);
    trace!("materialized <{tag}> as {node:?}");

    for (name, raw) in attributes(value).into_iter().flatten() {
        let text = match raw {
            Value::String(s) => unescape(s),
            Value::Array(_) | Value::Object(_) => {
                return Err(ReplicateError::InvalidAttribute { name: name.clone() })
            }
            scalar => scalar.to_string(),
        };
        let mut name = sanitize(name);
        if namespace == HTML_NAMESPACE {
            name.make_ascii_lowercase();
        }
        tree.set_attribute(node, &name, &text)?;
    }

    if let (Some(name), Some(ids)) = (&options.id_attribute, ids) {
        if tree.attribute(node, name).is_none() {
            let id = ids.next_id();
            tree.set_attribute(node, name, &id)?;
        }
    }
    Ok(node)
}
