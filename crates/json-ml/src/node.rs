//! Accessors for the slots of a JsonML node.
//!
//! An element is `[tag, attrs?, ...children]`; a text leaf is a plain string.

use serde_json::{Map, Value};

use crate::types::PathStep;

/// Slot holding the tag name.
pub const TAG_SLOT: usize = 0;

/// Slot holding the (optional) attribute map.
pub const ATTRIBUTES_SLOT: usize = 1;

pub fn is_text(node: &Value) -> bool {
    node.is_string()
}

pub fn is_element(node: &Value) -> bool {
    tag_name(node).is_some()
}

pub fn tag_name(node: &Value) -> Option<&str> {
    node.as_array()?.get(TAG_SLOT)?.as_str()
}

pub fn attributes(node: &Value) -> Option<&Map<String, Value>> {
    node.as_array()?.get(ATTRIBUTES_SLOT)?.as_object()
}

/// Array slot of the first child: `2` when the node carries an attribute
/// map, `1` otherwise.
pub fn first_child_index(node: &Value) -> usize {
    if attributes(node).is_some() {
        ATTRIBUTES_SLOT + 1
    } else {
        ATTRIBUTES_SLOT
    }
}

/// The child nodes of an element; empty for text leaves.
pub fn children(node: &Value) -> &[Value] {
    match node.as_array() {
        Some(arr) => arr.get(first_child_index(node)..).unwrap_or(&[]),
        None => &[],
    }
}

/// Path step addressing the `logical`-th child of `node`.
pub fn child_step(node: &Value, logical: usize) -> PathStep {
    PathStep::Index(first_child_index(node) + logical)
}
