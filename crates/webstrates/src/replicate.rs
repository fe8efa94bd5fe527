//! Applying a JsonML insertion to a live tree.
//!
//! Both entry points return the scripts of the new subtree in document
//! order. Nothing has run yet at that point; hand the queue to
//! [`webstrates_dom::execute_scripts`] when the batch should activate.

use std::collections::VecDeque;

use log::debug;
use serde_json::Value;
use webstrates_dom::{child_nodes, collect_scripts, insert_inert, LiveTree};
use webstrates_json_ml::node::first_child_index;
use webstrates_json_ml::{format_path, resolve, validate_path, PathError, PathStep};

use crate::error::ReplicateError;
use crate::materialize::{materialize, MaterializeOptions};

/// Materialize `value` and insert it inertly into `parent` before
/// `reference` (or at the end).
///
/// Nothing is queued when the subtree lands outside the rendered document,
/// such as anywhere inside template content.
pub fn replicate_insert<T: LiveTree>(
    tree: &mut T,
    parent: T::Node,
    reference: Option<T::Node>,
    value: &Value,
    options: &MaterializeOptions,
) -> Result<VecDeque<T::Node>, ReplicateError> {
    let node = materialize(tree, value, options)?;
    insert_inert(tree, parent, node, reference)?;
    if !tree.is_connected(node) {
        debug!("replicated {node:?} outside the rendered document");
        return Ok(VecDeque::new());
    }
    let scripts = collect_scripts(tree, node);
    debug!(
        "replicated {node:?} into {parent:?}, {} scripts queued",
        scripts.len()
    );
    Ok(scripts)
}

/// Insert the node found at `path` in `snapshot` at the matching position
/// under `root`, the live counterpart of the snapshot root.
///
/// `snapshot` already contains the new node; the live tree mirrors it
/// everywhere else.
pub fn replicate_at_path<T: LiveTree>(
    tree: &mut T,
    root: T::Node,
    snapshot: &Value,
    path: &[PathStep],
    options: &MaterializeOptions,
) -> Result<VecDeque<T::Node>, ReplicateError> {
    validate_path(path)?;
    let shown = |path: &[PathStep]| format_path(path).to_string();

    let (last, parent_path) = path.split_last().ok_or(PathError::NoParent)?;
    let PathStep::Index(slot) = last else {
        return Err(ReplicateError::AttributeTarget(shown(path)));
    };
    let value = resolve(snapshot, path).ok_or_else(|| ReplicateError::UnresolvedPath(shown(path)))?;
    let parent_value = resolve(snapshot, parent_path)
        .ok_or_else(|| ReplicateError::UnresolvedPath(shown(parent_path)))?;
    let position = slot
        .checked_sub(first_child_index(parent_value))
        .ok_or_else(|| ReplicateError::NotAChild(shown(path)))?;

    let parent = live_node(tree, root, snapshot, parent_path)
        .ok_or_else(|| ReplicateError::TreeMismatch(shown(parent_path)))?;
    let siblings = child_nodes(tree, parent);
    if position > siblings.len() {
        return Err(ReplicateError::TreeMismatch(shown(path)));
    }
    let reference = siblings.get(position).copied();
    replicate_insert(tree, parent, reference, value, options)
}

/// Follow `path` through `snapshot` and the live tree in lockstep.
fn live_node<T: LiveTree>(
    tree: &T,
    root: T::Node,
    snapshot: &Value,
    path: &[PathStep],
) -> Option<T::Node> {
    let mut value = snapshot;
    let mut live = root;
    for step in path {
        let slot = step.as_index()?;
        let logical = slot.checked_sub(first_child_index(value))?;
        live = child_nodes(tree, live).get(logical).copied()?;
        value = value.as_array()?.get(slot)?;
    }
    Some(live)
}
