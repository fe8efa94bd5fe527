//! Pre-order traversal of a live tree.

use std::collections::VecDeque;

use crate::host::{is_script, LiveTree};

/// Children of `node` as they serialize: for template-like nodes, the
/// children of the content container.
pub fn child_nodes<T: LiveTree>(tree: &T, node: T::Node) -> Vec<T::Node> {
    match tree.template_content(node) {
        Some(content) => tree.children(content),
        None => tree.children(node),
    }
}

/// Call `visit` for `root` and then for every descendant, pre-order.
///
/// Template-like nodes are walked through their content container.
pub fn for_each<T, F>(tree: &T, root: T::Node, mut visit: F)
where
    T: LiveTree,
    F: FnMut(T::Node),
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        stack.extend(child_nodes(tree, node).into_iter().rev());
    }
}

/// Every script under `root` (inclusive) in document order, ready to be
/// handed to [`crate::execute::execute_scripts`].
///
/// Template content is skipped: it is never rendered, so its scripts must
/// not run.
pub fn collect_scripts<T: LiveTree>(tree: &T, root: T::Node) -> VecDeque<T::Node> {
    let mut scripts = VecDeque::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if is_script(tree, node) {
            scripts.push_back(node);
        }
        stack.extend(tree.children(node).into_iter().rev());
    }
    scripts
}
