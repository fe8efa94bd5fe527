//! The capabilities a live tree must expose.
//!
//! Every operation in this crate takes the tree explicitly as `&mut impl
//! LiveTree` / `&impl LiveTree`; nothing reaches for an ambient document.

use std::fmt::Debug;

use crate::error::DomError;

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// How a resource fetch ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Callback fired once when a resource-bearing node finishes loading, with
/// either outcome.
pub type SettleHandler<T> = Box<dyn FnOnce(&mut T, LoadOutcome)>;

/// A mutable, rendered node tree.
///
/// Implementations may have side effects on insertion (a browser runs a
/// script element as soon as it is connected); the operations in
/// [`crate::insert`] and [`crate::execute`] exist to control them.
pub trait LiveTree {
    type Node: Copy + Eq + Debug;

    /// Element name, `None` for non-element nodes.
    fn tag_name(&self, node: Self::Node) -> Option<&str>;

    fn namespace(&self, node: Self::Node) -> Option<&str>;

    /// Attributes in the host's enumeration order.
    fn attributes(&self, node: Self::Node) -> Vec<(String, String)>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    fn remove_attribute(&mut self, node: Self::Node, name: &str) -> Result<(), DomError>;

    /// Concatenated text of the node and its descendants.
    fn text_content(&self, node: Self::Node) -> String;

    /// Replace all children with a single text node (none for empty text).
    fn set_text_content(&mut self, node: Self::Node, text: &str) -> Result<(), DomError>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` is part of the rendered document. Nodes under a
    /// template's content container never are.
    fn is_connected(&self, node: Self::Node) -> bool;

    /// Direct children. Template elements report their own children here,
    /// not those of their content container.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn first_child(&self, node: Self::Node) -> Option<Self::Node> {
        self.children(node).first().copied()
    }

    /// Content container of a template-like node.
    fn template_content(&self, node: Self::Node) -> Option<Self::Node>;

    /// Insert `child` before `reference`, or append when `reference` is
    /// `None`. An attached `child` is moved.
    fn insert_before(
        &mut self,
        parent: Self::Node,
        child: Self::Node,
        reference: Option<Self::Node>,
    ) -> Result<(), DomError>;

    fn remove_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), DomError>;

    fn create_element_ns(&mut self, namespace: Option<&str>, name: &str) -> Self::Node;

    fn create_text(&mut self, text: &str) -> Self::Node;

    /// Register `handler` to run when `node` finishes loading its resource,
    /// successfully or not.
    fn on_settled(&mut self, node: Self::Node, handler: SettleHandler<Self>)
    where
        Self: Sized;
}

/// Whether `node` is a script-like element.
pub fn is_script<T: LiveTree>(tree: &T, node: T::Node) -> bool {
    tree.tag_name(node)
        .is_some_and(|name| name.eq_ignore_ascii_case("script"))
}

/// The resource reference of a script, matching `src` in any case.
pub fn script_src<T: LiveTree>(tree: &T, node: T::Node) -> Option<String> {
    tree.attributes(node)
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("src"))
        .map(|(_, value)| value)
}

/// Whether `node` keeps its children in a separate content container.
pub fn is_template<T: LiveTree>(tree: &T, node: T::Node) -> bool {
    tree.template_content(node).is_some()
}
