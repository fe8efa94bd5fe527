use std::fmt::Debug;

use thiserror::Error;

/// Host-level failure of a tree operation.
///
/// These are contract violations by the caller (moving a node under its own
/// descendant, inserting before a node that is not a child, ...). Nodes are
/// carried in their `Debug` form so the error stays independent of the host's
/// node type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("unknown node {0}")]
    UnknownNode(String),
    #[error("node {0} cannot have children")]
    InvalidParent(String),
    #[error("{reference} is not a child of {parent}")]
    InvalidSibling { parent: String, reference: String },
    #[error("inserting {child} into {parent} would create a cycle")]
    CycleDetected { parent: String, child: String },
    #[error("node {0} is not an element")]
    NotAnElement(String),
    #[error("the document node cannot be inserted or removed")]
    DocumentNode,
}

impl DomError {
    pub(crate) fn unknown(node: impl Debug) -> Self {
        DomError::UnknownNode(format!("{node:?}"))
    }

    pub(crate) fn invalid_parent(node: impl Debug) -> Self {
        DomError::InvalidParent(format!("{node:?}"))
    }

    pub(crate) fn invalid_sibling(parent: impl Debug, reference: impl Debug) -> Self {
        DomError::InvalidSibling {
            parent: format!("{parent:?}"),
            reference: format!("{reference:?}"),
        }
    }

    pub(crate) fn cycle(parent: impl Debug, child: impl Debug) -> Self {
        DomError::CycleDetected {
            parent: format!("{parent:?}"),
            child: format!("{child:?}"),
        }
    }

    pub(crate) fn not_an_element(node: impl Debug) -> Self {
        DomError::NotAnElement(format!("{node:?}"))
    }
}
