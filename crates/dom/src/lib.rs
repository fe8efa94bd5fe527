//! Script-safe DOM insertion.
//!
//! A browser starts a script element the moment it is connected, and never
//! again afterwards. This crate splits applying a remote tree change into two
//! phases built on that rule:
//!
//! 1. [`insert_inert`] lands a subtree with every script neutralized (each
//!    one is started on placeholder content, then gets its real attributes
//!    and text back).
//! 2. [`execute_scripts`] later activates the collected scripts strictly in
//!    order by swapping each for a fresh copy, waiting for external
//!    resources to load (or fail) before moving on.
//!
//! The live tree is abstracted as [`LiveTree`]; [`Document`] is an
//! in-memory implementation that models script start-up and resource loads.
//!
//! # Example
//!
//! ```
//! use webstrates_dom::{collect_scripts, execute_scripts, insert_inert, Document, LiveTree};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let script = doc.create_element("script");
//! doc.set_text_content(script, "init()").unwrap();
//!
//! insert_inert(&mut doc, root, script, None).unwrap();
//! assert!(doc.effective_activations().is_empty());
//!
//! let queue = collect_scripts(&doc, root);
//! execute_scripts(&mut doc, queue, |_| {});
//! assert_eq!(doc.effective_activations().len(), 1);
//! ```

pub mod document;
pub mod error;
pub mod execute;
pub mod host;
pub mod insert;
pub mod walk;

pub use document::{Activation, Document, NodeId};
pub use error::DomError;
pub use execute::execute_scripts;
pub use host::{
    is_script, is_template, LiveTree, LoadOutcome, SettleHandler, HTML_NAMESPACE, SVG_NAMESPACE,
};
pub use insert::{insert_inert, INERT_BODY, INERT_SRC};
pub use walk::{child_nodes, collect_scripts, for_each};
