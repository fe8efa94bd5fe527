//! Replicate JsonML snapshots onto a live DOM tree.
//!
//! This crate ties the workspace together: [`materialize`] turns JsonML into
//! detached live nodes, [`replicate_insert`] and [`replicate_at_path`] land
//! them without running any script and hand back the scripts to activate,
//! in order, with [`execute_scripts`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use webstrates::{execute_scripts, replicate_insert, Document, MaterializeOptions};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let value = json!(["div", ["script", "ready()"]]);
//!
//! let queue = replicate_insert(&mut doc, root, None, &value, &MaterializeOptions::default()).unwrap();
//! assert!(doc.effective_activations().is_empty());
//!
//! execute_scripts(&mut doc, queue, |_| {});
//! assert_eq!(doc.effective_activations().len(), 1);
//! ```

pub mod error;
pub mod materialize;
pub mod replicate;

pub use error::ReplicateError;
pub use materialize::{materialize, MaterializeOptions};
pub use replicate::{replicate_at_path, replicate_insert};

pub use webstrates_dom as dom;
pub use webstrates_dom::{execute_scripts, insert_inert, Document, LiveTree, LoadOutcome};
pub use webstrates_json_ml as json_ml;
pub use webstrates_util as util;
