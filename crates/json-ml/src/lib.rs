//! JsonML path addressing.
//!
//! A JsonML snapshot is a `serde_json::Value` shaped as
//! `[tag, {attr: value}?, ...children]` with plain strings as text leaves.
//! A path is a sequence of [`PathStep`]s: index steps descend into array
//! slots, and a trailing attribute step names a property of the node reached
//! so far.
//!
//! # Example
//!
//! ```
//! use webstrates_json_ml::{parse_path, resolve, resolve_attribute};
//! use serde_json::json;
//!
//! let doc = json!(["body", {"class": "page"}, ["p", {}, "hello"]]);
//!
//! let path = parse_path(&json!([2, 2])).unwrap();
//! assert_eq!(resolve(&doc, &path), Some(&json!("hello")));
//!
//! // Attribute targets never resolve to a node...
//! let attr = parse_path(&json!(["class"])).unwrap();
//! assert_eq!(resolve(&doc, &attr), None);
//! // ...but can be read from the attribute map.
//! assert_eq!(resolve_attribute(&doc, &attr), Some("page"));
//! ```

use thiserror::Error;

pub mod node;
pub mod resolve;
pub mod types;
pub mod util;
pub mod validate;

pub use resolve::{resolve, resolve_attribute, resolve_mut};
pub use types::{Path, PathStep};
pub use util::{attribute_name, format_path, is_child, is_root, parent, parse_path};
pub use validate::{validate_path, ValidationError, MAX_PATH_LENGTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is not an array")]
    NotAnArray,
    #[error("invalid path step at position {0}")]
    InvalidStep(usize),
    #[error("attribute step at position {0} is not the last step")]
    AttrNotTerminal(usize),
    #[error("path has no parent")]
    NoParent,
}
