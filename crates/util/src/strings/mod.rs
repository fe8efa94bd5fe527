//! String utilities.
//!
//! Name sanitizing for synthesized tags and attributes, and the reversible
//! two-character escaping used for attribute storage.

mod escape;
mod sanitize;
mod util;

pub use escape::{escape, unescape};
pub use sanitize::sanitize;
pub use util::{is_name_char, is_name_start_char, CharPredicate};
