//! webstrates-util - small helpers shared by the webstrates crates.
//!
//! - [`strings`]: turning arbitrary text into legal tag/attribute names and
//!   the reversible `&`/`"` escaping used for attribute values.
//! - [`random`]: short random identifiers for newly created nodes.

pub mod random;
pub mod strings;

// Re-exports for convenience
pub use random::{random_string, IdError, IdGenerator, IdOptions, DEFAULT_ALPHABET, DEFAULT_SIZE};
pub use strings::{escape, is_name_char, is_name_start_char, sanitize, unescape, CharPredicate};
