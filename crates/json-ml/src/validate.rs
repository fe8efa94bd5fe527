//! Validation functions for JsonML paths.

use thiserror::Error;

use crate::types::PathStep;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Path too long")]
    PathTooLong,
    #[error("Attribute step at position {0} is not the last step")]
    AttrNotTerminal(usize),
}

/// Validate a path.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds the maximum length (256 steps)
/// - An attribute step appears anywhere but the last position
///
/// # Example
///
/// ```
/// use webstrates_json_ml::{validate_path, PathStep};
///
/// validate_path(&[PathStep::Index(2), PathStep::Attr("id".into())]).unwrap();
/// validate_path(&[PathStep::Attr("id".into()), PathStep::Index(2)]).unwrap_err();
/// ```
pub fn validate_path(path: &[PathStep]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    let last = path.len().saturating_sub(1);
    if let Some(position) = path.iter().position(PathStep::is_attr) {
        if position != last {
            return Err(ValidationError::AttrNotTerminal(position));
        }
    }
    Ok(())
}
