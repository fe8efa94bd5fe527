use thiserror::Error;
use webstrates_dom::DomError;
use webstrates_json_ml::{PathError, ValidationError};
use webstrates_util::IdError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplicateError {
    #[error("not a JsonML node: {0}")]
    InvalidNode(String),
    #[error("attribute {name:?} has a non-scalar value")]
    InvalidAttribute { name: String },
    #[error("path {0} does not resolve in the snapshot")]
    UnresolvedPath(String),
    #[error("path {0} targets an attribute, not a node")]
    AttributeTarget(String),
    #[error("path {0} addresses a tag or attribute slot, not a child")]
    NotAChild(String),
    #[error("live tree does not mirror the snapshot at {0}")]
    TreeMismatch(String),
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Id(#[from] IdError),
}
