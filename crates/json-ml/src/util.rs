use serde_json::Value;

use crate::types::{Path, PathStep};
use crate::PathError;

/// Convert a wire path (a JSON array of indices and attribute names) into
/// typed steps.
///
/// # Errors
///
/// - `PathError::NotAnArray` - the value is not an array
/// - `PathError::InvalidStep` - a step is neither a non-negative integer nor a string
/// - `PathError::AttrNotTerminal` - a string step appears before the last position
pub fn parse_path(value: &Value) -> Result<Path, PathError> {
    let steps = value.as_array().ok_or(PathError::NotAnArray)?;
    let last = steps.len().saturating_sub(1);
    steps
        .iter()
        .enumerate()
        .map(|(position, step)| match step {
            Value::String(name) if position == last => Ok(PathStep::Attr(name.clone())),
            Value::String(_) => Err(PathError::AttrNotTerminal(position)),
            Value::Number(n) => n
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .map(PathStep::Index)
                .ok_or(PathError::InvalidStep(position)),
            _ => Err(PathError::InvalidStep(position)),
        })
        .collect()
}

/// Format typed steps back into a wire path.
pub fn format_path(path: &[PathStep]) -> Value {
    Value::Array(
        path.iter()
            .map(|step| match step {
                PathStep::Index(i) => Value::from(*i),
                PathStep::Attr(name) => Value::from(name.as_str()),
            })
            .collect(),
    )
}

/// Check if a path points to the root node.
pub fn is_root(path: &[PathStep]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a strict prefix of `child`.
pub fn is_child(parent: &[PathStep], child: &[PathStep]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns an error if the path has no parent (is empty/root).
pub fn parent(path: &[PathStep]) -> Result<Path, PathError> {
    match path.split_last() {
        Some((_, head)) => Ok(head.to_vec()),
        None => Err(PathError::NoParent),
    }
}

/// The attribute name addressed by a path, if it ends in an attribute step.
pub fn attribute_name(path: &[PathStep]) -> Option<&str> {
    path.last()?.as_attr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_path() {
        let path = parse_path(&json!([2, 3, "class"])).unwrap();
        assert_eq!(
            path,
            vec![PathStep::Index(2), PathStep::Index(3), PathStep::Attr("class".into())]
        );
        assert_eq!(parse_path(&json!([])).unwrap(), Vec::<PathStep>::new());
    }

    #[test]
    fn test_parse_path_errors() {
        assert_eq!(parse_path(&json!("2/3")), Err(PathError::NotAnArray));
        assert_eq!(parse_path(&json!([2, -1])), Err(PathError::InvalidStep(1)));
        assert_eq!(parse_path(&json!([1.5])), Err(PathError::InvalidStep(0)));
        assert_eq!(parse_path(&json!([null])), Err(PathError::InvalidStep(0)));
        assert_eq!(parse_path(&json!(["id", 2])), Err(PathError::AttrNotTerminal(0)));
    }

    #[test]
    fn test_format_path_inverts_parse() {
        let wire = json!([2, 5, "href"]);
        assert_eq!(format_path(&parse_path(&wire).unwrap()), wire);
    }

    #[test]
    fn test_parent_and_children() {
        let path = vec![PathStep::Index(2), PathStep::Index(4)];
        assert_eq!(parent(&path).unwrap(), vec![PathStep::Index(2)]);
        assert_eq!(parent(&[]), Err(PathError::NoParent));
        assert!(is_child(&path[..1], &path));
        assert!(!is_child(&path, &path));
        assert!(!is_child(&path, &path[..1]));
        assert!(is_root(&[]));
        assert!(!is_root(&path));
    }

    #[test]
    fn test_attribute_name() {
        assert_eq!(attribute_name(&[PathStep::Index(2), "src".into()]), Some("src"));
        assert_eq!(attribute_name(&[PathStep::Index(2)]), None);
        assert_eq!(attribute_name(&[]), None);
    }
}
