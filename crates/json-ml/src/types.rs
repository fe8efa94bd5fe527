//! Type definitions for JsonML paths.

use std::fmt;

/// A step in a JsonML path.
///
/// `Index` descends into the array slot of a node (`0` is the tag name, `1`
/// the attribute map, `2..` the children). `Attr` names an attribute and is
/// only meaningful as the last step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Index(usize),
    Attr(String),
}

/// A JsonML path.
pub type Path = Vec<PathStep>;

impl PathStep {
    pub fn is_attr(&self) -> bool {
        matches!(self, PathStep::Attr(_))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathStep::Index(i) => Some(*i),
            PathStep::Attr(_) => None,
        }
    }

    pub fn as_attr(&self) -> Option<&str> {
        match self {
            PathStep::Attr(name) => Some(name),
            PathStep::Index(_) => None,
        }
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

impl From<&str> for PathStep {
    fn from(name: &str) -> Self {
        PathStep::Attr(name.to_string())
    }
}

impl From<String> for PathStep {
    fn from(name: String) -> Self {
        PathStep::Attr(name)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "{i}"),
            PathStep::Attr(name) => write!(f, "@{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_conversions() {
        assert_eq!(PathStep::from(3usize), PathStep::Index(3));
        assert_eq!(PathStep::from("class"), PathStep::Attr("class".to_string()));
        assert_eq!(PathStep::from(String::from("id")), PathStep::Attr("id".to_string()));
    }

    #[test]
    fn test_step_accessors() {
        let idx = PathStep::Index(2);
        let attr = PathStep::Attr("src".to_string());
        assert!(!idx.is_attr());
        assert!(attr.is_attr());
        assert_eq!(idx.as_index(), Some(2));
        assert_eq!(attr.as_index(), None);
        assert_eq!(attr.as_attr(), Some("src"));
        assert_eq!(idx.as_attr(), None);
    }

    #[test]
    fn test_step_display() {
        assert_eq!(PathStep::Index(4).to_string(), "4");
        assert_eq!(PathStep::from("href").to_string(), "@href");
    }
}
