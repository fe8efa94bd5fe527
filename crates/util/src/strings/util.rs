/// A predicate function for checking character properties.
pub type CharPredicate = fn(char) -> bool;

/// Check if a character may start a tag or attribute name.
///
/// Only ASCII letters, `_` and `:` qualify.
///
/// # Examples
///
/// ```
/// use webstrates_util::strings::is_name_start_char;
///
/// assert!(is_name_start_char('a'));
/// assert!(is_name_start_char(':'));
/// assert!(!is_name_start_char('1'));
/// assert!(!is_name_start_char('é'));
/// ```
pub fn is_name_start_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == ':'
}

/// Check if a character may appear after the first position of a name.
///
/// # Examples
///
/// ```
/// use webstrates_util::strings::is_name_char;
///
/// assert!(is_name_char('a'));
/// assert!(is_name_char('-'));
/// assert!(is_name_char('7'));
/// assert!(!is_name_char(' '));
/// ```
pub fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch) || ch.is_ascii_digit() || ch == '-' || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_chars() {
        for ch in ['a', 'z', 'A', 'Z', '_', ':'] {
            assert!(is_name_start_char(ch), "{ch:?}");
        }
        for ch in ['0', '9', '-', '.', ' ', '$', 'ß'] {
            assert!(!is_name_start_char(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_continuation_chars() {
        for ch in ['a', '_', ':', '0', '9', '-', '.'] {
            assert!(is_name_char(ch), "{ch:?}");
        }
        for ch in [' ', '/', '"', '&', '<', 'ü'] {
            assert!(!is_name_char(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_predicates_as_fn_pointers() {
        let preds: [CharPredicate; 2] = [is_name_start_char, is_name_char];
        assert!(preds.iter().all(|p| p('x')));
    }
}
