use super::util::{is_name_char, is_name_start_char};

/// Replace every character that is illegal in a tag or attribute name with `_`.
///
/// The first character must be an ASCII letter, `_` or `:`; later characters
/// may additionally be digits, `-` or `.`. The output has exactly as many
/// characters as the input.
///
/// # Examples
///
/// ```
/// use webstrates_util::strings::sanitize;
///
/// assert_eq!(sanitize("data-id"), "data-id");
/// assert_eq!(sanitize("1st place"), "_st_place");
/// assert_eq!(sanitize("-x"), "_x");
/// ```
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if is_name_start_char(ch) || (index > 0 && is_name_char(ch)) {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
