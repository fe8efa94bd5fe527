/// Replace `&` and `"` with their HTML entities.
///
/// Only these two characters are touched, so the result is safe inside a
/// double-quoted attribute value and [`unescape`] can reverse it. Empty input
/// comes back unchanged.
///
/// # Examples
///
/// ```
/// use webstrates_util::strings::escape;
///
/// assert_eq!(escape("a & \"b\""), "a &amp; &quot;b&quot;");
/// assert_eq!(escape("<p>"), "<p>");
/// ```
pub fn escape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    // `&` first, otherwise the `&` of `&quot;` would be escaped again
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Reverse [`escape`].
///
/// `&quot;` is replaced before `&amp;` so that an escaped literal `&quot;`
/// (`&amp;quot;`) decodes to `&quot;` rather than `"`.
///
/// # Examples
///
/// ```
/// use webstrates_util::strings::unescape;
///
/// assert_eq!(unescape("a &amp; &quot;b&quot;"), "a & \"b\"");
/// assert_eq!(unescape("&amp;quot;"), "&quot;");
/// ```
pub fn unescape(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value.replace("&quot;", "\"").replace("&amp;", "&")
}
