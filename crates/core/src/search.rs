//! Title/description search helpers.
//!
//! The repository matches with `ILIKE`, so user input is escaped here and
//! wrapped in `%...%` before it is bound as a query parameter.

/// Escape character used in the `ILIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and the escape character itself so they match literally.
///
/// # Examples
///
/// ```
/// use catalog_core::search::escape_like;
/// assert_eq!(escape_like("100%"), "100\\%");
/// assert_eq!(escape_like("snake_case"), "snake\\_case");
/// ```
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a substring pattern for `ILIKE` from a raw search query.
///
/// Returns `None` for an empty query. Whitespace is kept as typed: a query
/// of `" "` searches for titles or descriptions containing a space.
///
/// # Examples
///
/// ```
/// use catalog_core::search::contains_pattern;
/// assert_eq!(contains_pattern("matrix"), Some("%matrix%".to_string()));
/// assert_eq!(contains_pattern(""), None);
/// ```
pub fn contains_pattern(query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    Some(format!("%{}%", escape_like(query)))
}
