/// Lowercases an identifier one code point at a time, independent of locale.
///
/// No final-sigma rule as in `str::to_lowercase`: a segment lowercases the same
/// wherever it sits in the identifier.
pub fn normalize(identifier: &str) -> String {
    identifier.chars().flat_map(char::to_lowercase).collect()
}

/// Splits a normalized identifier on `.`.
///
/// Trailing empty segments are dropped, so `"a.b."` yields `["a", "b"]` and
/// `"."` yields nothing. Leading and interior empty segments are kept.
pub fn segments(normalized: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = normalized.split('.').collect();
    while parts.last().is_some_and(|s| s.is_empty()) {
        parts.pop();
    }
    parts
}

/// The candidate short form of a normalized identifier, if it has one.
pub fn last_segment(normalized: &str) -> Option<&str> {
    segments(normalized).last().copied()
}
