//! Cheap boolean subsequence check, usable as a pre-filter before scoring.

/// Case-insensitive equality of two characters
#[inline]
pub(crate) fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// True if every character of `pattern` occurs in `text`, in order
pub(crate) fn is_subsequence(pattern: &[char], text: &[char]) -> bool {
    let mut remaining = text.iter();
    pattern
        .iter()
        .all(|&p| remaining.any(|&t| chars_eq_ignore_case(p, t)))
}

/// Returns true if each character of `pattern` is found, in order and
/// case-insensitively, within `text`.
///
/// An empty pattern or an empty text never matches. This carries no scoring
/// and is considerably cheaper than [`MatchEngine::align`](crate::MatchEngine::align).
///
/// ```
/// use fuzzy_rank::matching::prefilter::fuzzy_contains;
///
/// assert!(fuzzy_contains("SVisualLoggerLogsList.h", "lll"));
/// assert!(!fuzzy_contains("SVisualLoggerLogsList.h", "hl"));
/// assert!(!fuzzy_contains("anything", ""));
/// ```
#[must_use]
pub fn fuzzy_contains(text: &str, pattern: &str) -> bool {
    if pattern.is_empty() || text.is_empty() {
        return false;
    }

    let mut remaining = text.chars();
    pattern
        .chars()
        .all(|p| remaining.any(|t| chars_eq_ignore_case(p, t)))
}
