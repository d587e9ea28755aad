//! Space substitution and code point formatting.

use std::fmt::Write;

/// Replace every ASCII space in `text` with `sequence`.
///
/// Consecutive spaces yield adjacent copies of `sequence`; an empty `sequence`
/// deletes the spaces. Text without spaces is returned unchanged.
pub fn substitute(text: &str, sequence: &str) -> String {
    text.split(' ').collect::<Vec<_>>().join(sequence)
}

/// Format each UTF-16 code unit of `text` as an upper-case `\uXXXX` escape.
///
/// Characters outside the BMP produce two escapes (their surrogate pair), so the
/// output is always six bytes per UTF-16 unit.
pub fn code_point_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        let _ = write!(out, "\\u{:04X}", unit);
    }
    out
}

/// Number of ASCII spaces in `text`.
pub fn count_spaces(text: &str) -> usize {
    text.bytes().filter(|b| *b == b' ').count()
}
