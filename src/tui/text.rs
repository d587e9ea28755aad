//! Text layout helpers: hard wrapping, cursor placement, truncation.

use unicode_width::UnicodeWidthChar;

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Split `text` into display lines of at most `width` terminal columns, breaking at
/// newlines first. Spaces are kept as typed. Always returns at least one (possibly empty) line.
pub(crate) fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut col = 0;
        for c in raw.chars() {
            let w = char_width(c);
            // A char wider than the pane still gets a row of its own.
            if col > 0 && col + w > width {
                lines.push(std::mem::take(&mut line));
                col = 0;
            }
            line.push(c);
            col += w;
        }
        lines.push(line);
    }
    lines
}

/// (line, display column) of the byte offset `cursor` within `hard_wrap(text, width)`.
///
/// A cursor sitting exactly at the end of a full line is placed at the start of the next
/// wrapped row, matching where the next typed char will appear.
pub(crate) fn cursor_position(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let before = &text[..text.floor_char_boundary(cursor.min(text.len()))];
    let mut line = 0;
    let mut col = 0;
    for c in before.chars() {
        if c == '\n' {
            line += 1;
            col = 0;
            continue;
        }
        let w = char_width(c);
        if col > 0 && col + w > width {
            line += 1;
            col = 0;
        }
        col += w;
    }
    if col >= width { (line + 1, 0) } else { (line, col) }
}

/// Word-wrap for read-only previews (textwrap breaks long words when needed).
pub(crate) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|s| s.into_owned())
        .collect()
}

pub(crate) fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars()
                .take(max_width.saturating_sub(1))
                .collect::<String>()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_wrap_empty() {
        assert_eq!(hard_wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn hard_wrap_splits_long_lines_and_newlines() {
        assert_eq!(hard_wrap("abcdef\ng", 4), vec!["abcd", "ef", "g"]);
        assert_eq!(hard_wrap("a\n\nb", 4), vec!["a", "", "b"]);
    }

    #[test]
    fn cursor_at_start_and_end() {
        assert_eq!(cursor_position("", 0, 10), (0, 0));
        assert_eq!(cursor_position("hello", 5, 10), (0, 5));
    }

    #[test]
    fn cursor_after_newline() {
        assert_eq!(cursor_position("ab\ncd", 3, 10), (1, 0));
        assert_eq!(cursor_position("ab\n\ncd", 5, 10), (2, 1));
    }

    #[test]
    fn cursor_wraps_with_long_line() {
        // "abcdef" at width 4 -> "abcd" / "ef"
        assert_eq!(cursor_position("abcdef", 6, 4), (1, 2));
        assert_eq!(cursor_position("abcd", 4, 4), (1, 0));
        assert_eq!(cursor_position("abcdef\nx", 8, 4), (2, 1));
    }

    #[test]
    fn cursor_counts_chars_not_bytes() {
        let s = "caf\u{e9}";
        assert_eq!(cursor_position(s, s.len(), 10), (0, 4));
    }

    #[test]
    fn hard_wrap_measures_wide_chars_in_columns() {
        let text = "你好".repeat(3);
        assert_eq!(hard_wrap(&text, 4), vec!["你好", "你好", "你好"]);
        // Odd width: a wide char never straddles the edge.
        assert_eq!(hard_wrap("你好你", 5), vec!["你好", "你"]);
    }

    #[test]
    fn hard_wrap_zero_width_chars_take_no_column() {
        assert_eq!(hard_wrap("a\u{200B}b\u{2060}c", 3), vec!["a\u{200B}b\u{2060}c"]);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let s = "你好你";
        assert_eq!(cursor_position(s, s.len(), 4), (1, 2));
        assert_eq!(cursor_position(s, "你".len(), 4), (0, 2));
        assert_eq!(cursor_position("你好", "你好".len(), 4), (1, 0));
    }

    #[test]
    fn wrapped_lines_breaks_words_without_spaces() {
        let lines = wrapped_lines("a\u{2003}b\u{2003}c", 2);
        assert!(lines.len() >= 2);
        assert!(wrapped_lines("anything", 0).is_empty());
    }

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        let result = truncate_with_ellipsis("hello world", 8);
        assert_eq!(result.chars().count(), 8);
        assert!(result.ends_with('…'));
    }
}
