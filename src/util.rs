//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_width` terminal columns.
///
/// Wide characters (CJK, emoji) count as two columns. When truncation
/// happens the last column is replaced with `…`.
///
/// # Examples
///
/// ```
/// use netwatch::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("hello world", 5), "hell…");
/// assert_eq!(truncate_to_width("hello", 10), "hello");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Replace control characters so a value renders on a single line
pub fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
