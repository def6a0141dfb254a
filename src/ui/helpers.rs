//! Text helpers for fixed-width rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to at most `max_width` display columns, adding "…" if
/// truncated.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Spaces needed to push `right` to the right edge after `left`.
///
/// At least one space separates the two when anything fits.
pub fn gap_between(left: &str, right: &str, width: usize) -> usize {
    width.saturating_sub(left.width() + right.width()).max(1)
}

/// Format a 24h relative change as `+1.23%` / `-0.50%`.
pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two columns wide
        let out = truncate_to_width("日本語テキスト", 5);
        assert!(out.width() <= 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_gap_between() {
        assert_eq!(gap_between("ab", "cd", 10), 6);
        assert_eq!(gap_between("abcdef", "ghijkl", 8), 1);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(1.234), "+1.23%");
        assert_eq!(format_change(-0.5), "-0.50%");
        assert_eq!(format_change(0.0), "+0.00%");
    }
}
