//! Text Measurement
//!
//! Terminal text width depends on Unicode character widths (CJK and most
//! emoji take 2 cells, combining marks take 0). Widths come from
//! `unicode-width`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// Display width of a single character.
pub fn char_width(c: char) -> u16 {
    UnicodeWidthChar::width(c).unwrap_or(0) as u16
}

/// Word-wrap text to `width` cells.
///
/// Breaks at spaces where possible; a word longer than the width is split.
/// Explicit newlines start a new line. Empty input yields no lines.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: u16, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0u16;

    for word in paragraph.split_whitespace() {
        let word_width = string_width(word);

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-split an overlong word.
        for c in word.chars() {
            let w = char_width(c);
            if current_width + w > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if current_width > 0 || lines.is_empty() || paragraph.trim().is_empty() {
        lines.push(current);
    }
}

/// Truncate text to fit within `width`, ending in an ellipsis when cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }
    if string_width(text) <= width {
        return text.to_string();
    }

    let target_width = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0u16;

    for c in text.chars() {
        let w = char_width(c);
        if current_width + w > target_width {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}

/// Center `text` within `width` by left-padding with spaces.
pub fn center(text: &str, width: u16) -> String {
    let pad = width.saturating_sub(string_width(text)) / 2;
    format!("{}{}", " ".repeat(pad as usize), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_at_spaces() {
        let lines = wrap_text("hello big world", 9);
        assert_eq!(lines, vec!["hello big", "world"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefgh", 3);
        assert_eq!(lines, vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_wrap_wide_chars() {
        let lines = wrap_text("日本語", 4);
        assert_eq!(lines, vec!["日本", "語"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 4), "hel…");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
