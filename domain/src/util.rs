//! Shared utility functions.

/// Single-line preview of free text for log fields.
///
/// Newlines are flattened and anything past `max_bytes` is replaced by `...`.
/// The cut never splits a UTF-8 character.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let end = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max_bytes)
        .last()
        .unwrap_or(0);
    let flat = s[..end].replace(['\n', '\r'], " ");
    if end < s.len() {
        format!("{}...", flat)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("short", 80), "short");
        assert_eq!(preview("", 10), "");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(preview("line one\nline two", 8), "line one...");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\r\nb", 10), "a  b");
    }

    #[test]
    fn preview_respects_char_boundary() {
        // 'é' is 2 bytes
        assert_eq!(preview("café au lait", 4), "caf...");
        assert_eq!(preview("café au lait", 5), "café...");
    }
}
