//! String formatting utilities for table cells.

use chrono::{DateTime, Utc};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Marker cell for flagged rows (favorites, important notes).
pub fn flag(value: bool, unicode: bool) -> &'static str {
    match (value, unicode) {
        (true, true) => "\u{2605}",
        (true, false) => "*",
        (false, _) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Programación", 8), "Progr...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\r\nb"), "a b");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_datetime(&dt), "2024-01-02 03:04");
    }

    #[test]
    fn test_flag() {
        assert_eq!(flag(true, false), "*");
        assert_eq!(flag(false, true), "");
    }
}
