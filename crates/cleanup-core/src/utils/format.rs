use chrono::{DateTime, NaiveDate};

/// Display format for calendar dates: "Mar 1, 2025"
const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format a stored date for display.
/// Accepts `YYYY-MM-DD` or RFC 3339; anything else is returned verbatim.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        d.format(DATE_DISPLAY_FORMAT).to_string()
    } else if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        dt.format(DATE_DISPLAY_FORMAT).to_string()
    } else {
        date.to_string()
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
