// src/util/text.rs
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// First non-empty line of `text`, cut to at most `max_chars` characters.
///
/// Truncated output ends with `…`, which counts towards `max_chars`.
///
/// # Examples
///
/// ```
/// use notedesk::util::text::summarize;
///
/// assert_eq!(summarize("Buy milk\nand eggs", 40), "Buy milk");
/// assert_eq!(summarize("Quarterly planning", 10), "Quarterly…");
/// ```
pub fn summarize(text: &str, max_chars: usize) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut cut: String = line.chars().take(max_chars - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

/// Dashboard date style, e.g. `Dec 4, 2024, 06:30 PM`
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Left-aligned cell padded with spaces to `width` characters
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}
