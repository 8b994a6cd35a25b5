use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Date shown on the bar, trailing space included.
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M ";

/// Remove every `"` and newline in place, keeping all other characters in order.
#[inline]
pub fn strip_quotes_and_newlines(text: &mut String) {
    text.retain(|c| c != '"' && c != '\n');
}

/// Cut `text` to at most `max_chars` characters, never splitting a character.
#[inline]
pub fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
}

pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(DATE_FORMAT).to_string()
}
