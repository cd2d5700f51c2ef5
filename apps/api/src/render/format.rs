//! Formatting helpers shared by every layout family.
//!
//! These must stay identical across families: a date or skill level renders the
//! same way no matter which template is selected.

use chrono::NaiveDate;

/// Parses a `YYYY-MM` string (month is 1-based). Returns `None` for anything else.
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    let (year, month) = raw.trim().split_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if month.is_empty() || month.len() > 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `"2023-01"` → `"Jan 2023"`. Empty input gives an empty string; anything that is
/// not a valid `YYYY-MM` passes through trimmed.
pub fn format_month(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match parse_month(raw) {
        Some(date) => date.format("%b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `"{start} — {end}"`, with "Present" as the end when `current` is set.
///
/// Missing ends are dropped rather than leaving a dangling dash; when nothing
/// remains the result is empty and callers skip the date line.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} — {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}

pub const MAX_LEVEL: i32 = 5;

/// Skill strength as a fraction of the full scale, `level / 5` clamped to `[0, 1]`.
pub fn level_ratio(level: i32) -> f32 {
    level.clamp(0, MAX_LEVEL) as f32 / MAX_LEVEL as f32
}

/// Integer percentage used for bar widths and the `data-strength` attribute.
pub fn level_percent(level: i32) -> u32 {
    (level_ratio(level) * 100.0).round() as u32
}

/// Number of filled dots out of [`MAX_LEVEL`].
pub fn filled_dots(level: i32) -> u32 {
    (level_ratio(level) * MAX_LEVEL as f32).round() as u32
}

/// First character of the name for the avatar placeholder, or `?` when blank.
pub fn initial(full_name: &str) -> String {
    full_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string())
}

/// Returns the value unless it is blank.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
