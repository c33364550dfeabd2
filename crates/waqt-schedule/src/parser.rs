//! `HH:MM` parsing with the fixed DST correction.

use waqt_types::{TimeOfDay, WaqtError};

/// Minutes added to provider times when the correction is applied.
pub const DST_CORRECTION_MINUTES: i64 = 60;

/// Parses a zero-padded 24-hour `HH:MM` string.
///
/// With `apply_correction`, the result is moved forward by
/// [`DST_CORRECTION_MINUTES`], wrapping past midnight on the same day
/// (`23:30` becomes `00:30`).
///
/// # Errors
/// Returns `InvalidTime` unless `text` is exactly two digits, a colon and two
/// digits, with hour 00-23 and minute 00-59.
///
/// # Example
/// ```rust
/// use waqt_schedule::parse_time;
///
/// let maghrib = parse_time("17:20", true).unwrap();
/// assert_eq!(maghrib.to_string(), "18:20");
/// ```
pub fn parse_time(text: &str, apply_correction: bool) -> Result<TimeOfDay, WaqtError> {
    let time: TimeOfDay = text.parse()?;

    if apply_correction {
        Ok(time.add_minutes(DST_CORRECTION_MINUTES))
    } else {
        Ok(time)
    }
}

/// Parses the wall-clock "now" value. Never corrected.
pub fn parse_current_time(text: &str) -> Result<TimeOfDay, WaqtError> {
    parse_time(text, false)
}
