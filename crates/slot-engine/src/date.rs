//! Strict `YYYY-MM-DD` date parsing.
//!
//! chrono's `%Y-%m-%d` accepts single-digit months and days, so the string
//! shape is checked byte-for-byte before handing off to the calendar check.

use chrono::NaiveDate;

use crate::error::{EngineError, Result};

/// Parse a calendar date in strict `YYYY-MM-DD` form.
///
/// Rejects alternative separators (`2024/02/03`), single-digit fields
/// (`2024-2-3`), and calendar-invalid dates (`2024-02-30`).
///
/// # Errors
/// Returns [`EngineError::InvalidDate`] on any deviation.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let invalid = || EngineError::InvalidDate(raw.to_string());

    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}
