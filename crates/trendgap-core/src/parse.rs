//! Timestamp parsing.
//!
//! Uploaded files carry a single human-readable timestamp format such as
//! `05 Jan 2024, 14:30:00`. There is no timezone information; values are
//! treated as wall-clock time.

use chrono::{NaiveDateTime, Timelike};

use crate::error::{Result, TrendGapError};

/// The only accepted timestamp layout (`day month-abbrev year, HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y, %H:%M:%S";

/// Parse a timestamp string in [`TIMESTAMP_FORMAT`].
///
/// Leading and trailing whitespace is ignored.
///
/// # Examples
///
/// ```
/// use trendgap_core::parse::parse_timestamp;
/// use chrono::{Datelike, Timelike};
///
/// let dt = parse_timestamp("05 Jan 2024, 14:30:00").unwrap();
/// assert_eq!(dt.day(), 5);
/// assert_eq!(dt.hour(), 14);
///
/// assert!(parse_timestamp("2024-01-05T14:30:00").is_err());
/// ```
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    if !has_expected_layout(trimmed) {
        return Err(invalid(trimmed, "unexpected layout"));
    }

    let dt = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map_err(|e| invalid(trimmed, &e.to_string()))?;

    // chrono represents a `:60` leap second as nanoseconds past 1e9.
    if dt.nanosecond() >= 1_000_000_000 {
        return Err(invalid(trimmed, "second out of range"));
    }

    Ok(dt)
}

/// Checks what chrono's parser lets through: whitespace after the comma and
/// a plain four-digit year.
fn has_expected_layout(input: &str) -> bool {
    let Some((date, time)) = input.split_once(',') else {
        return false;
    };

    let year = date.split_whitespace().last().unwrap_or_default();

    time.starts_with(char::is_whitespace)
        && year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(input: &str, reason: &str) -> TrendGapError {
    TrendGapError::Parse(format!(
        "Invalid timestamp: '{}'. Expected format like '05 Jan 2024, 14:30:00'. Error: {}",
        input, reason
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parse_valid_timestamp() {
        let dt = parse_timestamp("05 Jan 2024, 14:30:00").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 5);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn parse_trims_whitespace() {
        let dt = parse_timestamp("  31 Dec 2023, 23:59:59 ").unwrap();
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.second(), 59);
    }

    #[test]
    fn parse_rejects_other_layouts() {
        assert!(parse_timestamp("2024-01-05 14:30:00").is_err());
        assert!(parse_timestamp("05/01/2024 14:30").is_err());
        assert!(parse_timestamp("05 Jan 2024 14:30:00").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(parse_timestamp("30 Feb 2024, 10:00:00").is_err());
        assert!(parse_timestamp("01 Jan 2024, 24:00:00").is_err());
    }

    #[test]
    fn parse_rejects_leap_second() {
        let result = parse_timestamp("01 Jan 2024, 10:00:60");
        assert!(matches!(result, Err(TrendGapError::Parse(_))));
        assert!(parse_timestamp("01 Jan 2024, 10:00:59").is_ok());
    }

    #[test]
    fn parse_requires_space_after_comma() {
        assert!(parse_timestamp("05 Jan 2024,14:30:00").is_err());
    }

    #[test]
    fn parse_requires_plain_four_digit_year() {
        assert!(parse_timestamp("05 Jan +2024, 14:30:00").is_err());
        assert!(parse_timestamp("05 Jan 24, 14:30:00").is_err());
        assert!(parse_timestamp("05 Jan 12024, 14:30:00").is_err());
    }

    #[test]
    fn parse_accepts_unpadded_day() {
        let dt = parse_timestamp("5 Jan 2024, 14:30:00").unwrap();
        assert_eq!(dt.day(), 5);
    }

    #[test]
    fn parse_rejects_empty() {
        let result = parse_timestamp("");
        assert!(matches!(result, Err(TrendGapError::Parse(_))));
    }
}
