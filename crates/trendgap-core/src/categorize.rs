//! Time-of-week classification.
//!
//! Every wall-clock timestamp falls into exactly one [`Category`]. The
//! weekend window runs from Saturday 18:00 until Monday 09:00, so early
//! Monday mornings count as weekend rather than non-business hours.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::models::Category;

/// First hour of business hours (inclusive).
pub const BUSINESS_OPEN_HOUR: u32 = 9;

/// First hour after business hours (exclusive end of the BH window).
pub const BUSINESS_CLOSE_HOUR: u32 = 18;

/// Classify a timestamp into its time-of-week bucket.
///
/// Rules are checked in order and the first match wins:
/// 1. `WE`: Saturday from 18:00, all of Sunday, Monday before 09:00
/// 2. `BH`: Monday to Friday, 09:00 to 17:59:59
/// 3. `NBH`: everything else
///
/// # Examples
///
/// ```
/// use trendgap_core::categorize::categorize;
/// use trendgap_core::models::Category;
/// use trendgap_core::parse::parse_timestamp;
///
/// // 2024-01-01 is a Monday
/// let ts = parse_timestamp("01 Jan 2024, 08:59:59").unwrap();
/// assert_eq!(categorize(&ts), Category::We);
///
/// let ts = parse_timestamp("01 Jan 2024, 09:00:00").unwrap();
/// assert_eq!(categorize(&ts), Category::Bh);
/// ```
pub fn categorize(ts: &NaiveDateTime) -> Category {
    let hour = ts.hour();
    let before_open = hour < BUSINESS_OPEN_HOUR;
    let after_close = hour >= BUSINESS_CLOSE_HOUR;

    match ts.weekday() {
        Weekday::Sat if after_close => Category::We,
        Weekday::Sun => Category::We,
        Weekday::Mon if before_open => Category::We,
        Weekday::Sat => Category::Nbh,
        _ if !before_open && !after_close => Category::Bh,
        _ => Category::Nbh,
    }
}
