//! Core data types for trendgap.
//!
//! - [`Record`] - One ingested CSV row
//! - [`Category`] - Time-of-week bucket (BH/NBH/WE)
//! - [`GapResult`] - Largest gap for one category
//! - [`CategoryReport`] - Gap result plus display message for one category
//! - [`Report`] - Complete result for one uploaded file

use std::collections::BTreeMap;

use chrono::Duration;
use serde::Serialize;

/// One input row. Only the `Timestamp` column is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw, unparsed timestamp string.
    pub timestamp: String,
}

impl Record {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

/// Time-of-week bucket.
///
/// Ordering follows declaration order, which is also the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    /// Business hours: Monday to Friday, 09:00 to 17:59:59.
    #[serde(rename = "BH")]
    Bh,
    /// Non-business hours on weekdays, plus Saturday before 18:00.
    #[serde(rename = "NBH")]
    Nbh,
    /// Saturday 18:00 through Monday 08:59:59.
    #[serde(rename = "WE")]
    We,
}

impl Category {
    /// All categories in reporting order.
    pub const ALL: [Category; 3] = [Category::Bh, Category::Nbh, Category::We];

    /// Short label used in messages (`BH`, `NBH`, `WE`).
    pub fn label(self) -> &'static str {
        match self {
            Category::Bh => "BH",
            Category::Nbh => "NBH",
            Category::We => "WE",
        }
    }

    /// Human-readable name of the bucket.
    pub fn description(self) -> &'static str {
        match self {
            Category::Bh => "Business hours",
            Category::Nbh => "Non-business hours",
            Category::We => "Weekend",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Largest gap between consecutive timestamps of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapResult {
    /// Fewer than two timestamps in the category.
    InsufficientData,
    /// Largest wall-clock difference between neighbours.
    MaxGap(Duration),
}

impl GapResult {
    /// The gap in minutes, if there is one.
    pub fn minutes(&self) -> Option<f64> {
        match self {
            GapResult::InsufficientData => None,
            GapResult::MaxGap(gap) => Some(gap.num_milliseconds() as f64 / 60_000.0),
        }
    }
}

/// Result for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub category: Category,
    /// Number of timestamps that fell into the category.
    pub points: usize,
    pub gap: GapResult,
}

impl CategoryReport {
    /// Display string shown to the user.
    pub fn message(&self) -> String {
        match self.gap.minutes() {
            Some(minutes) => format!(
                "Maximum time difference in {} trend: {:.2} minutes",
                self.category, minutes
            ),
            None => format!("Not enough data points for {} trend", self.category),
        }
    }
}

/// Complete analysis of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// One entry per category, in [`Category::ALL`] order.
    pub categories: Vec<CategoryReport>,
    /// Data rows seen during ingestion.
    pub rows_read: usize,
    /// Rows whose timestamp failed to parse.
    pub rows_dropped: usize,
}

impl Report {
    /// Mapping from category to its display string.
    pub fn messages(&self) -> BTreeMap<Category, String> {
        self.categories
            .iter()
            .map(|entry| (entry.category, entry.message()))
            .collect()
    }

    /// Look up the entry for a single category.
    pub fn get(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|entry| entry.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", Category::Bh), "BH");
        assert_eq!(format!("{}", Category::Nbh), "NBH");
        assert_eq!(format!("{}", Category::We), "WE");
    }

    #[test]
    fn category_order_is_reporting_order() {
        let mut shuffled = vec![Category::We, Category::Bh, Category::Nbh];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL.to_vec());
    }

    #[test]
    fn category_serialization() {
        assert_eq!(serde_json::to_string(&Category::Bh).unwrap(), "\"BH\"");
        assert_eq!(serde_json::to_string(&Category::Nbh).unwrap(), "\"NBH\"");
        assert_eq!(serde_json::to_string(&Category::We).unwrap(), "\"WE\"");
    }

    #[test]
    fn message_with_gap() {
        let entry = CategoryReport {
            category: Category::Bh,
            points: 2,
            gap: GapResult::MaxGap(Duration::minutes(150)),
        };
        assert_eq!(
            entry.message(),
            "Maximum time difference in BH trend: 150.00 minutes"
        );
    }

    #[test]
    fn message_rounds_to_two_decimals() {
        let entry = CategoryReport {
            category: Category::Nbh,
            points: 3,
            gap: GapResult::MaxGap(Duration::seconds(100)),
        };
        assert_eq!(
            entry.message(),
            "Maximum time difference in NBH trend: 1.67 minutes"
        );
    }

    #[test]
    fn message_without_gap() {
        let entry = CategoryReport {
            category: Category::We,
            points: 1,
            gap: GapResult::InsufficientData,
        };
        assert_eq!(entry.message(), "Not enough data points for WE trend");
    }

    #[test]
    fn insufficient_data_has_no_minutes() {
        assert_eq!(GapResult::InsufficientData.minutes(), None);
        assert_eq!(GapResult::MaxGap(Duration::zero()).minutes(), Some(0.0));
    }
}
