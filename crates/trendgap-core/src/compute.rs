//! Gap computation and report building.
//!
//! Timestamps are parsed, split by [`Category`], sorted, and each category's
//! largest gap between neighbours is measured in wall-clock time.

use std::collections::BTreeMap;
use std::io::Read;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::categorize::categorize;
use crate::error::{Result, TrendGapError};
use crate::ingest::read_records;
use crate::models::{Category, CategoryReport, GapResult, Record, Report};
use crate::parse::parse_timestamp;

/// Timestamps grouped by category, each group sorted ascending.
pub type CategorizedDataset = BTreeMap<Category, Vec<NaiveDateTime>>;

/// Compute the largest gap between consecutive timestamps.
///
/// `sorted` must be in ascending order. Sequences with fewer than two
/// elements yield [`GapResult::InsufficientData`].
///
/// # Examples
///
/// ```
/// use trendgap_core::compute::max_gap;
/// use trendgap_core::models::GapResult;
/// use trendgap_core::parse::parse_timestamp;
/// use chrono::Duration;
///
/// let times = [
///     parse_timestamp("01 Jan 2024, 10:00:00").unwrap(),
///     parse_timestamp("01 Jan 2024, 10:05:00").unwrap(),
///     parse_timestamp("01 Jan 2024, 12:30:00").unwrap(),
/// ];
/// assert_eq!(max_gap(&times), GapResult::MaxGap(Duration::minutes(145)));
/// assert_eq!(max_gap(&times[..1]), GapResult::InsufficientData);
/// ```
pub fn max_gap(sorted: &[NaiveDateTime]) -> GapResult {
    sorted
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .max()
        .map_or(GapResult::InsufficientData, GapResult::MaxGap)
}

/// Group timestamps by category and sort each group.
///
/// All three categories are present in the result, possibly empty.
pub fn categorize_all(timestamps: impl IntoIterator<Item = NaiveDateTime>) -> CategorizedDataset {
    let mut dataset: CategorizedDataset = Category::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for ts in timestamps {
        dataset.entry(categorize(&ts)).or_default().push(ts);
    }

    for group in dataset.values_mut() {
        group.sort_unstable();
    }

    dataset
}

/// Build the full report from ingested records.
///
/// Rows whose timestamp fails to parse are dropped and counted in
/// [`Report::rows_dropped`].
///
/// # Errors
///
/// [`TrendGapError::EmptyDataset`] if no record parses.
pub fn build_report(records: &[Record]) -> Result<Report> {
    let mut parsed = Vec::with_capacity(records.len());
    let mut rows_dropped = 0;

    for record in records {
        match parse_timestamp(&record.timestamp) {
            Ok(ts) => parsed.push(ts),
            Err(e) => {
                debug!("Dropping row: {}", e);
                rows_dropped += 1;
            }
        }
    }

    if parsed.is_empty() {
        return Err(TrendGapError::EmptyDataset);
    }

    let dataset = categorize_all(parsed);

    let categories = Category::ALL
        .iter()
        .map(|category| {
            let group = dataset.get(category).map(Vec::as_slice).unwrap_or_default();
            CategoryReport {
                category: *category,
                points: group.len(),
                gap: max_gap(group),
            }
        })
        .collect();

    debug!(rows_read = records.len(), rows_dropped, "Built report");

    Ok(Report {
        categories,
        rows_read: records.len(),
        rows_dropped,
    })
}

/// Read CSV input and build its report.
///
/// This is a convenience function combining
/// [`read_records`](crate::ingest::read_records) and [`build_report`].
pub fn analyze_csv<R: Read>(reader: R) -> Result<Report> {
    let records = read_records(reader)?;
    build_report(&records)
}
