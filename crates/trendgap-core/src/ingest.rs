//! CSV ingestion.
//!
//! Reads a fully buffered CSV document into [`Record`]s. The header row must
//! contain a `Timestamp` field; all other columns are ignored.

use std::io::Read;

use crate::error::{Result, TrendGapError};
use crate::models::Record;

/// Name of the required timestamp column.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

/// Read records from CSV input.
///
/// Rows are allowed to have differing lengths. A row too short to reach the
/// `Timestamp` column yields an empty timestamp, which fails parsing later.
///
/// # Errors
///
/// - [`TrendGapError::MissingColumn`] if the header has no `Timestamp` field
///   (including empty input)
/// - [`TrendGapError::Csv`] if the input is not readable CSV
///
/// # Examples
///
/// ```
/// use trendgap_core::ingest::read_records;
///
/// // The comma inside the timestamp must be quoted.
/// let data = "id,Timestamp\n1,\"01 Jan 2024, 10:00:00\"\n";
///
/// let records = read_records(data.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].timestamp, "01 Jan 2024, 10:00:00");
/// ```
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let column = rdr
        .headers()?
        .iter()
        .position(|name| name == TIMESTAMP_COLUMN)
        .ok_or(TrendGapError::MissingColumn)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(Record::new(row.get(column).unwrap_or_default()));
    }

    Ok(records)
}
