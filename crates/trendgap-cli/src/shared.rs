use tracing::debug;
use trendgap_core::{Report, analyze_csv};

use crate::error::{CliError, CliResult, NOT_A_CSV_MESSAGE};

/// Whether a file name is accepted as CSV.
///
/// Matches the suffix exactly; `data.CSV` is rejected.
pub fn is_csv_file_name(name: &str) -> bool {
    name.ends_with(".csv")
}

/// Analyze an uploaded or opened file.
///
/// `file_name` is `None` or empty when nothing was supplied.
pub fn analyze_upload(file_name: Option<&str>, contents: &[u8]) -> CliResult<Report> {
    let name = match file_name {
        Some(name) if !name.is_empty() && is_csv_file_name(name) => name,
        _ => return Err(CliError::input(NOT_A_CSV_MESSAGE)),
    };

    let report = analyze_csv(contents).map_err(CliError::processing)?;

    debug!(
        file = name,
        rows_read = report.rows_read,
        rows_dropped = report.rows_dropped,
        "Analyzed upload"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendgap_core::Category;

    #[test]
    fn csv_suffix_is_required() {
        assert!(is_csv_file_name("times.csv"));
        assert!(is_csv_file_name("dir/times.csv"));
        assert!(!is_csv_file_name("times.txt"));
        assert!(!is_csv_file_name("times.CSV"));
        assert!(!is_csv_file_name("times.csv.bak"));
    }

    #[test]
    fn missing_or_wrong_file_is_rejected() {
        let data = b"Timestamp\n\"01 Jan 2024, 10:00:00\"\n";

        for name in [None, Some(""), Some("times.xlsx")] {
            let err = analyze_upload(name, data).unwrap_err();
            assert_eq!(err.to_string(), NOT_A_CSV_MESSAGE);
        }
    }

    #[test]
    fn core_errors_are_prefixed() {
        let err = analyze_upload(Some("times.csv"), b"Time\nx\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error processing file: CSV file must contain a 'Timestamp' column."
        );

        let err = analyze_upload(Some("times.csv"), b"Timestamp\nx\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error processing file: No valid timestamps found in the file."
        );
    }

    #[test]
    fn valid_upload_produces_report() {
        let data = b"Timestamp\n\"01 Jan 2024, 10:00:00\"\n\"01 Jan 2024, 12:30:00\"\n";
        let report = analyze_upload(Some("times.csv"), data).unwrap();
        assert_eq!(
            report.messages()[&Category::Bh],
            "Maximum time difference in BH trend: 150.00 minutes"
        );
    }
}
