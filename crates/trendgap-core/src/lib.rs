//! # trendgap-core
//!
//! Time-of-week trend gap analysis.
//!
//! Timestamps read from a CSV `Timestamp` column are classified into three
//! buckets and the largest gap between neighbouring timestamps is reported
//! per bucket.
//!
//! ## Buckets
//!
//! - **BH**: Monday to Friday, 09:00 to 17:59:59
//! - **WE**: Saturday 18:00 through Monday 08:59:59
//! - **NBH**: everything else
//!
//! ## Example
//!
//! ```rust
//! use trendgap_core::prelude::*;
//!
//! let csv = "Timestamp\n\"01 Jan 2024, 10:00:00\"\n\"01 Jan 2024, 12:30:00\"\n";
//! let report = analyze_csv(csv.as_bytes()).unwrap();
//!
//! for (category, message) in report.messages() {
//!     println!("{}: {}", category, message);
//! }
//! assert_eq!(
//!     report.messages()[&Category::Bh],
//!     "Maximum time difference in BH trend: 150.00 minutes"
//! );
//! ```

pub mod categorize;
pub mod compute;
pub mod error;
pub mod ingest;
pub mod models;
pub mod parse;

// Re-export commonly used types at the crate root
pub use categorize::categorize;
pub use compute::{analyze_csv, build_report, max_gap};
pub use error::{Result, TrendGapError};
pub use ingest::read_records;
pub use models::{Category, CategoryReport, GapResult, Record, Report};
pub use parse::parse_timestamp;

/// Prelude module for convenient imports.
///
/// ```
/// use trendgap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::categorize::categorize;
    pub use crate::compute::{analyze_csv, build_report, categorize_all, max_gap};
    pub use crate::error::{Result, TrendGapError};
    pub use crate::ingest::read_records;
    pub use crate::models::*;
    pub use crate::parse::{TIMESTAMP_FORMAT, parse_timestamp};
}
