//! Date and time utility functions

use chrono::{DateTime, Utc};

/// Prefix of the spreadsheet export filename
pub const EXPORT_PREFIX: &str = "issue_export_";
/// Extension of the spreadsheet export
pub const EXPORT_EXTENSION: &str = "xlsx";

/// Filesystem-safe UTC timestamp, `YYYY-MM-DDTHH-MM-SS`
pub fn file_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Name of an export file created at `now`
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use techflow::utils::datetime::export_filename;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(export_filename(now), "issue_export_2024-03-09T14-05-07.xlsx");
/// ```
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("{}{}.{}", EXPORT_PREFIX, file_timestamp(now), EXPORT_EXTENSION)
}
