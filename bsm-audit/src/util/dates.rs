/*!
 Contains date parsing functions for audit trail timestamps.

 BSM stores time as seconds since the Unix epoch plus a sub-second field.
*/

use chrono::{DateTime, Utc};

/// The layout used to render every timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get a UTC date from epoch seconds, if the value is representable
pub fn get_utc_time(seconds: u64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(seconds).ok()?, 0)
}

/// Format a date in the [`TIMESTAMP_FORMAT`] layout
pub fn format(date: &DateTime<Utc>) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Render epoch seconds and microseconds, i.e. `2014-02-20 09:23:07 (1392888187.322)`
///
/// Seconds that cannot be represented as a date render as `INVALID`.
pub fn format_timestamp(seconds: u64, microseconds: u64) -> String {
    match get_utc_time(seconds) {
        Some(date) => format!("{} ({seconds}.{microseconds})", format(&date)),
        None => format!("INVALID ({seconds}.{microseconds})"),
    }
}
