//! Timestamp formatting for display and export.
//!
//! Rendering is done in UTC with a fixed English format so exports are
//! reproducible regardless of where the process runs.

use crate::constants::{DISPLAY_DATE_FORMAT, EXPORT_DATE_FORMAT};
use chrono::{DateTime, Utc};

/// Parses an ISO 8601 / RFC 3339 timestamp into UTC.
pub fn parse_timestamp(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Formats a timestamp as e.g. `Jul 15, 2023, 02:35 PM`.
///
/// Input that does not parse is returned unchanged.
pub fn format_display_date(iso: &str) -> String {
    match parse_timestamp(iso) {
        Some(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        None => {
            tracing::debug!("unparseable response timestamp: {:?}", iso);
            iso.to_owned()
        }
    }
}

/// `YYYY-MM-DD` stamp used in export filenames.
pub fn export_date_stamp(at: DateTime<Utc>) -> String {
    at.format(EXPORT_DATE_FORMAT).to_string()
}
