//! Constants used throughout the survey core crate.
//!
//! Export headers, content types and configuration defaults live here so the
//! REST API, CLI and core agree on them.

/// Column headers of an exported CSV document, in order.
pub const CSV_HEADERS: [&str; 5] = [
    "Date",
    "Satisfaction",
    "Area for Improvement",
    "Recommendation Score",
    "Comments",
];

/// MIME type of an exported CSV document.
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Prefix of the export filename; the export date and `.csv` follow it.
pub const EXPORT_FILENAME_PREFIX: &str = "survey_responses_";

/// Human-readable timestamp format: short month, day, year, 12-hour time.
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Date stamp used in export filenames.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel accepted by the satisfaction filter to mean "every rating".
pub const FILTER_ALL: &str = "all";

/// Shown in place of an empty comment in table rows.
pub const NO_COMMENTS_PLACEHOLDER: &str = "No comments";

/// Default REST bind address when `SURVEY_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default simulated latency of the mock data source, in milliseconds.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 1_000;

/// Upper bound on the configurable mock latency.
pub const MAX_MOCK_DELAY_MS: u64 = 60_000;

/// Number of stars in a satisfaction rendering.
pub const STAR_COUNT: usize = 5;
