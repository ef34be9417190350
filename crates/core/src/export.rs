//! CSV export of survey responses.
//!
//! The document is a fixed header line followed by one line per response, in
//! input order, joined by `\n` with no trailing newline. Comments are always
//! quoted. Other fields are quoted only when they contain a delimiter, a quote
//! or a line break; the display date always contains commas, so in practice it
//! is quoted too.

use crate::constants::{CSV_CONTENT_TYPE, CSV_HEADERS, EXPORT_FILENAME_PREFIX};
use crate::date::{export_date_stamp, format_display_date};
use crate::response::SurveyResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Serialises responses into a CSV document.
///
/// Never fails; an empty input produces just the header line.
pub fn to_csv<'a>(responses: impl IntoIterator<Item = &'a SurveyResponse>) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    lines.extend(responses.into_iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(response: &SurveyResponse) -> String {
    [
        escape_field(&format_display_date(&response.date)),
        response.satisfaction.to_string(),
        escape_field(response.improvement.label()),
        response.recommendation.to_string(),
        quote_field(&response.comments),
    ]
    .join(",")
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        quote_field(value)
    } else {
        value.to_owned()
    }
}

/// `survey_responses_<YYYY-MM-DD>.csv` for an export made at `exported_at`.
pub fn export_filename(exported_at: DateTime<Utc>) -> String {
    format!(
        "{}{}.csv",
        EXPORT_FILENAME_PREFIX,
        export_date_stamp(exported_at)
    )
}

/// A CSV document ready to be handed to the user as a download.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CsvExport {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl CsvExport {
    pub fn build<'a>(
        responses: impl IntoIterator<Item = &'a SurveyResponse>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: export_filename(exported_at),
            content_type: CSV_CONTENT_TYPE,
            body: to_csv(responses),
        }
    }

    /// Value for a `Content-Disposition` header that triggers a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
