//! Display projection of responses for the response table.

use crate::constants::{NO_COMMENTS_PLACEHOLDER, STAR_COUNT};
use crate::date::format_display_date;
use crate::response::{satisfaction_label, SurveyResponse};
use serde::Serialize;

/// One table row, with every column already rendered as text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseRow {
    pub id: String,
    pub date: String,
    pub satisfaction: i32,
    pub stars: String,
    /// Form wording for the rating, `None` outside 1..=5.
    pub satisfaction_label: Option<String>,
    pub improvement: String,
    pub recommendation: String,
    pub comments: String,
    pub has_comments: bool,
}

impl From<&SurveyResponse> for ResponseRow {
    fn from(response: &SurveyResponse) -> Self {
        Self {
            id: response.id.clone(),
            date: format_display_date(&response.date),
            satisfaction: response.satisfaction,
            stars: render_stars(response.satisfaction),
            satisfaction_label: satisfaction_label(response.satisfaction).map(str::to_owned),
            improvement: response.improvement.label().to_owned(),
            recommendation: format!("{}/10", response.recommendation),
            comments: if response.has_comments() {
                response.comments.clone()
            } else {
                NO_COMMENTS_PLACEHOLDER.to_owned()
            },
            has_comments: response.has_comments(),
        }
    }
}

/// Five stars, the first `satisfaction` of them filled.
pub fn render_stars(satisfaction: i32) -> String {
    let filled = usize::try_from(satisfaction).unwrap_or(0).min(STAR_COUNT);
    format!("{}{}", "★".repeat(filled), "☆".repeat(STAR_COUNT - filled))
}
