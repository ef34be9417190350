//! Response filtering.
//!
//! A response is kept when it passes both the satisfaction filter and the
//! comment search. Filtering borrows the input, keeps its order, and never
//! fails: malformed filter values resolve to "match nothing" or "match all".

use crate::constants::FILTER_ALL;
use crate::response::SurveyResponse;
use std::fmt;

/// Rating filter selected by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SatisfactionFilter {
    /// Every rating passes.
    #[default]
    All,
    /// Only responses with exactly this rating pass.
    Rating(i64),
    /// The filter value could not be understood; nothing passes.
    Unmatchable,
}

impl SatisfactionFilter {
    /// Interprets a raw filter value, as sent by a select box or query string.
    ///
    /// Only the exact text `"all"` or blank input mean [`SatisfactionFilter::All`].
    /// A rating must be written the way the rating itself prints, so `"5"`
    /// selects rating 5 while `"05"`, `"+5"` and `" 5 "` match nothing.
    /// Integers outside 1..=5 are kept and simply match no response.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() || input == FILTER_ALL {
            return Self::All;
        }
        match input.parse::<i64>() {
            Ok(rating) if rating.to_string() == input => Self::Rating(rating),
            _ => Self::Unmatchable,
        }
    }

    pub fn matches(&self, satisfaction: i32) -> bool {
        match self {
            Self::All => true,
            Self::Rating(rating) => i64::from(satisfaction) == *rating,
            Self::Unmatchable => false,
        }
    }
}

impl From<&str> for SatisfactionFilter {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for SatisfactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(FILTER_ALL),
            Self::Rating(rating) => write!(f, "{rating}"),
            Self::Unmatchable => f.write_str("<unmatchable>"),
        }
    }
}

/// The caller's current filter state: rating selection plus search text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseQuery {
    pub satisfaction: SatisfactionFilter,
    pub search: String,
}

impl ResponseQuery {
    pub fn new(satisfaction: SatisfactionFilter, search: impl Into<String>) -> Self {
        Self {
            satisfaction,
            search: search.into(),
        }
    }

    /// Builds a query from optional raw values; missing values mean "no filter".
    pub fn from_raw(satisfaction: Option<&str>, search: Option<&str>) -> Self {
        Self {
            satisfaction: satisfaction.map(SatisfactionFilter::parse).unwrap_or_default(),
            search: search.unwrap_or_default().to_owned(),
        }
    }

    /// Applies this query to `responses`, see [`filter_responses`].
    pub fn apply<'a>(&self, responses: &'a [SurveyResponse]) -> Vec<&'a SurveyResponse> {
        filter_responses(responses, self.satisfaction, &self.search)
    }
}

/// Keeps the responses that match `satisfaction` and whose comments contain
/// `search`, ignoring case. Empty search text matches every comment.
///
/// The output preserves the relative order of `responses`.
pub fn filter_responses<'a>(
    responses: &'a [SurveyResponse],
    satisfaction: SatisfactionFilter,
    search: &str,
) -> Vec<&'a SurveyResponse> {
    let needle = search.to_lowercase();
    responses
        .iter()
        .filter(|response| satisfaction.matches(response.satisfaction))
        .filter(|response| needle.is_empty() || response.comments.to_lowercase().contains(&needle))
        .collect()
}
