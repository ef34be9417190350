//! Survey submission validation.
//!
//! The survey form sends every answer as text. [`SurveyAnswers::validate`]
//! checks all required fields at once and reports one message per failing
//! field, so the caller can show them next to the inputs.

use crate::error::{SurveyError, SurveyResult};
use crate::response::ImprovementArea;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use survey_types::{NonEmptyText, RecommendationScore, SatisfactionScore};
use uuid::Uuid;

/// Answers as entered in the survey form, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub satisfaction: String,
    pub improvement: String,
    pub recommendation: String,
    #[serde(default)]
    pub comments: Option<String>,
}

/// An answer set whose required fields are present and in range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedSubmission {
    pub satisfaction: SatisfactionScore,
    pub improvement: ImprovementArea,
    pub recommendation: RecommendationScore,
    pub comments: Option<NonEmptyText>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    Satisfaction,
    Improvement,
    Recommendation,
}

impl SubmissionField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Satisfaction => "satisfaction",
            Self::Improvement => "improvement",
            Self::Recommendation => "recommendation",
        }
    }

    /// Message shown beside the field when it is missing or invalid.
    pub fn message(self) -> &'static str {
        match self {
            Self::Satisfaction => "Please select your satisfaction level",
            Self::Improvement => "Please select an area for improvement",
            Self::Recommendation => "Please select how likely you are to recommend",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: SubmissionField,
    pub message: &'static str,
}

/// Field-level validation failures, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionErrors {
    errors: Vec<FieldError>,
}

impl SubmissionErrors {
    fn push(&mut self, field: SubmissionField) {
        self.errors.push(FieldError {
            field,
            message: field.message(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn message_for(&self, field: SubmissionField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

impl fmt::Display for SubmissionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field.name(), e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl SurveyAnswers {
    /// Validates the answer set.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Validation`] listing every field that is blank,
    /// not a whole number, out of range, or (for the improvement area) not one
    /// of the codes the form offers.
    pub fn validate(&self) -> SurveyResult<ValidatedSubmission> {
        let mut errors = SubmissionErrors::default();

        let satisfaction = SatisfactionScore::parse(&self.satisfaction)
            .map_err(|e| tracing::debug!("satisfaction rejected: {}", e))
            .ok();
        if satisfaction.is_none() {
            errors.push(SubmissionField::Satisfaction);
        }

        let improvement = Some(ImprovementArea::from_code(self.improvement.trim()))
            .filter(ImprovementArea::is_known);
        if improvement.is_none() {
            errors.push(SubmissionField::Improvement);
        }

        let recommendation = RecommendationScore::parse(&self.recommendation)
            .map_err(|e| tracing::debug!("recommendation rejected: {}", e))
            .ok();
        if recommendation.is_none() {
            errors.push(SubmissionField::Recommendation);
        }

        match (satisfaction, improvement, recommendation) {
            (Some(satisfaction), Some(improvement), Some(recommendation)) => {
                Ok(ValidatedSubmission {
                    satisfaction,
                    improvement,
                    recommendation,
                    comments: NonEmptyText::optional(self.comments.as_deref()),
                })
            }
            _ => Err(SurveyError::Validation(errors)),
        }
    }
}

/// Acknowledgement returned by a data source for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
    pub receipt_id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionAck {
    pub fn accepted() -> Self {
        Self {
            success: true,
            receipt_id: Uuid::new_v4(),
            received_at: Utc::now(),
        }
    }
}

/// What happened to a submission handed to the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted(SubmissionAck),
    /// Preview mode: the answers were valid but not forwarded anywhere.
    Preview,
}
