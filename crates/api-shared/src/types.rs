//! Request and response bodies exchanged over the API.

use serde::{Deserialize, Serialize};
use survey_core::submission::{SubmissionErrors, SubmissionOutcome};
use survey_core::summary::{AreaCount, DayCount, RatingCount};
use survey_core::{FilteredResponses, ResponseQuery, ResponseRow, SurveyAnswers, SurveySummary};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub message: String,
}

/// Filter parameters for listing and exporting responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResponseFilterParams {
    /// `all` or a rating from 1 to 5. Unrecognised values match nothing.
    pub satisfaction: Option<String>,
    /// Case-insensitive text to look for in comments.
    pub search: Option<String>,
}

impl ResponseFilterParams {
    pub fn to_query(&self) -> ResponseQuery {
        ResponseQuery::from_raw(self.satisfaction.as_deref(), self.search.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryParams {
    /// Number of surveys started, for the completion rate.
    pub started: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResponseRowRes {
    pub id: String,
    pub date: String,
    pub satisfaction: i32,
    pub stars: String,
    pub satisfaction_label: Option<String>,
    pub improvement: String,
    pub recommendation: String,
    pub comments: String,
    pub has_comments: bool,
}

impl From<ResponseRow> for ResponseRowRes {
    fn from(row: ResponseRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            satisfaction: row.satisfaction,
            stars: row.stars,
            satisfaction_label: row.satisfaction_label,
            improvement: row.improvement,
            recommendation: row.recommendation,
            comments: row.comments,
            has_comments: row.has_comments,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListResponsesRes {
    /// Responses held by the data source before filtering.
    pub total: u64,
    pub rows: Vec<ResponseRowRes>,
}

impl From<FilteredResponses> for ListResponsesRes {
    fn from(filtered: FilteredResponses) -> Self {
        Self {
            total: filtered.total as u64,
            rows: filtered
                .responses
                .iter()
                .map(|r| ResponseRowRes::from(ResponseRow::from(r)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayCountRes {
    pub day: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingCountRes {
    pub rating: u8,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AreaCountRes {
    pub area: String,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryRes {
    pub total_responses: u64,
    pub completion_rate: String,
    pub average_satisfaction: f64,
    pub responses_by_day: Vec<DayCountRes>,
    pub satisfaction_distribution: Vec<RatingCountRes>,
    pub improvements: Vec<AreaCountRes>,
}

impl From<SurveySummary> for SummaryRes {
    fn from(summary: SurveySummary) -> Self {
        Self {
            total_responses: summary.total_responses,
            completion_rate: summary.completion_rate,
            average_satisfaction: summary.average_satisfaction,
            responses_by_day: summary
                .responses_by_day
                .into_iter()
                .map(|DayCount { day, count }| DayCountRes { day, count })
                .collect(),
            satisfaction_distribution: summary
                .satisfaction_distribution
                .into_iter()
                .map(|RatingCount { rating, count }| RatingCountRes { rating, count })
                .collect(),
            improvements: summary
                .improvements
                .into_iter()
                .map(|AreaCount { area, count }| AreaCountRes { area, count })
                .collect(),
        }
    }
}

/// Survey answers as posted by the form. Every answer is sent as text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseReq {
    pub satisfaction: String,
    pub improvement: String,
    pub recommendation: String,
    #[serde(default)]
    pub comments: Option<String>,
}

impl From<SubmitResponseReq> for SurveyAnswers {
    fn from(req: SubmitResponseReq) -> Self {
        SurveyAnswers {
            satisfaction: req.satisfaction,
            improvement: req.improvement,
            recommendation: req.recommendation,
            comments: req.comments,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponseRes {
    pub success: bool,
    /// True when the server runs in preview mode and discarded the answers.
    pub preview: bool,
    pub receipt_id: Option<String>,
    pub received_at: Option<String>,
    pub message: String,
}

impl From<SubmissionOutcome> for SubmitResponseRes {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted(ack) => Self {
                success: ack.success,
                preview: false,
                receipt_id: Some(ack.receipt_id.to_string()),
                received_at: Some(ack.received_at.to_rfc3339()),
                message: "Thank you for your feedback!".into(),
            },
            SubmissionOutcome::Preview => Self {
                success: false,
                preview: true,
                receipt_id: None,
                received_at: None,
                message: "In preview mode, survey submissions are not processed.".into(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorRes {
    pub field: String,
    pub message: String,
}

/// Body of a `400 Bad Request` for an incomplete survey.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorRes {
    pub message: String,
    pub errors: Vec<FieldErrorRes>,
}

impl From<&SubmissionErrors> for ValidationErrorRes {
    fn from(errors: &SubmissionErrors) -> Self {
        Self {
            message: "survey submission is invalid".into(),
            errors: errors
                .iter()
                .map(|e| FieldErrorRes {
                    field: e.field.name().to_owned(),
                    message: e.message.to_owned(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::source::mock::{sample_responses, sample_summary};
    use survey_core::SurveyError;

    #[test]
    fn filter_params_default_to_everything() {
        let params: ResponseFilterParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.to_query(), ResponseQuery::default());
    }

    #[test]
    fn list_res_renders_rows_in_order() {
        let res = ListResponsesRes::from(FilteredResponses {
            total: 10,
            responses: sample_responses().into_iter().take(2).collect(),
        });
        assert_eq!(res.total, 10);
        assert_eq!(res.rows[0].id, "resp-001");
        assert_eq!(res.rows[0].stars, "★★★★★");
        assert_eq!(res.rows[0].satisfaction_label.as_deref(), Some("Very Satisfied"));
        assert_eq!(res.rows[1].recommendation, "7/10");
    }

    #[test]
    fn summary_res_keeps_values() {
        let res = SummaryRes::from(sample_summary());
        assert_eq!(res.total_responses, 245);
        assert_eq!(res.improvements[1].area, "Pricing");
        assert_eq!(res.improvements[1].count, 85);
    }

    #[test]
    fn validation_errors_map_field_names() {
        let err = SurveyAnswers::default().validate().unwrap_err();
        let SurveyError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let res = ValidationErrorRes::from(&errors);
        assert_eq!(res.errors.len(), 3);
        assert_eq!(res.errors[0].field, "satisfaction");
        assert_eq!(res.errors[0].message, "Please select your satisfaction level");
    }

    #[test]
    fn preview_outcome_is_not_success() {
        let res = SubmitResponseRes::from(SubmissionOutcome::Preview);
        assert!(!res.success);
        assert!(res.preview);
        assert_eq!(res.receipt_id, None);
    }
}
