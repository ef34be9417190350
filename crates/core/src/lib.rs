//! # Survey Core
//!
//! Core business logic for the survey response dashboard.
//!
//! This crate contains pure data operations:
//! - Filtering responses by satisfaction rating and comment search
//! - CSV export of a filtered response list
//! - Summary statistics and survey submission validation
//! - The data source abstraction and its mock/file implementations
//!
//! **No API concerns**: HTTP servers and command-line parsing belong in `api-rest` and `cli`.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod export;
pub mod filter;
pub mod response;
pub mod source;
pub mod submission;
pub mod summary;
pub mod table;

pub use config::CoreConfig;
pub use error::{SurveyError, SurveyResult};
pub use export::{to_csv, CsvExport};
pub use filter::{filter_responses, ResponseQuery, SatisfactionFilter};
pub use response::{ImprovementArea, SurveyResponse};
pub use source::SurveyDataSource;
pub use submission::{SubmissionAck, SubmissionOutcome, SurveyAnswers, ValidatedSubmission};
pub use summary::SurveySummary;
pub use table::ResponseRow;

pub use survey_types::{NonEmptyText, RecommendationScore, SatisfactionScore};

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Responses left after applying a query, with the pre-filter count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredResponses {
    pub total: usize,
    pub responses: Vec<SurveyResponse>,
}

/// Entry point used by the REST API and the CLI.
///
/// Holds the data source and the preview flag. Filter state is not stored
/// here; callers pass a [`ResponseQuery`] on every call.
#[derive(Clone)]
pub struct SurveyService {
    source: Arc<dyn SurveyDataSource>,
    preview_mode: bool,
}

impl SurveyService {
    /// Creates a service using the data source selected by `cfg`.
    pub fn new(cfg: &CoreConfig) -> Self {
        Self::with_source(cfg.data_source(), cfg.preview_mode())
    }

    pub fn with_source(source: Arc<dyn SurveyDataSource>, preview_mode: bool) -> Self {
        Self {
            source,
            preview_mode,
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    /// Summary statistics as reported by the data source.
    pub async fn summary(&self) -> SurveyResult<SurveySummary> {
        self.source.fetch_summary().await
    }

    /// Summary statistics computed from the current responses.
    ///
    /// When `surveys_started` is `None` every response counts as a completed
    /// survey.
    pub async fn computed_summary(&self, surveys_started: Option<u64>) -> SurveyResult<SurveySummary> {
        let responses = self.source.fetch_responses().await?;
        let started = surveys_started.unwrap_or(responses.len() as u64);
        Ok(SurveySummary::from_responses(&responses, started))
    }

    /// Fetches responses and applies `query`.
    pub async fn list(&self, query: &ResponseQuery) -> SurveyResult<FilteredResponses> {
        let responses = self.source.fetch_responses().await?;
        let total = responses.len();
        let responses: Vec<SurveyResponse> = query.apply(&responses).into_iter().cloned().collect();
        tracing::debug!(
            "filter satisfaction={} search={:?}: {} of {} responses",
            query.satisfaction,
            query.search,
            responses.len(),
            total
        );
        Ok(FilteredResponses { total, responses })
    }

    /// Fetches responses, applies `query` and renders the result as CSV.
    pub async fn export(
        &self,
        query: &ResponseQuery,
        exported_at: DateTime<Utc>,
    ) -> SurveyResult<CsvExport> {
        let responses = self.source.fetch_responses().await?;
        let filtered = query.apply(&responses);
        tracing::info!("exporting {} responses", filtered.len());
        Ok(CsvExport::build(filtered, exported_at))
    }

    /// Validates `answers` and forwards them to the data source.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Validation`] with field-level messages when the
    /// answers are incomplete, or any error reported by the data source.
    pub async fn submit(&self, answers: &SurveyAnswers) -> SurveyResult<SubmissionOutcome> {
        let submission = answers.validate()?;
        if self.preview_mode {
            tracing::info!("preview mode: submission not processed");
            return Ok(SubmissionOutcome::Preview);
        }
        let ack = self.source.submit_response(&submission).await?;
        Ok(SubmissionOutcome::Accepted(ack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSurveySource;
    use chrono::TimeZone;
    use std::time::Duration;

    fn service(preview_mode: bool) -> (SurveyService, Arc<MockSurveySource>) {
        let source = Arc::new(MockSurveySource::new(Duration::ZERO));
        (SurveyService::with_source(source.clone(), preview_mode), source)
    }

    fn answers() -> SurveyAnswers {
        SurveyAnswers {
            satisfaction: "5".into(),
            improvement: "product_quality".into(),
            recommendation: "10".into(),
            comments: None,
        }
    }

    #[tokio::test]
    async fn list_applies_query_and_reports_total() {
        let (service, _) = service(false);
        let query = ResponseQuery::from_raw(Some("5"), None);
        let result = service.list(&query).await.unwrap();
        assert_eq!(result.total, 10);
        let ids: Vec<&str> = result.responses.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["resp-001", "resp-004", "resp-007"]);
    }

    #[tokio::test]
    async fn export_contains_only_filtered_rows() {
        let (service, _) = service(false);
        let query = ResponseQuery::from_raw(Some("all"), Some("shipping"));
        let at = Utc.with_ymd_and_hms(2023, 7, 20, 12, 0, 0).unwrap();
        let export = service.export(&query, at).await.unwrap();
        assert_eq!(export.filename, "survey_responses_2023-07-20.csv");
        assert_eq!(export.body.lines().count(), 2);
        assert!(export.body.contains("shipping took longer"));
    }

    #[tokio::test]
    async fn submit_forwards_valid_answers() {
        let (service, source) = service(false);
        let outcome = service.submit(&answers()).await.unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Accepted(ack) if ack.success));
        assert_eq!(source.submissions().await.len(), 1);
    }

    #[tokio::test]
    async fn submit_in_preview_mode_is_not_forwarded() {
        let (service, source) = service(true);
        let outcome = service.submit(&answers()).await.unwrap();
        assert_eq!(outcome, SubmissionOutcome::Preview);
        assert!(source.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn submit_rejects_invalid_answers_before_the_source() {
        let (service, source) = service(false);
        let err = service
            .submit(&SurveyAnswers::default())
            .await
            .expect_err("should reject");
        assert!(matches!(err, SurveyError::Validation(_)));
        assert!(source.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn computed_summary_uses_current_responses() {
        let (service, _) = service(false);
        let summary = service.computed_summary(Some(20)).await.unwrap();
        assert_eq!(summary.total_responses, 10);
        assert_eq!(summary.completion_rate, "50%");
    }
}
