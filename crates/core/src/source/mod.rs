//! Survey data sources.
//!
//! The service reads summaries and responses through [`SurveyDataSource`] and
//! forwards validated submissions to it. Swapping the mock for a real backend
//! does not change how the filter and export code consume the data.

use crate::error::SurveyResult;
use crate::response::SurveyResponse;
use crate::submission::{SubmissionAck, ValidatedSubmission};
use crate::summary::SurveySummary;
use async_trait::async_trait;

pub mod file;
pub mod mock;

pub use file::JsonFileSource;
pub use mock::MockSurveySource;

#[async_trait]
pub trait SurveyDataSource: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Dashboard summary statistics.
    async fn fetch_summary(&self) -> SurveyResult<SurveySummary>;

    /// Every stored response, newest first.
    async fn fetch_responses(&self) -> SurveyResult<Vec<SurveyResponse>>;

    /// Records a validated answer set.
    async fn submit_response(&self, submission: &ValidatedSubmission)
        -> SurveyResult<SubmissionAck>;
}
