//! Read-only data source backed by a JSON file of responses.

use super::SurveyDataSource;
use crate::error::{SurveyError, SurveyResult};
use crate::response::SurveyResponse;
use crate::submission::{SubmissionAck, ValidatedSubmission};
use crate::summary::SurveySummary;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of responses from disk on every fetch.
///
/// The summary is computed from the file contents, treating every stored
/// response as a completed survey.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> SurveyResult<Vec<SurveyResponse>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SurveyError::FileRead)?;
        let responses: Vec<SurveyResponse> =
            serde_json::from_str(&contents).map_err(SurveyError::Deserialization)?;
        tracing::debug!(
            "loaded {} responses from {}",
            responses.len(),
            self.path.display()
        );
        Ok(responses)
    }
}

#[async_trait]
impl SurveyDataSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    async fn fetch_summary(&self) -> SurveyResult<SurveySummary> {
        let responses = self.load().await?;
        Ok(SurveySummary::from_responses(
            &responses,
            responses.len() as u64,
        ))
    }

    async fn fetch_responses(&self) -> SurveyResult<Vec<SurveyResponse>> {
        self.load().await
    }

    async fn submit_response(
        &self,
        _submission: &ValidatedSubmission,
    ) -> SurveyResult<SubmissionAck> {
        tracing::warn!("rejecting submission: {} is read-only", self.path.display());
        Err(SurveyError::ReadOnlySource(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::sample_responses;
    use crate::submission::SurveyAnswers;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[tokio::test]
    async fn reads_responses_from_disk() {
        let json = serde_json::to_string(&sample_responses()).unwrap();
        let file = write_temp(&json);
        let source = JsonFileSource::new(file.path());

        let responses = source.fetch_responses().await.expect("readable file");
        assert_eq!(responses, sample_responses());

        let summary = source.fetch_summary().await.expect("summary");
        assert_eq!(summary.total_responses, 10);
        assert_eq!(summary.completion_rate, "100%");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let source = JsonFileSource::new("/nonexistent/survey/responses.json");
        let err = source.fetch_responses().await.expect_err("should fail");
        assert!(matches!(err, SurveyError::FileRead(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_a_deserialization_error() {
        let file = write_temp("[{\"id\": 1}]");
        let source = JsonFileSource::new(file.path());
        let err = source.fetch_responses().await.expect_err("should fail");
        assert!(matches!(err, SurveyError::Deserialization(_)));
    }

    #[tokio::test]
    async fn submissions_are_rejected() {
        let source = JsonFileSource::new("unused.json");
        let submission = SurveyAnswers {
            satisfaction: "5".into(),
            improvement: "pricing".into(),
            recommendation: "9".into(),
            comments: None,
        }
        .validate()
        .unwrap();
        let err = source.submit_response(&submission).await.unwrap_err();
        assert!(matches!(err, SurveyError::ReadOnlySource("json-file")));
    }
}
