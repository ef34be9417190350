use crate::submission::SubmissionErrors;

#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
    #[error("survey submission is invalid: {0}")]
    Validation(SubmissionErrors),
    #[error("data source `{0}` does not accept submissions")]
    ReadOnlySource(&'static str),
    #[error("failed to read responses file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize responses: {0}")]
    Deserialization(serde_json::Error),
}

pub type SurveyResult<T> = std::result::Result<T, SurveyError>;
