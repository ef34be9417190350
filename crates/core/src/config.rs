//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! service. Request handling never reads environment variables.

use crate::constants::{DEFAULT_MOCK_DELAY_MS, DEFAULT_REST_ADDR, MAX_MOCK_DELAY_MS};
use crate::error::{SurveyError, SurveyResult};
use crate::source::{JsonFileSource, MockSurveySource, SurveyDataSource};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub const ENV_REST_ADDR: &str = "SURVEY_REST_ADDR";
pub const ENV_MOCK_DELAY_MS: &str = "SURVEY_MOCK_DELAY_MS";
pub const ENV_PREVIEW_MODE: &str = "SURVEY_PREVIEW_MODE";
pub const ENV_RESPONSES_FILE: &str = "SURVEY_RESPONSES_FILE";

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    rest_addr: String,
    mock_delay: Duration,
    preview_mode: bool,
    responses_file: Option<PathBuf>,
}

impl CoreConfig {
    pub fn new(
        rest_addr: String,
        mock_delay: Duration,
        preview_mode: bool,
        responses_file: Option<PathBuf>,
    ) -> SurveyResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(SurveyError::InvalidConfig {
                key: ENV_REST_ADDR,
                reason: "address cannot be empty".into(),
            });
        }
        if mock_delay > Duration::from_millis(MAX_MOCK_DELAY_MS) {
            return Err(SurveyError::InvalidConfig {
                key: ENV_MOCK_DELAY_MS,
                reason: format!("delay exceeds maximum of {MAX_MOCK_DELAY_MS} ms"),
            });
        }

        Ok(Self {
            rest_addr,
            mock_delay,
            preview_mode,
            responses_file,
        })
    }

    /// Reads every setting from the process environment.
    ///
    /// Call this once from `main`, after `dotenvy` has loaded any `.env` file.
    pub fn from_env() -> SurveyResult<Self> {
        Self::new(
            std::env::var(ENV_REST_ADDR).unwrap_or_else(|_| DEFAULT_REST_ADDR.into()),
            mock_delay_from_env_value(std::env::var(ENV_MOCK_DELAY_MS).ok())?,
            preview_mode_from_env_value(std::env::var(ENV_PREVIEW_MODE).ok())?,
            std::env::var(ENV_RESPONSES_FILE)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        )
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    /// Builds the data source this configuration selects: the JSON file when
    /// one is configured, otherwise the mock.
    pub fn data_source(&self) -> Arc<dyn SurveyDataSource> {
        match &self.responses_file {
            Some(path) => Arc::new(JsonFileSource::new(path.clone())),
            None => Arc::new(MockSurveySource::new(self.mock_delay)),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rest_addr: DEFAULT_REST_ADDR.into(),
            mock_delay: Duration::from_millis(DEFAULT_MOCK_DELAY_MS),
            preview_mode: false,
            responses_file: None,
        }
    }
}

/// Parse the mock delay from an optional millisecond count.
///
/// `None` or blank input yields the default delay.
pub fn mock_delay_from_env_value(value: Option<String>) -> SurveyResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let millis = match value {
        Some(v) => v.parse::<u64>().map_err(|_| SurveyError::InvalidConfig {
            key: ENV_MOCK_DELAY_MS,
            reason: format!("expected a whole number of milliseconds, got '{v}'"),
        })?,
        None => DEFAULT_MOCK_DELAY_MS,
    };
    Ok(Duration::from_millis(millis))
}

/// Parse the preview flag; accepts `true`/`false`/`1`/`0`/`yes`/`no`.
pub fn preview_mode_from_env_value(value: Option<String>) -> SurveyResult<bool> {
    let Some(value) = value.map(|v| v.trim().to_ascii_lowercase()) else {
        return Ok(false);
    };
    match value.as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        other => Err(SurveyError::InvalidConfig {
            key: ENV_PREVIEW_MODE,
            reason: format!("expected true or false, got '{other}'"),
        }),
    }
}
