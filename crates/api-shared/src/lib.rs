//! # API Shared
//!
//! Shared request/response types for the survey APIs.
//!
//! Contains:
//! - Wire types (`types` module) with OpenAPI schemas
//! - Conversions from `survey-core` domain types
//! - `HealthService`
//!
//! Used by `api-rest` and by the CLI's `--json` output.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
