//! Survey response records.
//!
//! Responses are produced by a data source and are read-only within the core:
//! filtering and export borrow them and never modify a record.
//!
//! Numeric fields are deliberately wider than their valid ranges. A record with
//! an out-of-range rating is still a record; it fails to match rating filters
//! and exports unchanged rather than being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One customer's answer set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Opaque unique identifier, e.g. `resp-001`.
    pub id: String,

    /// ISO 8601 timestamp of the submission.
    pub date: String,

    /// Satisfaction rating, expected in 1..=5.
    pub satisfaction: i32,

    /// Area the customer would most like improved.
    pub improvement: ImprovementArea,

    /// Likelihood to recommend, expected in 0..=10.
    pub recommendation: i32,

    /// Free-text comments; empty when the customer left none.
    #[serde(default)]
    pub comments: String,
}

impl SurveyResponse {
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// Feedback category chosen by the customer.
///
/// Unrecognised codes are kept verbatim in [`ImprovementArea::Other`] so that
/// data from a newer form version still round-trips and displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ImprovementArea {
    ProductQuality,
    Pricing,
    Shipping,
    WebsiteUx,
    CustomerService,
    Other(String),
}

impl ImprovementArea {
    /// The recognised areas in form order.
    pub const KNOWN: [ImprovementArea; 5] = [
        ImprovementArea::ProductQuality,
        ImprovementArea::Pricing,
        ImprovementArea::Shipping,
        ImprovementArea::WebsiteUx,
        ImprovementArea::CustomerService,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "product_quality" => Self::ProductQuality,
            "pricing" => Self::Pricing,
            "shipping" => Self::Shipping,
            "website_ux" => Self::WebsiteUx,
            "customer_service" => Self::CustomerService,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The stored code, e.g. `website_ux`.
    pub fn code(&self) -> &str {
        match self {
            Self::ProductQuality => "product_quality",
            Self::Pricing => "pricing",
            Self::Shipping => "shipping",
            Self::WebsiteUx => "website_ux",
            Self::CustomerService => "customer_service",
            Self::Other(code) => code,
        }
    }

    /// Human-readable label; unrecognised codes fall back to the raw code.
    pub fn label(&self) -> &str {
        match self {
            Self::ProductQuality => "Product Quality",
            Self::Pricing => "Pricing",
            Self::Shipping => "Shipping",
            Self::WebsiteUx => "Website Experience",
            Self::CustomerService => "Customer Service",
            Self::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ImprovementArea {
    fn from(code: String) -> Self {
        match Self::from_code(&code) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

impl From<ImprovementArea> for String {
    fn from(area: ImprovementArea) -> Self {
        match area {
            ImprovementArea::Other(code) => code,
            known => known.code().to_owned(),
        }
    }
}

impl fmt::Display for ImprovementArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wording used by the survey form for each satisfaction rating.
pub fn satisfaction_label(satisfaction: i32) -> Option<&'static str> {
    match satisfaction {
        5 => Some("Very Satisfied"),
        4 => Some("Satisfied"),
        3 => Some("Neutral"),
        2 => Some("Dissatisfied"),
        1 => Some("Very Dissatisfied"),
        _ => None,
    }
}
