//! Validated primitive types shared across the survey crates.
//!
//! Values of these types are checked once at construction, so code holding one
//! can rely on its invariant without re-validating.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when parsing a bounded score.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score cannot be empty")]
    Empty,
    #[error("score is not a whole number: {0}")]
    NotANumber(String),
    #[error("score {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u8, max: u8 },
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Like [`NonEmptyText::new`], but maps blank input to `None`.
    ///
    /// Used for optional free-text fields where an empty box means "not answered".
    pub fn optional(input: Option<impl AsRef<str>>) -> Option<Self> {
        input.and_then(|s| Self::new(s).ok())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An integer score constrained to `MIN..=MAX`.
///
/// Survey answers arrive as text from forms and query strings; parsing through
/// this type is the only way to obtain a score, so a held value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score<const MIN: u8, const MAX: u8>(u8);

/// Satisfaction rating, 1 (very dissatisfied) to 5 (very satisfied).
pub type SatisfactionScore = Score<1, 5>;

/// Net-promoter style likelihood to recommend, 0 to 10.
pub type RecommendationScore = Score<0, 10>;

impl<const MIN: u8, const MAX: u8> Score<MIN, MAX> {
    pub const MIN: u8 = MIN;
    pub const MAX: u8 = MAX;

    /// Creates a score from an integer, rejecting values outside `MIN..=MAX`.
    pub fn new(value: i64) -> Result<Self, ScoreError> {
        if value < i64::from(MIN) || value > i64::from(MAX) {
            return Err(ScoreError::OutOfRange {
                value,
                min: MIN,
                max: MAX,
            });
        }
        // Range check above guarantees the value fits in u8.
        Ok(Self(value as u8))
    }

    /// Parses a score from text, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ScoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ScoreError::Empty);
        }
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ScoreError::NotANumber(trimmed.to_owned()))?;
        Self::new(value)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl<const MIN: u8, const MAX: u8> fmt::Display for Score<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const MIN: u8, const MAX: u8> FromStr for Score<MIN, MAX> {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const MIN: u8, const MAX: u8> serde::Serialize for Score<MIN, MAX> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de, const MIN: u8, const MAX: u8> serde::Deserialize<'de> for Score<MIN, MAX> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  hello  ").expect("valid text");
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert_eq!(NonEmptyText::new("   \t").unwrap_err(), TextError::Empty);
    }

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(NonEmptyText::optional(Some("  ")), None);
        assert_eq!(NonEmptyText::optional(None::<&str>), None);
        assert_eq!(
            NonEmptyText::optional(Some(" ok ")).map(NonEmptyText::into_inner),
            Some("ok".to_string())
        );
    }

    #[test]
    fn non_empty_text_deserialize_rejects_empty() {
        let err = serde_json::from_str::<NonEmptyText>("\"  \"").expect_err("should reject");
        assert!(err.to_string().contains("Text cannot be empty"));
    }

    #[test]
    fn satisfaction_score_bounds() {
        assert_eq!(SatisfactionScore::parse("1").unwrap().get(), 1);
        assert_eq!(SatisfactionScore::parse(" 5 ").unwrap().get(), 5);
        assert!(matches!(
            SatisfactionScore::parse("0"),
            Err(ScoreError::OutOfRange { value: 0, min: 1, max: 5 })
        ));
        assert!(matches!(
            SatisfactionScore::parse("6"),
            Err(ScoreError::OutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn recommendation_score_accepts_zero_and_ten() {
        assert_eq!(RecommendationScore::parse("0").unwrap().get(), 0);
        assert_eq!(RecommendationScore::parse("10").unwrap().get(), 10);
        assert!(RecommendationScore::parse("11").is_err());
    }

    #[test]
    fn score_rejects_blank_and_garbage() {
        assert_eq!(SatisfactionScore::parse(""), Err(ScoreError::Empty));
        assert_eq!(
            SatisfactionScore::parse("four"),
            Err(ScoreError::NotANumber("four".into()))
        );
    }

    #[test]
    fn score_serde_uses_plain_integer() {
        let score = RecommendationScore::new(9).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "9");
        assert!(serde_json::from_str::<RecommendationScore>("12").is_err());
    }
}
