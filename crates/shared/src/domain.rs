use std::fmt;

use crate::error::InputError;

/// Text accepted for classification. Always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    pub fn from_input(raw: &str) -> Result<Self, InputError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(InputError::Blank);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisOutcome {
    Positive,
    Negative,
    #[default]
    Unknown,
    Failed(String),
}

impl AnalysisOutcome {
    /// Maps a backend label onto an outcome; anything other than
    /// positive/negative (case-insensitive) is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Unknown,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label shown on the result card.
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Unknown | Self::Failed(_) => "Awaiting analysis",
        }
    }
}

impl fmt::Display for AnalysisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
            Self::Unknown => f.write_str("unknown"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisOutcome, AnalysisRequest};
    use crate::error::InputError;

    #[test]
    fn request_trims_surrounding_whitespace() {
        let request = AnalysisRequest::from_input("  I love this!\n").expect("request");
        assert_eq!(request.text(), "I love this!");
    }

    #[test]
    fn request_rejects_whitespace_only_input() {
        assert_eq!(AnalysisRequest::from_input("   \t\n"), Err(InputError::Blank));
        assert_eq!(AnalysisRequest::from_input(""), Err(InputError::Blank));
    }

    #[test]
    fn labels_map_case_insensitively() {
        assert_eq!(AnalysisOutcome::from_label("Positive"), AnalysisOutcome::Positive);
        assert_eq!(AnalysisOutcome::from_label("NEGATIVE"), AnalysisOutcome::Negative);
        assert_eq!(AnalysisOutcome::from_label("neutral"), AnalysisOutcome::Unknown);
        assert_eq!(AnalysisOutcome::from_label(""), AnalysisOutcome::Unknown);
    }

    #[test]
    fn default_outcome_is_unknown() {
        assert_eq!(AnalysisOutcome::default(), AnalysisOutcome::Unknown);
        assert_eq!(AnalysisOutcome::default().display_label(), "Awaiting analysis");
    }

    #[test]
    fn failed_outcome_exposes_its_message() {
        let outcome = AnalysisOutcome::Failed("boom".into());
        assert!(outcome.is_failed());
        assert_eq!(outcome.failure_message(), Some("boom"));
        assert_eq!(outcome.to_string(), "failed: boom");
        assert_eq!(AnalysisOutcome::Positive.failure_message(), None);
    }
}
