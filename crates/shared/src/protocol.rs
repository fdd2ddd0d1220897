use serde::{Deserialize, Serialize};

use crate::domain::AnalysisOutcome;

/// Path of the classification endpoint, relative to the backend base URL.
pub const PREDICT_PATH: &str = "/predict";

#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    /// A non-empty `error` wins over any label; otherwise the label is mapped
    /// with a missing field treated as the empty string.
    pub fn into_outcome(self) -> AnalysisOutcome {
        if let Some(error) = self.error.filter(|error| !error.is_empty()) {
            return AnalysisOutcome::Failed(error);
        }
        AnalysisOutcome::from_label(self.sentiment.as_deref().unwrap_or_default())
    }
}
