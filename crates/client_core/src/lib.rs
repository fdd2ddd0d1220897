use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::AnalysisOutcome,
    protocol::{PredictRequest, PredictResponse, PREDICT_PATH},
};
use tracing::debug;

pub mod config;
pub mod controller;
pub mod error;

pub use config::{load_settings, ClientSettings};
pub use controller::{InteractionController, InteractionState, Phase, GENERIC_FAILURE_MESSAGE};
pub use error::TransportError;

/// Result of one exchange with the backend. Domain failures are carried as
/// `Ok(AnalysisOutcome::Failed(_))`; only transport failures are `Err`.
pub type AnalysisResult = Result<AnalysisOutcome, TransportError>;

#[async_trait]
pub trait SentimentTransport: Send + Sync {
    /// Performs exactly one exchange. Callers pass text that is already
    /// trimmed and non-empty.
    async fn submit(&self, text: &str) -> AnalysisResult;
}

#[derive(Clone)]
pub struct SentimentClient {
    http: Client,
    predict_url: String,
}

impl SentimentClient {
    pub fn new(backend_url: impl AsRef<str>) -> Self {
        Self {
            http: Client::new(),
            predict_url: format!(
                "{}{PREDICT_PATH}",
                backend_url.as_ref().trim_end_matches('/')
            ),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(&settings.backend_url)
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[async_trait]
impl SentimentTransport for SentimentClient {
    async fn submit(&self, text: &str) -> AnalysisResult {
        debug!(url = %self.predict_url, chars = text.chars().count(), "posting analysis request");
        let res = self
            .http
            .post(&self.predict_url)
            .json(&PredictRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body: PredictResponse = res.json().await?;
        Ok(body.into_outcome())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
