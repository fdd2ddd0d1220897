//! Submission state machine around a single in-flight analysis request.

use shared::domain::{AnalysisOutcome, AnalysisRequest};
use tracing::{debug, warn};

use crate::{AnalysisResult, SentimentTransport};

/// Shown when a transport failure carries no usable message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong talking to the backend.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub input_text: String,
    pub is_submitting: bool,
    pub outcome: AnalysisOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Resolved(AnalysisOutcome),
}

/// Sole owner of [`InteractionState`]. All transitions take `&mut self`, so a
/// plain flag is enough to keep at most one request in flight.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
    resolved: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn input_text(&self) -> &str {
        &self.state.input_text
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn outcome(&self) -> &AnalysisOutcome {
        &self.state.outcome
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.outcome.failure_message()
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_submitting {
            Phase::Submitting
        } else if self.resolved {
            Phase::Resolved(self.state.outcome.clone())
        } else {
            Phase::Idle
        }
    }

    /// Stores the text verbatim. Never touches the outcome or the in-flight flag.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Direct access for widgets that edit the buffer in place.
    pub fn input_text_mut(&mut self) -> &mut String {
        &mut self.state.input_text
    }

    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting && !self.state.input_text.trim().is_empty()
    }

    /// Accepts a submission unless the input is blank or one is already in
    /// flight. On acceptance the flag is raised before the caller performs
    /// any I/O and the returned request carries the trimmed text.
    pub fn submit_requested(&mut self) -> Option<AnalysisRequest> {
        if self.state.is_submitting {
            debug!("submission ignored: request already in flight");
            return None;
        }
        let request = AnalysisRequest::from_input(&self.state.input_text).ok()?;

        self.state.is_submitting = true;
        self.state.outcome = AnalysisOutcome::Unknown;
        debug!(chars = request.text().chars().count(), "submission accepted");
        Some(request)
    }

    /// Single exit point for a submission attempt. Applies the result and
    /// then releases the in-flight flag on every path.
    pub fn resolve(&mut self, result: AnalysisResult) -> &AnalysisOutcome {
        match result {
            Ok(outcome) => self.submit_succeeded(outcome),
            Err(err) => {
                warn!(kind = "transport", reason = err.kind(), "analysis request failed: {err}");
                self.submit_failed(err.user_message().as_deref());
            }
        }
        self.state.is_submitting = false;
        self.resolved = true;
        &self.state.outcome
    }

    /// Runs one full attempt against `transport`. Returns `None` when the
    /// guard rejected the submission and no request was sent.
    pub async fn submit<T>(&mut self, transport: &T) -> Option<&AnalysisOutcome>
    where
        T: SentimentTransport + ?Sized,
    {
        let request = self.submit_requested()?;
        let result = transport.submit(request.text()).await;
        Some(self.resolve(result))
    }

    fn submit_succeeded(&mut self, outcome: AnalysisOutcome) {
        if let AnalysisOutcome::Failed(message) = &outcome {
            warn!(kind = "domain", "backend declined to classify: {message}");
        }
        self.state.outcome = outcome;
    }

    fn submit_failed(&mut self, message: Option<&str>) {
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE);
        self.state.outcome = AnalysisOutcome::Failed(message.to_string());
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
