use super::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;

use crate::TransportError;

struct ScriptedTransport {
    result: AnalysisResult,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn returning(result: AnalysisResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentTransport for ScriptedTransport {
    async fn submit(&self, text: &str) -> AnalysisResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(text.to_string());
        self.result.clone()
    }
}

#[test]
fn starts_idle_with_unknown_outcome() {
    let controller = InteractionController::new();
    assert_eq!(controller.state(), &InteractionState::default());
    assert_eq!(controller.input_text(), "");
    assert!(!controller.is_submitting());
    assert_eq!(controller.outcome(), &AnalysisOutcome::Unknown);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[test]
fn accepted_submission_raises_flag_before_any_io() {
    let mut controller = InteractionController::new();
    controller.set_input_text("  I love this!  ");

    let request = controller.submit_requested().expect("accepted");

    assert_eq!(request.text(), "I love this!");
    assert!(controller.is_submitting());
    assert_eq!(controller.phase(), Phase::Submitting);
    assert_eq!(controller.input_text(), "  I love this!  ");
}

#[test]
fn blank_input_is_a_no_op() {
    for input in ["", "   ", "\n\t "] {
        let mut controller = InteractionController::new();
        controller.set_input_text(input);
        let before = controller.state().clone();

        assert!(controller.submit_requested().is_none());
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.phase(), Phase::Idle);
    }
}

#[test]
fn duplicate_request_while_pending_is_rejected() {
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");

    assert!(controller.submit_requested().is_some());
    let pending = controller.state().clone();
    assert!(controller.submit_requested().is_none());
    assert_eq!(controller.state(), &pending);
}

#[test]
fn typing_does_not_touch_outcome_or_flag() {
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");
    controller.submit_requested().expect("accepted");
    controller.resolve(Ok(AnalysisOutcome::Negative));

    controller.set_input_text("hello again");
    assert_eq!(controller.outcome(), &AnalysisOutcome::Negative);
    assert!(!controller.is_submitting());

    controller.input_text_mut().push('!');
    assert_eq!(controller.input_text(), "hello again!");
    assert_eq!(controller.outcome(), &AnalysisOutcome::Negative);
}

#[test]
fn new_submission_clears_previous_error() {
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");
    controller.submit_requested().expect("accepted");
    controller.resolve(Err(TransportError::Status(503)));
    assert_eq!(controller.last_error(), Some("Backend request failed"));

    controller.submit_requested().expect("accepted again");
    assert_eq!(controller.last_error(), None);
    assert_eq!(controller.outcome(), &AnalysisOutcome::Unknown);
}

#[test]
fn blank_transport_detail_falls_back_to_generic_text() {
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");

    for err in [
        TransportError::Network(String::new()),
        TransportError::MalformedResponse("  ".into()),
        TransportError::WorkerUnavailable(String::new()),
    ] {
        controller.submit_requested().expect("accepted");
        controller.resolve(Err(err));
        assert_eq!(
            controller.outcome(),
            &AnalysisOutcome::Failed(GENERIC_FAILURE_MESSAGE.into())
        );
        assert!(!controller.is_submitting());
    }
}

#[test]
fn transport_detail_is_surfaced_when_present() {
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");
    controller.submit_requested().expect("accepted");

    controller.resolve(Err(TransportError::Network("connection refused".into())));
    assert_eq!(
        controller.outcome(),
        &AnalysisOutcome::Failed("Backend unreachable: connection refused".into())
    );
}

#[test]
fn can_submit_tracks_guard_conditions() {
    let mut controller = InteractionController::new();
    assert!(!controller.can_submit());
    controller.set_input_text("x");
    assert!(controller.can_submit());
    controller.submit_requested().expect("accepted");
    assert!(!controller.can_submit());
    controller.resolve(Ok(AnalysisOutcome::Unknown));
    assert!(controller.can_submit());
}

#[tokio::test]
async fn positive_scenario_ends_resolved_and_released() {
    let transport = ScriptedTransport::returning(Ok(AnalysisOutcome::Positive));
    let mut controller = InteractionController::new();
    controller.set_input_text("I love this!");

    let outcome = controller.submit(&transport).await.cloned();

    assert_eq!(outcome, Some(AnalysisOutcome::Positive));
    assert!(!controller.is_submitting());
    assert_eq!(controller.phase(), Phase::Resolved(AnalysisOutcome::Positive));
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.seen.lock().expect("seen lock").as_slice(),
        ["I love this!".to_string()]
    );
}

#[tokio::test]
async fn whitespace_scenario_issues_no_network_call() {
    let transport = ScriptedTransport::returning(Ok(AnalysisOutcome::Positive));
    let mut controller = InteractionController::new();
    controller.set_input_text("   ");
    let before = controller.state().clone();

    assert!(controller.submit(&transport).await.is_none());
    assert_eq!(controller.state(), &before);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn pending_submission_blocks_second_network_call() {
    let transport = ScriptedTransport::returning(Ok(AnalysisOutcome::Negative));
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");

    let pending = controller.submit_requested().expect("accepted");
    assert!(controller.submit(&transport).await.is_none());
    assert_eq!(transport.calls(), 0);

    let result = transport.submit(pending.text()).await;
    controller.resolve(result);
    assert_eq!(transport.calls(), 1);
    assert_eq!(controller.outcome(), &AnalysisOutcome::Negative);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn domain_failure_resolves_without_raising() {
    let transport =
        ScriptedTransport::returning(Ok(AnalysisOutcome::Failed("model unavailable".into())));
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");

    controller.submit(&transport).await;

    assert_eq!(
        controller.outcome(),
        &AnalysisOutcome::Failed("model unavailable".into())
    );
    assert_eq!(controller.last_error(), Some("model unavailable"));
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn transport_failure_releases_guard_and_allows_retry() {
    let failing = ScriptedTransport::returning(Err(TransportError::Status(500)));
    let mut controller = InteractionController::new();
    controller.set_input_text("hello");

    controller.submit(&failing).await;
    assert_eq!(
        controller.outcome(),
        &AnalysisOutcome::Failed("Backend request failed".into())
    );
    assert!(!controller.is_submitting());

    let healthy = ScriptedTransport::returning(Ok(AnalysisOutcome::Positive));
    controller.submit(&healthy).await;
    assert_eq!(controller.outcome(), &AnalysisOutcome::Positive);
    assert_eq!(healthy.calls(), 1);
}
