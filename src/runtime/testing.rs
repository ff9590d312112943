//! Mock responders and engine tests
//!
//! The mocks bypass the simulated thinking delay so turn cycles resolve
//! immediately (or under explicit test control).

use super::traits::{Responder, ResponderError};
use crate::classifier;
use crate::responses::{self, ResponsePayload};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

// ============================================================================
// Mock Responders
// ============================================================================

/// Responder with no thinking delay.
pub struct InstantResponder;

#[async_trait]
impl Responder for InstantResponder {
    async fn respond(&self, prompt: &str) -> Result<ResponsePayload, ResponderError> {
        Ok(responses::lookup(classifier::classify(prompt), prompt))
    }
}

/// Responder with a fixed delay (for busy-flag and race testing).
pub struct DelayedResponder {
    delay: Duration,
    /// Notified when resolution starts (for test synchronization)
    pub started: Arc<Notify>,
}

impl DelayedResponder {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl Responder for DelayedResponder {
    async fn respond(&self, prompt: &str) -> Result<ResponsePayload, ResponderError> {
        self.started.notify_waiters();
        tokio::time::sleep(self.delay).await;
        Ok(responses::lookup(classifier::classify(prompt), prompt))
    }
}

/// Responder that always fails.
pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn respond(&self, _prompt: &str) -> Result<ResponsePayload, ResponderError> {
        Err(ResponderError::Generation("simulated failure".to_string()))
    }
}

/// Responder that panics mid-resolution.
pub struct PanickingResponder;

#[async_trait]
impl Responder for PanickingResponder {
    async fn respond(&self, _prompt: &str) -> Result<ResponsePayload, ResponderError> {
        panic!("simulated responder panic");
    }
}

// ============================================================================
// Test Engine Harness
// ============================================================================

use super::{TutorEngine, TutorEvent};
use crate::state_machine::TutorContext;
use tokio::sync::broadcast;

/// Install a fmt subscriber so `RUST_LOG` works under `cargo test`.
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_engine=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A spawned engine plus a subscribed event receiver.
pub struct TestEngine {
    pub engine: TutorEngine,
    pub events: broadcast::Receiver<TutorEvent>,
}

impl TestEngine {
    pub fn spawn<R: Responder + 'static>(responder: R) -> Self {
        init_tracing();
        let engine = TutorEngine::spawn(TutorContext::new("test-session"), responder);
        let events = engine.subscribe();
        Self { engine, events }
    }

    /// Wait for a `TurnComplete` event with timeout.
    pub async fn wait_for_turn_complete(&mut self, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(50), self.events.recv()).await {
                Ok(Ok(TutorEvent::TurnComplete)) => return true,
                Ok(Ok(_)) => continue,
                _ => continue,
            }
        }
        false
    }

    /// Wait for a `StateChange` with the given busy flag.
    pub async fn wait_for_busy(&mut self, awaiting: bool, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(50), self.events.recv()).await {
                Ok(Ok(TutorEvent::StateChange { awaiting: a })) if a == awaiting => return true,
                Ok(Ok(_)) => continue,
                _ => continue,
            }
        }
        false
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::ChartAttachment;
    use crate::transcript::{DiagramTag, Role};

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_instant_responder_classifies() {
        let payload = InstantResponder.respond("tell me about risk").await.unwrap();
        assert!(payload.text.starts_with("COMPREHENSIVE RISK MANAGEMENT FRAMEWORK"));
    }

    /// A risk question yields the risk framework with its two diagrams.
    #[tokio::test]
    async fn test_risk_question_turn() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine.submit("How should I manage risk?").await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, Role::User);
        assert_eq!(msgs[0].text, "How should I manage risk?");
        assert_eq!(msgs[1].role, Role::Assistant);
        assert!(msgs[1]
            .text
            .starts_with("COMPREHENSIVE RISK MANAGEMENT FRAMEWORK"));
        assert_eq!(
            msgs[1].diagrams,
            vec![DiagramTag::SupportResistance, DiagramTag::MarketStructure]
        );
        assert_eq!(rt.engine.turn_count(), 1);
    }

    /// An unrecognized prompt falls through to the general analysis with the
    /// prompt uppercased in the header.
    #[tokio::test]
    async fn test_unrecognized_prompt_gets_general_analysis() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine.submit("xyzzy").await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert!(msgs[1]
            .text
            .starts_with("COMPREHENSIVE TRADING ANALYSIS: XYZZY"));
        assert_eq!(
            msgs[1].diagrams,
            vec![DiagramTag::SupportResistance, DiagramTag::CandlestickAdvanced]
        );
    }

    /// Whitespace-only submission is a silent no-op.
    #[tokio::test]
    async fn test_empty_submission_is_noop() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine.submit("   \n  ").await.unwrap();

        assert!(!rt.wait_for_turn_complete(Duration::from_millis(200)).await);
        assert!(rt.engine.messages().is_empty());
    }

    /// A second submission while a turn is in flight is dropped.
    #[tokio::test]
    async fn test_single_flight() {
        let responder = DelayedResponder::new(Duration::from_millis(300));
        let started = responder.started.clone();

        let mut rt = TestEngine::spawn(responder);
        rt.engine.submit("first question").await.unwrap();

        started.notified().await;
        rt.engine.submit("second question").await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        // Only the first turn exists: one user message, one assistant reply
        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].text, "first question");

        // The second submission produced no second turn
        assert!(!rt.wait_for_turn_complete(Duration::from_millis(200)).await);
        assert_eq!(rt.engine.messages().len(), 2);
    }

    /// The busy flag flips on and back off across a turn.
    #[tokio::test]
    async fn test_busy_flag_round_trip() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine.submit("hello").await.unwrap();

        assert!(rt.wait_for_busy(true, TIMEOUT).await);
        assert!(rt.wait_for_busy(false, TIMEOUT).await);
    }

    /// Clear empties the transcript and leaves the engine usable.
    #[tokio::test]
    async fn test_clear_empties_transcript() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine.submit("hello").await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
        assert_eq!(rt.engine.messages().len(), 2);

        rt.engine.set_draft("half-typed question");
        rt.engine.clear().await.unwrap();
        assert!(rt.engine.draft().is_empty());

        // Wait for the Cleared event before inspecting
        let deadline = tokio::time::Instant::now() + TIMEOUT;
        let mut cleared = false;
        while tokio::time::Instant::now() < deadline && !cleared {
            if let Ok(Ok(TutorEvent::Cleared)) =
                tokio::time::timeout(Duration::from_millis(50), rt.events.recv()).await
            {
                cleared = true;
            }
        }
        assert!(cleared);
        assert!(rt.engine.messages().is_empty());
        assert_eq!(rt.engine.turn_count(), 0);

        // Engine still accepts new turns
        rt.engine.submit("again").await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
        assert_eq!(rt.engine.messages().len(), 2);
    }

    /// Clearing mid-flight does not cancel the turn: its assistant message
    /// lands in the freshly cleared transcript.
    #[tokio::test]
    async fn test_clear_mid_flight_keeps_turn_alive() {
        let responder = DelayedResponder::new(Duration::from_millis(300));
        let started = responder.started.clone();

        let mut rt = TestEngine::spawn(responder);
        rt.engine.submit("candlestick patterns").await.unwrap();

        started.notified().await;
        rt.engine.clear().await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        // Only the assistant reply survives; the user message was cleared
        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].role, Role::Assistant);
        assert!(msgs[0].text.contains("CANDLESTICK"));
    }

    /// A failed turn appends the apology fallback and returns to idle.
    #[tokio::test]
    async fn test_failure_appends_fallback() {
        let mut rt = TestEngine::spawn(FailingResponder);
        rt.engine.submit("anything").await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1].text, responses::FALLBACK_TEXT);
        assert!(msgs[1].diagrams.is_empty());

        // Engine recovered: next turn works
        rt.engine.submit("still alive?").await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
    }

    /// A responder panic resolves the turn as a failure instead of leaving
    /// the session stuck busy.
    #[tokio::test]
    async fn test_panic_resolves_as_failure() {
        let mut rt = TestEngine::spawn(PanickingResponder);
        rt.engine.submit("boom").await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1].text, responses::FALLBACK_TEXT);
    }

    /// Attachment-only submission shows the upload placeholder.
    #[tokio::test]
    async fn test_attachment_only_submission() {
        let mut rt = TestEngine::spawn(InstantResponder);
        rt.engine
            .submit_with_attachment(
                "",
                ChartAttachment {
                    data: "aGVsbG8=".to_string(),
                    media_type: "image/png".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].text, "Chart uploaded for comprehensive analysis.");
        assert!(msgs[0].has_attachment);
    }

    /// Draft round-trip: set, read, submit; emptied once accepted.
    #[tokio::test]
    async fn test_draft_submission() {
        let mut rt = TestEngine::spawn(InstantResponder);

        rt.engine.set_draft("what about money management?");
        assert_eq!(rt.engine.draft(), "what about money management?");

        rt.engine.submit_draft().await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
        assert!(rt.engine.draft().is_empty());
        let msgs = rt.engine.messages();
        assert_eq!(msgs[0].text, "what about money management?");
        assert!(msgs[1]
            .text
            .starts_with("COMPREHENSIVE RISK MANAGEMENT FRAMEWORK"));
    }

    /// A draft submitted while a turn is in flight is rejected without
    /// destroying the typed input.
    #[tokio::test]
    async fn test_draft_survives_busy_rejection() {
        let responder = DelayedResponder::new(Duration::from_millis(300));
        let started = responder.started.clone();

        let mut rt = TestEngine::spawn(responder);
        rt.engine.submit("first question").await.unwrap();
        started.notified().await;

        rt.engine.set_draft("half-typed follow-up");
        rt.engine.submit_draft().await.unwrap();

        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        // The rejection was a transcript no-op and the draft is intact
        assert_eq!(rt.engine.messages().len(), 2);
        assert_eq!(rt.engine.draft(), "half-typed follow-up");

        // The surviving draft can still be submitted as the next turn
        rt.engine.submit_draft().await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
        assert!(rt.engine.draft().is_empty());
        assert_eq!(rt.engine.messages()[2].text, "half-typed follow-up");
    }

    /// A whitespace-only draft is rejected and stays in the input.
    #[tokio::test]
    async fn test_whitespace_draft_survives_rejection() {
        let mut rt = TestEngine::spawn(InstantResponder);

        rt.engine.set_draft("   ");
        rt.engine.submit_draft().await.unwrap();

        assert!(!rt.wait_for_turn_complete(Duration::from_millis(200)).await);
        assert!(rt.engine.messages().is_empty());
        assert_eq!(rt.engine.draft(), "   ");
    }

    /// Consecutive turns accumulate in order.
    #[tokio::test]
    async fn test_consecutive_turns_accumulate() {
        let mut rt = TestEngine::spawn(InstantResponder);

        rt.engine.submit("first").await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);
        rt.engine.submit("second").await.unwrap();
        assert!(rt.wait_for_turn_complete(TIMEOUT).await);

        let msgs = rt.engine.messages();
        assert_eq!(msgs.len(), 4);
        assert_eq!(msgs[0].text, "first");
        assert_eq!(msgs[2].text, "second");
        assert_eq!(rt.engine.turn_count(), 2);

        // Timestamps are non-decreasing across the log
        for pair in msgs.windows(2) {
            assert!(pair[1].timestamp >= pair[0].timestamp);
        }
    }
}
