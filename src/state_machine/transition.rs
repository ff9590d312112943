//! Pure state transition function
//!
//! Given the same state and event this always produces the same next state
//! and effects, with no I/O. All side effects (transcript mutation, the
//! simulated-latency response resolution, observer notification) are
//! expressed as [`Effect`]s for the runtime to execute.

use super::{Effect, Event, TutorContext, TutorState};
use crate::responses;
use thiserror::Error;

/// User-visible text substituted when a submission carries an attachment
/// but no text.
pub const ATTACHMENT_PLACEHOLDER: &str = "Chart uploaded for comprehensive analysis.";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: TutorState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: TutorState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
///
/// `TutorBusy` and `EmptySubmission` are silent no-ops at the engine
/// boundary; they are errors here so the runtime can tell them apart.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("a turn is already in flight, submission rejected")]
    TutorBusy,
    #[error("empty submission with no attachment")]
    EmptySubmission,
    #[error("invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
pub fn transition(
    state: &TutorState,
    _context: &TutorContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission handling
        // ============================================================

        // Idle + Submit -> AwaitingResponse (optimistic user insert)
        (TutorState::Idle, Event::Submit { text, attachment }) => {
            let trimmed = text.trim();
            if trimmed.is_empty() && attachment.is_none() {
                return Err(TransitionError::EmptySubmission);
            }

            let display_text = if trimmed.is_empty() {
                ATTACHMENT_PLACEHOLDER
            } else {
                trimmed
            };

            Ok(TransitionResult::new(TutorState::AwaitingResponse)
                .with_effect(Effect::append_user(display_text, attachment.is_some()))
                .with_effect(Effect::request_response(trimmed)))
        }

        // Busy + Submit -> reject (single-flight: no queueing, no cancel)
        (TutorState::AwaitingResponse, Event::Submit { .. }) => Err(TransitionError::TutorBusy),

        // ============================================================
        // Turn resolution
        // ============================================================

        (TutorState::AwaitingResponse, Event::ResponseReady { payload }) => {
            Ok(TransitionResult::new(TutorState::Idle)
                .with_effect(Effect::append_assistant(payload))
                .with_effect(Effect::NotifyTurnComplete))
        }

        // Any fault during classification/lookup surfaces only as a
        // fallback assistant message; never propagated to the submitter.
        (TutorState::AwaitingResponse, Event::ResponseFailed { .. }) => {
            Ok(TransitionResult::new(TutorState::Idle)
                .with_effect(Effect::append_assistant(responses::fallback()))
                .with_effect(Effect::NotifyTurnComplete))
        }

        // ============================================================
        // Clear
        // ============================================================

        // Callable in any state. Clearing while AwaitingResponse does NOT
        // cancel the in-flight turn: it runs to completion and appends its
        // message after the clear. Accepted race, kept as the product
        // behaves today.
        (state, Event::Clear) => {
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::ClearTranscript))
        }

        // ============================================================
        // Invalid transitions (stale completions while Idle)
        // ============================================================

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "no transition from {state:?} with event {event:?}"
        ))),
    }
}
