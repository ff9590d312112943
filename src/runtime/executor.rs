//! Tutor runtime executor

use super::traits::Responder;
use super::{DraftBuffer, SharedTranscript, TutorEvent};

use crate::responses::ResponsePayload;
use crate::state_machine::{
    transition, Effect, Event, TransitionError, TutorContext, TutorState,
};
use crate::transcript::Message;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Event loop that drives a single tutor session.
///
/// Generic over the responder so tests can swap out the simulated delay.
pub struct TutorRuntime<R>
where
    R: Responder + 'static,
{
    context: TutorContext,
    state: TutorState,
    responder: Arc<R>,
    transcript: SharedTranscript,
    draft: DraftBuffer,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<TutorEvent>,
}

impl<R> TutorRuntime<R>
where
    R: Responder + 'static,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        context: TutorContext,
        state: TutorState,
        responder: R,
        transcript: SharedTranscript,
        draft: DraftBuffer,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::Sender<Event>,
        broadcast_tx: broadcast::Sender<TutorEvent>,
    ) -> Self {
        Self {
            context,
            state,
            responder: Arc::new(responder),
            transcript,
            draft,
            event_rx,
            event_tx,
            broadcast_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(session_id = %self.context.session_id, "Starting tutor runtime");

        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.process_event(event);
                }
                else => break,
            }
        }

        tracing::info!(session_id = %self.context.session_id, "Tutor runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        if let Event::ResponseFailed { message } = &event {
            tracing::warn!(error = %message, "Turn failed, substituting fallback response");
        }

        // Pure state transition
        let result = match transition(&self.state, &self.context, event) {
            Ok(r) => r,
            // Rejected submissions are silent no-ops: no message, no
            // broadcast, no state change.
            Err(e @ (TransitionError::TutorBusy | TransitionError::EmptySubmission)) => {
                tracing::debug!(reason = %e, "Submission dropped");
                return;
            }
            Err(e @ TransitionError::InvalidTransition(_)) => {
                tracing::warn!(error = %e, "Dropping event");
                return;
            }
        };

        let was_busy = self.state.is_busy();
        self.state = result.new_state;
        if self.state.is_busy() != was_busy {
            let _ = self.broadcast_tx.send(TutorEvent::StateChange {
                awaiting: self.state.is_busy(),
            });
        }

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::AppendUserMessage {
                text,
                has_attachment,
            } => {
                // Draft empties only on accepted submissions; rejections
                // never produce this effect.
                self.draft.clear();

                let mut message = Message::user(text);
                if has_attachment {
                    message = message.with_attachment();
                }
                self.append_and_broadcast(message);
            }

            Effect::AppendAssistantMessage { payload } => {
                let ResponsePayload { text, diagrams } = payload;
                self.append_and_broadcast(Message::assistant(text, diagrams));
            }

            Effect::RequestResponse { prompt } => {
                self.request_response(prompt);
            }

            Effect::ClearTranscript => {
                self.transcript.clear();
                let _ = self.broadcast_tx.send(TutorEvent::Cleared);
            }

            Effect::NotifyTurnComplete => {
                let _ = self.broadcast_tx.send(TutorEvent::TurnComplete);
            }
        }
    }

    fn append_and_broadcast(&self, message: Message) {
        let message = self.transcript.append(message);
        let _ = self.broadcast_tx.send(TutorEvent::Message { message });
    }

    /// Spawn response resolution as a background task.
    ///
    /// The nested spawn converts a responder panic into `ResponseFailed`
    /// rather than wedging the session in `AwaitingResponse`.
    fn request_response(&self, prompt: String) {
        let responder = Arc::clone(&self.responder);
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let task = tokio::spawn(async move { responder.respond(&prompt).await });

            let event = match task.await {
                Ok(Ok(payload)) => Event::ResponseReady { payload },
                Ok(Err(e)) => Event::ResponseFailed {
                    message: e.to_string(),
                },
                Err(e) => Event::ResponseFailed {
                    message: format!("response task panicked: {e}"),
                },
            };

            let _ = event_tx.send(event).await;
        });
    }
}
