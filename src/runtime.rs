//! Runtime for executing tutor sessions
//!
//! The runtime owns the event loop around the pure transition function:
//! it receives events over a channel, applies them to the current state,
//! and executes the resulting effects (transcript mutation, background
//! response resolution, observer notification).

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::TutorRuntime;
pub use traits::*;

use crate::state_machine::{ChartAttachment, Event, TutorContext, TutorState};
use crate::transcript::{Message, Transcript};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::sync::{broadcast, mpsc};

/// Events broadcast to engine observers (a UI layer, tests).
#[derive(Debug, Clone)]
pub enum TutorEvent {
    /// A message was appended to the transcript.
    Message { message: Message },
    /// The transcript was cleared.
    Cleared,
    /// The busy flag flipped.
    StateChange { awaiting: bool },
    /// An in-flight turn resolved (successfully or with the fallback).
    TurnComplete,
}

/// The engine's event loop has shut down and can no longer accept input.
#[derive(Debug, Error)]
#[error("tutor engine has shut down")]
pub struct EngineClosed;

/// Shared handle to the uncommitted input draft.
///
/// The draft survives rejected submissions (busy engine, whitespace-only
/// text); the runtime empties it only once a submission is accepted, or on
/// clear.
#[derive(Debug, Clone, Default)]
pub struct DraftBuffer(Arc<Mutex<String>>);

impl DraftBuffer {
    pub fn get(&self) -> String {
        self.lock().clone()
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.lock() = text.into();
    }

    pub fn take(&self) -> String {
        std::mem::take(&mut *self.lock())
    }

    pub(crate) fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared handle to the in-memory transcript.
///
/// A poisoned lock only means a panic happened mid-append elsewhere; the
/// log itself is still ordered, so we recover the guard rather than
/// propagate the poison.
#[derive(Debug, Clone, Default)]
pub struct SharedTranscript(Arc<Mutex<Transcript>>);

impl SharedTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().messages().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn turn_count(&self) -> usize {
        self.lock().turn_count()
    }

    pub(crate) fn append(&self, message: Message) -> Message {
        self.lock().append(message).clone()
    }

    pub(crate) fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Transcript> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Facade over a running tutor session.
///
/// Owns the channels into the spawned [`TutorRuntime`] task plus the
/// shared transcript and the uncommitted input draft. Cheap to share by
/// reference; all methods take `&self`.
pub struct TutorEngine {
    event_tx: mpsc::Sender<Event>,
    broadcast_tx: broadcast::Sender<TutorEvent>,
    transcript: SharedTranscript,
    draft: DraftBuffer,
}

impl TutorEngine {
    /// Spawn a new session with the given responder.
    pub fn spawn<R: Responder + 'static>(context: TutorContext, responder: R) -> Self {
        let (event_tx, event_rx) = mpsc::channel(32);
        let (broadcast_tx, _) = broadcast::channel(128);
        let transcript = SharedTranscript::new();
        let draft = DraftBuffer::default();

        let runtime = TutorRuntime::new(
            context,
            TutorState::Idle,
            responder,
            transcript.clone(),
            draft.clone(),
            event_rx,
            event_tx.clone(),
            broadcast_tx.clone(),
        );

        tokio::spawn(async move {
            runtime.run().await;
        });

        Self {
            event_tx,
            broadcast_tx,
            transcript,
            draft,
        }
    }

    /// Submit user text for a new turn.
    ///
    /// Whitespace-only text and submissions while a turn is in flight are
    /// silently dropped by the runtime.
    pub async fn submit(&self, text: impl Into<String>) -> Result<(), EngineClosed> {
        self.send(Event::Submit {
            text: text.into(),
            attachment: None,
        })
        .await
    }

    /// Submit with an uploaded chart image. Text may be empty; a
    /// placeholder is shown in its place.
    pub async fn submit_with_attachment(
        &self,
        text: impl Into<String>,
        attachment: ChartAttachment,
    ) -> Result<(), EngineClosed> {
        self.send(Event::Submit {
            text: text.into(),
            attachment: Some(attachment),
        })
        .await
    }

    /// Submit the current draft.
    ///
    /// The draft is emptied by the runtime only if the submission is
    /// accepted; a rejected submission (busy engine, whitespace-only text)
    /// leaves the typed input intact.
    pub async fn submit_draft(&self) -> Result<(), EngineClosed> {
        let text = self.draft.get();
        self.submit(text).await
    }

    /// Clear the transcript and the draft. Does not cancel an in-flight
    /// turn.
    pub async fn clear(&self) -> Result<(), EngineClosed> {
        self.draft.clear();
        self.send(Event::Clear).await
    }

    /// Subscribe to engine events.
    pub fn subscribe(&self) -> broadcast::Receiver<TutorEvent> {
        self.broadcast_tx.subscribe()
    }

    /// Snapshot of the current transcript.
    pub fn messages(&self) -> Vec<Message> {
        self.transcript.snapshot()
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.turn_count()
    }

    /// Replace the uncommitted input draft.
    pub fn set_draft(&self, text: impl Into<String>) {
        self.draft.set(text);
    }

    pub fn draft(&self) -> String {
        self.draft.get()
    }

    /// Take the draft, leaving it empty.
    pub fn take_draft(&self) -> String {
        self.draft.take()
    }

    async fn send(&self, event: Event) -> Result<(), EngineClosed> {
        self.event_tx.send(event).await.map_err(|_| EngineClosed)
    }
}
