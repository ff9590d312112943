//! Turn controller state types

use serde::{Deserialize, Serialize};

/// Turn controller state.
///
/// Exactly one turn may be in flight at a time; `AwaitingResponse` is the
/// busy flag that enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TutorState {
    /// Ready for user input, no pending turn.
    #[default]
    Idle,

    /// User message appended, assistant response pending.
    AwaitingResponse,
}

impl TutorState {
    /// Check if a turn is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, TutorState::AwaitingResponse)
    }
}

/// Context for a tutor session (immutable configuration).
#[derive(Debug, Clone)]
pub struct TutorContext {
    pub session_id: String,
}

impl TutorContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

impl Default for TutorContext {
    fn default() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}
