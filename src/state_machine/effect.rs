//! Effects produced by state transitions

use crate::responses::ResponsePayload;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a user message to the transcript (optimistic insert)
    AppendUserMessage {
        text: String,
        has_attachment: bool,
    },

    /// Append an assistant message built from a response payload
    AppendAssistantMessage { payload: ResponsePayload },

    /// Resolve a response for the prompt (spawns as background task)
    RequestResponse { prompt: String },

    /// Discard all transcript entries
    ClearTranscript,

    /// Notify observers that the in-flight turn resolved
    NotifyTurnComplete,
}

impl Effect {
    pub fn append_user(text: impl Into<String>, has_attachment: bool) -> Self {
        Effect::AppendUserMessage {
            text: text.into(),
            has_attachment,
        }
    }

    pub fn append_assistant(payload: ResponsePayload) -> Self {
        Effect::AppendAssistantMessage { payload }
    }

    pub fn request_response(prompt: impl Into<String>) -> Self {
        Effect::RequestResponse {
            prompt: prompt.into(),
        }
    }
}
