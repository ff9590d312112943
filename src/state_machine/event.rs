//! Events that can occur in a tutor session

use crate::responses::ResponsePayload;
use serde::{Deserialize, Serialize};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    Submit {
        text: String,
        attachment: Option<ChartAttachment>,
    },
    Clear,

    // Turn completion events (fed back by the runtime)
    ResponseReady {
        payload: ResponsePayload,
    },
    ResponseFailed {
        message: String,
    },
}

/// An uploaded chart image attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAttachment {
    /// Base64-encoded image data.
    pub data: String,
    pub media_type: String,
}
