//! Conversation log types
//!
//! The transcript is an append-only, in-memory sequence of messages. Its
//! lifecycle is bound to the engine instance; there is no persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Identifier selecting which illustrative chart visualization to render
/// alongside a response.
///
/// The wire names are fixed; renderers dispatch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagramTag {
    #[serde(rename = "candlestick-advanced")]
    CandlestickAdvanced,
    #[serde(rename = "support-resistance")]
    SupportResistance,
    #[serde(rename = "structure")]
    MarketStructure,
}

impl DiagramTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagramTag::CandlestickAdvanced => "candlestick-advanced",
            DiagramTag::SupportResistance => "support-resistance",
            DiagramTag::MarketStructure => "structure",
        }
    }
}

/// One entry in the conversation log.
///
/// `text` is plain text with a light structural convention: blank-line
/// separated sections, optional `•` bullet markers, optional `label: value`
/// lines. Renderers may format on that convention but the engine never
/// parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub text: String,
    #[serde(default)]
    pub diagrams: Vec<DiagramTag>,
    #[serde(default)]
    pub has_attachment: bool,
    pub timestamp: DateTime<Utc>,
    /// True only transiently while a presentation layer reveals the text
    /// incrementally. The engine itself never sets it.
    #[serde(default)]
    pub streaming: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text, vec![])
    }

    pub fn assistant(text: impl Into<String>, diagrams: Vec<DiagramTag>) -> Self {
        Self::new(Role::Assistant, text, diagrams)
    }

    fn new(role: Role, text: impl Into<String>, diagrams: Vec<DiagramTag>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            diagrams,
            has_attachment: false,
            timestamp: Utc::now(),
            streaming: false,
        }
    }

    pub fn with_attachment(mut self) -> Self {
        self.has_attachment = true;
        self
    }
}

/// Append-only ordered message log.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, clamping its timestamp so timestamps are
    /// monotonically non-decreasing across the log even if the wall clock
    /// steps backwards.
    pub fn append(&mut self, mut message: Message) -> &Message {
        if let Some(last) = self.messages.last() {
            if message.timestamp < last.timestamp {
                message.timestamp = last.timestamp;
            }
        }
        self.messages.push(message);
        // Push above guarantees non-empty.
        &self.messages[self.messages.len() - 1]
    }

    /// Discard all entries unconditionally.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed or in-progress turns (a turn is one user
    /// submission plus its assistant reply).
    pub fn turn_count(&self) -> usize {
        self.messages.len().div_ceil(2)
    }
}
