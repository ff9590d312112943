//! Tutor conversation engine for a trading-education assistant
//!
//! A deterministic chat state machine: user submissions are classified by
//! ordered keyword rules, resolved to pre-authored long-form responses
//! after a simulated thinking delay, and appended to an in-memory
//! transcript. Exactly one turn may be in flight at a time.
//!
//! The core is a pure transition function ([`state_machine`]) driven by an
//! async event loop ([`runtime`]); the [`runtime::Responder`] trait is the
//! seam between the two, letting tests bypass the delay.

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]

pub mod catalog;
pub mod classifier;
pub mod diagrams;
pub mod responses;
pub mod runtime;
pub mod state_machine;
pub mod transcript;

pub use classifier::Topic;
pub use responses::ResponsePayload;
pub use runtime::{CannedResponder, Responder, TutorEngine, TutorEvent};
pub use state_machine::{ChartAttachment, TutorContext, TutorState};
pub use transcript::{DiagramTag, Message, Role, Transcript};
