//! Core turn-controller state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! events are applied to the current state by a pure function that returns
//! the next state plus effects for the runtime to execute.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;


pub use effect::Effect;
pub use event::{ChartAttachment, Event};
pub use state::{TutorContext, TutorState};
pub use transition::{transition, TransitionError, TransitionResult};
