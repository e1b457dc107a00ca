//! Core value types of the engine.
//!
//! - `State` and `Event` traits for the closed sets a machine works over
//! - `Guard` predicates over events
//! - Transition history
//!
//! Nothing in this module performs side effects.

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
