//! The dispatch engine.
//!
//! A [`StateMachine`] holds one current state and an ordered table of
//! [`TransitionRule`]s. Each call to `process_event` performs one lookup:
//!
//! 1. rows keyed on `(current state, event kind)` are collected in order;
//! 2. their guards are evaluated and the first passing row is selected;
//! 3. exit hook, action and entry hook run, then the new state is committed.
//!
//! When nothing matches, the configured no-transition handler is notified
//! and [`MachineError::UnhandledEvent`] is returned. The engine never logs
//! on its own; see [`crate::report`] for a `tracing` based sink.

mod error;
mod hooks;
mod machine;
mod rule;

pub use error::{HookError, HookKind, MachineError};
pub use hooks::{Hooks, Trigger};
pub use machine::{GuardResolution, NoTransitionHandler, StateMachine};
pub use rule::{Action, TransitionRule};
