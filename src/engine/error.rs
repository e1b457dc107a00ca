//! Dispatch errors.

use std::fmt;
use thiserror::Error;

/// Failure reported by an action or a lifecycle hook.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct HookError {
    message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which piece of user code failed during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Exit hook of the source state
    Exit,
    /// Action attached to the transition rule
    Action,
    /// Entry hook of the target state (or the initial state on start)
    Entry,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exit => "exit",
            Self::Action => "action",
            Self::Entry => "entry",
        })
    }
}

/// Errors returned by [`StateMachine`](super::StateMachine) operations.
///
/// None of these leave the machine in a new state: the current state after
/// an error is always the state it was in before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Machine not started. Call start() before process_event()")]
    NotStarted,

    #[error("Machine already started")]
    AlreadyStarted,

    #[error("No transition from state '{state}' on event '{event}'")]
    UnhandledEvent { state: String, event: String },

    #[error("{candidates} transitions from state '{state}' accept event '{event}'")]
    AmbiguousTransition {
        state: String,
        event: String,
        candidates: usize,
    },

    #[error("{hook} hook of state '{state}' failed on {event}: {source}")]
    HookFailure {
        hook: HookKind,
        state: String,
        event: String,
        #[source]
        source: HookError,
    },
}

impl MachineError {
    /// Whether this is the no-transition outcome.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::UnhandledEvent { .. })
    }

    /// The failing hook, for `HookFailure`.
    pub fn hook(&self) -> Option<HookKind> {
        match self {
            Self::HookFailure { hook, .. } => Some(*hook),
            _ => None,
        }
    }
}
