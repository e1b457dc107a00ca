//! Transition table rows.

use super::error::HookError;
use crate::core::{Event, Guard, State};
use std::fmt;

/// Side effect run while a transition executes.
///
/// Receives the machine context mutably and the triggering event.
pub type Action<E, C> = Box<dyn Fn(&mut C, &E) -> Result<(), HookError> + Send + Sync>;

/// One row of the transition table:
/// `(from, on, to, action?, guard?)`.
pub struct TransitionRule<S: State, E: Event, C> {
    pub from: S,
    pub on: E::Kind,
    pub to: S,
    pub guard: Option<Guard<E>>,
    pub action: Option<Action<E, C>>,
}

impl<S: State, E: Event, C> TransitionRule<S, E, C> {
    /// A rule with no guard and no action.
    pub fn new(from: S, on: E::Kind, to: S) -> Self {
        Self {
            from,
            on,
            to,
            guard: None,
            action: None,
        }
    }

    /// Whether the row is keyed on `(current, kind)`. Ignores the guard.
    pub fn matches(&self, current: &S, kind: E::Kind) -> bool {
        self.on == kind && self.from == *current
    }

    /// Whether the guard (if any) lets `event` through.
    pub fn accepts(&self, event: &E) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(event))
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    pub(crate) fn run_action(&self, context: &mut C, event: &E) -> Result<(), HookError> {
        match &self.action {
            Some(action) => action(context, event),
            None => Ok(()),
        }
    }
}

impl<S: State, E: Event, C> fmt::Debug for TransitionRule<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRule")
            .field("from", &self.from)
            .field("on", &self.on)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
