//! Entry and exit hooks.
//!
//! Hooks are implemented once on the machine's context type and dispatch
//! over the state with a `match`, so adding a state variant is checked by
//! the compiler wherever hooks care about it.

use super::error::HookError;
use crate::core::{Event, State};
use std::fmt;

/// What caused a state to be entered.
#[derive(Debug)]
pub enum Trigger<'a, E> {
    /// The machine was started; no event exists.
    Start,
    /// A transition fired on this event.
    Event(&'a E),
}

impl<E> Clone for Trigger<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Trigger<'_, E> {}

impl<'a, E: Event> Trigger<'a, E> {
    /// The triggering event, if any.
    pub fn event(&self) -> Option<&'a E> {
        match *self {
            Self::Start => None,
            Self::Event(event) => Some(event),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Event(event) => event.name(),
        }
    }
}

impl<E: Event> fmt::Display for Trigger<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("<start>"),
            Self::Event(event) => write!(f, "{event:?}"),
        }
    }
}

/// Lifecycle hooks run by the engine around each transition.
///
/// Both methods default to doing nothing. A failing hook aborts the
/// transition and leaves the machine in its previous state.
///
/// # Example
///
/// ```rust
/// use switchboard::engine::{HookError, Hooks, Trigger};
/// use switchboard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum Switch => SwitchKind {
///         Flip,
///     }
/// }
///
/// #[derive(Default)]
/// struct Counter {
///     switched_on: usize,
/// }
///
/// impl Hooks<Light, Switch> for Counter {
///     fn on_entry(&mut self, state: &Light, _trigger: Trigger<'_, Switch>) -> Result<(), HookError> {
///         if let Light::On = state {
///             self.switched_on += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Hooks<S: State, E: Event> {
    /// Called when `state` becomes current.
    fn on_entry(&mut self, state: &S, trigger: Trigger<'_, E>) -> Result<(), HookError> {
        let _ = (state, trigger);
        Ok(())
    }

    /// Called when `state` stops being current because of `event`.
    fn on_exit(&mut self, state: &S, event: &E) -> Result<(), HookError> {
        let _ = (state, event);
        Ok(())
    }
}

impl<S: State, E: Event> Hooks<S, E> for () {}
