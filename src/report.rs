//! Reporting through `tracing`.
//!
//! The engine never logs. Machines that want a trace of their lifecycle
//! plug these in: [`TracingHooks`] as the context (or delegated to from a
//! custom context), and [`trace_unhandled`] as the no-transition handler.

use crate::core::{Event, State};
use crate::engine::{HookError, Hooks, Trigger};
use tracing::{debug, info, warn};

/// Hooks that log every entry and exit.
///
/// Entries are logged at `info` as `[State] trigger`, exits at `debug`.
#[derive(Debug, Clone, Default)]
pub struct TracingHooks {
    machine: Option<String>,
}

impl TracingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every record with a machine name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            machine: Some(name.into()),
        }
    }

    pub fn machine(&self) -> Option<&str> {
        self.machine.as_deref()
    }
}

impl<S: State, E: Event> Hooks<S, E> for TracingHooks {
    fn on_entry(&mut self, state: &S, trigger: Trigger<'_, E>) -> Result<(), HookError> {
        info!(
            machine = self.machine.as_deref().unwrap_or_default(),
            state = state.name(),
            trigger = trigger.name(),
            "[{}] {}",
            state.name(),
            trigger
        );
        Ok(())
    }

    fn on_exit(&mut self, state: &S, event: &E) -> Result<(), HookError> {
        debug!(
            machine = self.machine.as_deref().unwrap_or_default(),
            state = state.name(),
            event = event.name(),
            "leaving {}",
            state.name()
        );
        Ok(())
    }
}

/// No-transition handler that logs the rejected event at `warn`.
pub fn trace_unhandled<S: State, E: Event>(state: &S, event: &E) {
    warn!(
        state = state.name(),
        event = event.name(),
        "no transition from {} on {:?}",
        state.name(),
        event
    );
}
