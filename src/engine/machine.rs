//! Table-driven state machine.

use super::error::{HookError, HookKind, MachineError};
use super::hooks::{Hooks, Trigger};
use super::rule::TransitionRule;
use crate::checkpoint::MachineMetadata;
use crate::core::{Event, State, StateHistory, StateTransition};
use chrono::Utc;
use std::borrow::Borrow;

/// Callback invoked when an event matches no rule.
///
/// It observes the current state and the rejected event; it cannot change
/// either, and the engine still returns [`MachineError::UnhandledEvent`].
pub type NoTransitionHandler<S, E> = Box<dyn Fn(&S, &E) + Send + Sync>;

/// How the engine treats several rules accepting the same event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardResolution {
    /// Evaluate every candidate guard and fail with
    /// [`MachineError::AmbiguousTransition`] if more than one passes.
    #[default]
    Exclusive,

    /// Take the first passing rule in table order. Later guards are not
    /// evaluated.
    FirstMatch,
}

/// A flat, synchronous state machine driven by a transition table.
///
/// Built with [`StateMachineBuilder`](crate::builder::StateMachineBuilder).
/// The machine owns its context `C`, which receives every action and hook
/// call.
///
/// Before [`start`](Self::start) succeeds, [`current_state`](Self::current_state)
/// reports the initial state and [`process_event`](Self::process_event)
/// fails with [`MachineError::NotStarted`].
pub struct StateMachine<S: State, E: Event, C = ()> {
    pub(crate) initial: S,
    pub(crate) current: S,
    pub(crate) started: bool,
    pub(crate) rules: Vec<TransitionRule<S, E, C>>,
    pub(crate) declared: Option<Vec<S>>,
    pub(crate) resolution: GuardResolution,
    pub(crate) no_transition: Option<NoTransitionHandler<S, E>>,
    pub(crate) context: C,
    pub(crate) history: StateHistory<S>,
    pub(crate) metadata: MachineMetadata,
}

impl<S: State, E: Event, C: Hooks<S, E>> StateMachine<S, E, C> {
    pub(crate) fn new(initial: S, context: C) -> Self {
        Self {
            current: initial.clone(),
            initial,
            started: false,
            rules: Vec::new(),
            declared: None,
            resolution: GuardResolution::default(),
            no_transition: None,
            context,
            history: StateHistory::new(),
            metadata: MachineMetadata::default(),
        }
    }

    /// Enter the initial state, running its entry hook with
    /// [`Trigger::Start`].
    ///
    /// Fails with `AlreadyStarted` on a second call. If the entry hook
    /// fails the machine stays unstarted.
    pub fn start(&mut self) -> Result<(), MachineError> {
        if self.started {
            return Err(MachineError::AlreadyStarted);
        }

        self.context
            .on_entry(&self.initial, Trigger::Start)
            .map_err(|source| MachineError::HookFailure {
                hook: HookKind::Entry,
                state: self.initial.name().to_string(),
                event: Trigger::<E>::Start.to_string(),
                source,
            })?;

        self.current = self.initial.clone();
        self.started = true;
        self.metadata.updated_at = Utc::now();
        Ok(())
    }

    /// Dispatch one event and return the state the machine is in afterwards.
    ///
    /// On a match the order is: exit hook of the source state, the rule's
    /// action, entry hook of the target state. The new state is committed
    /// only once all three succeed.
    pub fn process_event<B: Borrow<E>>(&mut self, event: B) -> Result<S, MachineError> {
        let event = event.borrow();
        if !self.started {
            return Err(MachineError::NotStarted);
        }
        self.metadata.events_processed += 1;

        match self.select(event)? {
            Some(index) => self.fire(index, event),
            None => {
                if let Some(handler) = &self.no_transition {
                    handler(&self.current, event);
                }
                self.metadata.unhandled_events += 1;
                Err(MachineError::UnhandledEvent {
                    state: self.current.name().to_string(),
                    event: event.name().to_string(),
                })
            }
        }
    }

    /// Whether `event` would fire a transition from the current state.
    ///
    /// Evaluates guards only; no hook runs and nothing changes.
    pub fn can_handle(&self, event: &E) -> bool {
        self.started && matches!(self.select(event), Ok(Some(_)))
    }

    fn select(&self, event: &E) -> Result<Option<usize>, MachineError> {
        let kind = event.kind();
        let mut candidates = self
            .rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(&self.current, kind) && rule.accepts(event))
            .map(|(index, _)| index);

        let Some(first) = candidates.next() else {
            return Ok(None);
        };

        if self.resolution == GuardResolution::Exclusive {
            let others = candidates.count();
            if others > 0 {
                return Err(MachineError::AmbiguousTransition {
                    state: self.current.name().to_string(),
                    event: event.name().to_string(),
                    candidates: others + 1,
                });
            }
        }

        Ok(Some(first))
    }

    fn fire(&mut self, index: usize, event: &E) -> Result<S, MachineError> {
        let rule = &self.rules[index];

        self.context
            .on_exit(&self.current, event)
            .map_err(|source| hook_failure(HookKind::Exit, &self.current, event, source))?;
        rule.run_action(&mut self.context, event)
            .map_err(|source| hook_failure(HookKind::Action, &self.current, event, source))?;
        self.context
            .on_entry(&rule.to, Trigger::Event(event))
            .map_err(|source| hook_failure(HookKind::Entry, &rule.to, event, source))?;

        let to = rule.to.clone();
        let from = std::mem::replace(&mut self.current, to.clone());
        let now = Utc::now();
        self.history = std::mem::take(&mut self.history).record(StateTransition {
            from,
            to: to.clone(),
            event: event.name().to_string(),
            timestamp: now,
        });
        *self
            .metadata
            .transitions_fired
            .entry(event.name().to_string())
            .or_insert(0) += 1;
        self.metadata.updated_at = now;

        Ok(to)
    }

    /// The current state. Reports the initial state before `start`.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the current state is final.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Committed transitions since the machine was built (or restored).
    /// Bounded when the machine was built with a history limit.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Forget the recorded transitions. State and counters are kept.
    pub fn clear_history(&mut self) {
        self.history = std::mem::take(&mut self.history).cleared();
    }

    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// The transition table, in dispatch order.
    pub fn rules(&self) -> &[TransitionRule<S, E, C>] {
        &self.rules
    }

    /// The explicitly declared state set, if one was given.
    pub fn declared_states(&self) -> Option<&[S]> {
        self.declared.as_deref()
    }

    pub fn guard_resolution(&self) -> GuardResolution {
        self.resolution
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine and hand back its context.
    pub fn into_context(self) -> C {
        self.context
    }
}

fn hook_failure<S: State, E: Event>(
    hook: HookKind,
    state: &S,
    event: &E,
    source: HookError,
) -> MachineError {
    MachineError::HookFailure {
        hook,
        state: state.name().to_string(),
        event: format!("{event:?}"),
        source,
    }
}
