//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State, StateHistory};
use crate::engine::{GuardResolution, Hooks, NoTransitionHandler, StateMachine, TransitionRule};
use crate::validation::validate_table;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// The table is validated by [`build`](Self::build); no hook runs until
/// [`StateMachine::start`] is called.
pub struct StateMachineBuilder<S: State, E: Event, C = ()> {
    initial: Option<S>,
    states: Option<Vec<S>>,
    rules: Vec<TransitionRule<S, E, C>>,
    resolution: GuardResolution,
    no_transition: Option<NoTransitionHandler<S, E>>,
    history_limit: Option<usize>,
    context: C,
}

impl<S: State, E: Event, C: Hooks<S, E> + Default> StateMachineBuilder<S, E, C> {
    /// Create a builder with a default context.
    pub fn new() -> Self {
        Self::with_context(C::default())
    }
}

impl<S: State, E: Event, C: Hooks<S, E>> StateMachineBuilder<S, E, C> {
    /// Create a builder whose machine will own `context`.
    pub fn with_context(context: C) -> Self {
        Self {
            initial: None,
            states: None,
            rules: Vec::new(),
            resolution: GuardResolution::default(),
            no_transition: None,
            history_limit: None,
            context,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare the complete state set.
    ///
    /// Optional. When given, `build` also rejects rules that mention other
    /// states and declared states that cannot be reached.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states = Some(states.into_iter().collect());
        self
    }

    /// Add a transition using a builder.
    pub fn transition(mut self, builder: TransitionBuilder<S, E, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: TransitionRule<S, E, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add several rules, keeping their order.
    pub fn transitions(mut self, rules: Vec<TransitionRule<S, E, C>>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn guard_resolution(mut self, resolution: GuardResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Keep at most `limit` transitions in the machine's history, evicting
    /// the oldest. Zero disables history. Unbounded by default.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Observe events that match no rule.
    pub fn on_no_transition<F>(mut self, handler: F) -> Self
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.no_transition = Some(Box::new(handler));
        self
    }

    /// Validate the table and build the (unstarted) machine.
    pub fn build(self) -> Result<StateMachine<S, E, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Validation::Failure(violations) = validate_table(
            &initial,
            &self.rules,
            self.states.as_deref(),
            self.resolution,
        ) {
            return Err(BuildError::InvalidTable(
                violations.iter().cloned().collect(),
            ));
        }

        let mut machine = StateMachine::new(initial, self.context);
        machine.rules = self.rules;
        machine.declared = self.states;
        machine.resolution = self.resolution;
        machine.no_transition = self.no_transition;
        machine.history = StateHistory::new().bounded(self.history_limit);
        Ok(machine)
    }
}

impl<S: State, E: Event, C: Hooks<S, E> + Default> Default for StateMachineBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
