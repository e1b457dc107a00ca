//! Builder for transition table rows.

use crate::builder::error::BuildError;
use crate::core::{Event, Guard, State};
use crate::engine::{Action, HookError, TransitionRule};

/// Fluent builder for a [`TransitionRule`].
///
/// ```rust
/// use switchboard::builder::TransitionBuilder;
/// use switchboard::{event_enum, state_enum};
///
/// state_enum! {
///     enum Download {
///         Uninitialized,
///         Downloading,
///     }
/// }
///
/// event_enum! {
///     enum Input => InputKind {
///         StartDownload(String),
///     }
/// }
///
/// let rule = TransitionBuilder::<Download, Input, Vec<String>>::new()
///     .from(Download::Uninitialized)
///     .on(InputKind::StartDownload)
///     .to(Download::Downloading)
///     .action(|requested, event| {
///         if let Input::StartDownload(url) = event {
///             requested.push(url.clone());
///         }
///         Ok(())
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(rule.to, Download::Downloading);
/// ```
pub struct TransitionBuilder<S: State, E: Event, C = ()> {
    from: Option<S>,
    on: Option<E::Kind>,
    to: Option<S>,
    guard: Option<Guard<E>>,
    action: Option<Action<E, C>>,
}

impl<S: State, E: Event, C> TransitionBuilder<S, E, C> {
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event kind (required).
    pub fn on(mut self, kind: E::Kind) -> Self {
        self.on = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    pub fn guard(mut self, guard: Guard<E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard the transition with a closure over the event.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Run `action` with the machine context while the transition executes.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C, &E) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn build(self) -> Result<TransitionRule<S, E, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEventKind)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(TransitionRule {
            from,
            on,
            to,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, E: Event, C> Default for TransitionBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
