//! Transition history.
//!
//! Every committed transition is recorded with the event that caused it.
//! Rejected events (unhandled, ambiguous, failed hooks) never appear here.
//! A history may be bounded, in which case the oldest entries are evicted.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{vec_deque, VecDeque};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use switchboard::core::StateTransition;
/// use switchboard::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Door::Closed,
///     to: Door::Open,
///     event: "Push".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_transition());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the event that fired the transition
    pub event: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition re-entered the state it left.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of committed transitions.
///
/// `record` consumes the history and returns the extended one, so a
/// history value never changes underneath a reader.
///
/// # Example
///
/// ```rust
/// use switchboard::core::{StateHistory, StateTransition};
/// use switchboard::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Job {
///         Queued,
///         Running,
///         Finished,
///     }
///     final: [Finished]
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Job::Queued,
///         to: Job::Running,
///         event: "Dispatch".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Job::Running,
///         to: Job::Finished,
///         event: "Exit".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&Job::Queued, &Job::Running, &Job::Finished]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,

    /// Maximum number of retained transitions
    #[serde(default)]
    limit: Option<usize>,

    /// Transitions dropped to honour `limit` or by `cleared`
    #[serde(default)]
    evicted: u64,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
            evicted: 0,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self::new().bounded(Some(limit))
    }

    /// Apply a new limit, evicting the oldest entries that no longer fit.
    pub fn bounded(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.evict();
        self
    }

    /// Append a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push_back(transition);
        self.evict();
        self
    }

    /// Drop every retained transition, keeping the limit.
    pub fn cleared(mut self) -> Self {
        self.evicted += self.transitions.len() as u64;
        self.transitions.clear();
        self
    }

    fn evict(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        while self.transitions.len() > limit {
            self.transitions.pop_front();
            self.evicted += 1;
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of transitions no longer retained.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Whether the retained transitions start at the machine's first
    /// transition.
    pub fn is_complete(&self) -> bool {
        self.evicted == 0
    }

    /// Whether each retained transition starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.transitions
            .iter()
            .zip(self.transitions.iter().skip(1))
            .all(|(prev, next)| prev.to == next.from)
    }

    /// States traversed, in order: the first retained source state, then
    /// the target of each transition. Empty when nothing is retained.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of times the machine entered `state` through a transition.
    pub fn entries_into(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> vec_deque::Iter<'_, StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Uninitialized,
        Downloading,
        ContentReady,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Uninitialized => "Uninitialized",
                Self::Downloading => "Downloading",
                Self::ContentReady => "ContentReady",
            }
        }
    }

    fn step(from: TestState, to: TestState, event: &str) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            event: event.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn path_follows_transitions() {
        let history = StateHistory::new()
            .record(step(
                TestState::Uninitialized,
                TestState::Downloading,
                "StartDownload",
            ))
            .record(step(
                TestState::Downloading,
                TestState::ContentReady,
                "ContentReady",
            ));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.get_path(),
            vec![
                &TestState::Uninitialized,
                &TestState::Downloading,
                &TestState::ContentReady
            ]
        );
        assert_eq!(history.last().map(|t| t.event.as_str()), Some("ContentReady"));
    }

    #[test]
    fn entries_into_counts_reentry() {
        let history = StateHistory::new()
            .record(step(TestState::Uninitialized, TestState::Downloading, "Start"))
            .record(step(TestState::Downloading, TestState::ContentReady, "Ready"))
            .record(step(TestState::ContentReady, TestState::Downloading, "Start"));

        assert_eq!(history.entries_into(&TestState::Downloading), 2);
        assert_eq!(history.entries_into(&TestState::Uninitialized), 0);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestState::Uninitialized,
                to: TestState::Downloading,
                event: "Start".to_string(),
                timestamp: start,
            })
            .record(StateTransition {
                from: TestState::Downloading,
                to: TestState::ContentReady,
                event: "Ready".to_string(),
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn self_transition_is_detected() {
        let t = step(TestState::Downloading, TestState::Downloading, "Retry");
        assert!(t.is_self_transition());
    }

    #[test]
    fn history_serializes_with_event_names() {
        let history =
            StateHistory::new().record(step(TestState::Uninitialized, TestState::Downloading, "Start"));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 1);
        let first = back.transitions().next().unwrap();
        assert_eq!(first.event, "Start");
        assert_eq!(first.to, TestState::Downloading);
    }

    #[test]
    fn bounded_history_keeps_newest_entries() {
        let history = (0..10).fold(StateHistory::with_limit(3), |history, n| {
            let (from, to) = if n % 2 == 0 {
                (TestState::Downloading, TestState::ContentReady)
            } else {
                (TestState::ContentReady, TestState::Downloading)
            };
            history.record(step(from, to, &format!("E{n}")))
        });

        assert_eq!(history.len(), 3);
        assert_eq!(history.evicted(), 7);
        assert!(!history.is_complete());
        assert!(history.is_contiguous());
        let events: Vec<&str> = history.transitions().map(|t| t.event.as_str()).collect();
        assert_eq!(events, vec!["E7", "E8", "E9"]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let history = StateHistory::with_limit(0)
            .record(step(TestState::Uninitialized, TestState::Downloading, "Start"));

        assert!(history.is_empty());
        assert_eq!(history.evicted(), 1);
        assert!(history.get_path().is_empty());
    }

    #[test]
    fn tightening_limit_evicts_and_clearing_counts() {
        let history = StateHistory::new()
            .record(step(TestState::Uninitialized, TestState::Downloading, "Start"))
            .record(step(TestState::Downloading, TestState::ContentReady, "Ready"))
            .bounded(Some(1));

        assert_eq!(history.last().map(|t| t.event.as_str()), Some("Ready"));
        assert_eq!(history.evicted(), 1);

        let history = history.cleared();
        assert!(history.is_empty());
        assert_eq!(history.evicted(), 2);
        assert_eq!(history.limit(), Some(1));
    }

    #[test]
    fn gap_in_history_is_not_contiguous() {
        let history = StateHistory::new()
            .record(step(TestState::Uninitialized, TestState::Downloading, "Start"))
            .record(step(TestState::ContentReady, TestState::Downloading, "Start"));

        assert!(!history.is_contiguous());
    }
}
