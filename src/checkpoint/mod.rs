//! Checkpoint and restore for state machines.
//!
//! A checkpoint captures everything about a running machine that is data:
//! the current state, whether it was started, its history and counters.
//! The transition table and context are code and are not captured, so a
//! checkpoint is restored into a machine built from the same table.

use crate::core::{Event, State, StateHistory};
use crate::engine::{Hooks, StateMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Counters tracked by every machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When machine was created
    pub created_at: DateTime<Utc>,

    /// Last start or committed transition
    pub updated_at: DateTime<Utc>,

    /// Events dispatched after start, whatever their outcome
    pub events_processed: u64,

    /// Events that matched no rule
    pub unhandled_events: u64,

    /// Committed transitions per event name
    pub transitions_fired: HashMap<String, u64>,
}

impl Default for MachineMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            events_processed: 0,
            unhandled_events: 0,
            transitions_fired: HashMap::new(),
        }
    }
}

/// Serializable snapshot of a machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub initial_state: S,

    pub current_state: S,

    /// Whether `start()` had succeeded
    pub started: bool,

    pub history: StateHistory<S>,

    pub metadata: MachineMetadata,
}

impl<S: State> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// The current state must be where the recorded history leads.
    fn check_consistency(&self) -> Result<(), CheckpointError> {
        let history = &self.history;

        let consistent = if !self.started {
            self.current_state == self.initial_state && history.is_empty()
        } else {
            match history.last() {
                None => !history.is_complete() || self.current_state == self.initial_state,
                Some(last) => {
                    let starts_at_initial = history
                        .transitions()
                        .next()
                        .is_some_and(|first| first.from == self.initial_state);
                    last.to == self.current_state
                        && history.is_contiguous()
                        && (!history.is_complete() || starts_at_initial)
                }
            }
        };

        if consistent {
            Ok(())
        } else {
            Err(CheckpointError::InconsistentState(
                self.current_state.name().to_string(),
            ))
        }
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version == CHECKPOINT_VERSION {
            Ok(())
        } else {
            Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        }
    }
}

impl<S: State, E: Event, C: Hooks<S, E>> StateMachine<S, E, C> {
    /// Snapshot the machine. Pure: the machine is not modified.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.initial.clone(),
            current_state: self.current.clone(),
            started: self.started,
            history: self.history.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Load a checkpoint into this machine. No hooks run.
    ///
    /// The checkpoint must come from a machine with the same initial state
    /// and, if this machine declares its states, its current state must be
    /// one of them. Its current state must also be explained by its
    /// history: an unstarted or history-free checkpoint sits in the initial
    /// state, otherwise the last recorded transition ends in the current
    /// state. On error the machine is left untouched.
    ///
    /// The restored history is re-bounded to this machine's history limit.
    pub fn restore(&mut self, checkpoint: Checkpoint<S>) -> Result<(), CheckpointError> {
        checkpoint.check_version()?;

        if checkpoint.initial_state != self.initial {
            return Err(CheckpointError::InitialStateMismatch {
                expected: self.initial.name().to_string(),
                found: checkpoint.initial_state.name().to_string(),
            });
        }

        if let Some(states) = &self.declared {
            if !states.contains(&checkpoint.current_state) {
                return Err(CheckpointError::UndeclaredState(
                    checkpoint.current_state.name().to_string(),
                ));
            }
        }

        checkpoint.check_consistency()?;

        let limit = self.history.limit();
        self.current = checkpoint.current_state;
        self.started = checkpoint.started;
        self.history = checkpoint.history.bounded(limit);
        self.metadata = checkpoint.metadata;
        Ok(())
    }
}
