//! Table violations.

use thiserror::Error;

/// A structural problem found in a transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("Rule #{rule} ({from} on {on}) is shadowed by unguarded rule #{by} and can never fire")]
    ShadowedRule {
        rule: usize,
        by: usize,
        from: String,
        on: String,
    },

    /// Only raised under exclusive guard resolution, where the fallback and
    /// the guarded rule both accept every event the guard lets through.
    #[error("Unguarded rule #{rule} ({from} on {on}) overlaps guarded rule #{guarded} under exclusive resolution")]
    AmbiguousFallback {
        rule: usize,
        guarded: usize,
        from: String,
        on: String,
    },

    #[error("Rule #{rule} refers to undeclared state '{state}'")]
    UndeclaredState { rule: usize, state: String },

    #[error("Initial state '{state}' is not among the declared states")]
    UndeclaredInitial { state: String },

    #[error("State '{state}' cannot be reached from the initial state")]
    UnreachableState { state: String },

    #[error("Initial state '{state}' has no outgoing transitions")]
    DeadEndInitial { state: String },
}
