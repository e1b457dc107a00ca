//! Build errors for machines and transitions.

use crate::validation::TableViolation;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Invalid transition table: {}", summarize(.0))]
    InvalidTable(Vec<TableViolation>),
}

fn summarize(violations: &[TableViolation]) -> String {
    match violations.first() {
        Some(first) => format!("{} violation(s), first: {first}", violations.len()),
        None => "no violations recorded".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_table_message_names_first_violation() {
        let err = BuildError::InvalidTable(vec![
            TableViolation::DeadEndInitial {
                state: "Idle".to_string(),
            },
            TableViolation::UnreachableState {
                state: "Done".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid transition table: 2 violation(s), first: \
             Initial state 'Idle' has no outgoing transitions"
        );
    }

    #[test]
    fn empty_invalid_table_still_displays() {
        let err = BuildError::InvalidTable(Vec::new());
        assert_eq!(
            err.to_string(),
            "Invalid transition table: no violations recorded"
        );
    }
}
