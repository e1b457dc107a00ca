//! Checks run over a whole transition table.

use crate::core::{Event, State};
use crate::engine::{GuardResolution, TransitionRule};
use crate::validation::violations::TableViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Validate a table, accumulating every violation.
///
/// `declared` enables the state-set checks (undeclared and unreachable
/// states); without it only the structural checks run. Under
/// [`GuardResolution::Exclusive`] an unguarded rule may not share its
/// `(state, kind)` pair with any other rule.
pub fn validate_table<S: State, E: Event, C>(
    initial: &S,
    rules: &[TransitionRule<S, E, C>],
    declared: Option<&[S]>,
    resolution: GuardResolution,
) -> Validation<(), NonEmptyVec<TableViolation>> {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check_initial_has_exit(initial, rules));
    checks.extend(check_overlap(rules, resolution));

    if let Some(states) = declared {
        checks.extend(check_declared(initial, rules, states));
        checks.extend(check_reachable(initial, rules, states));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_initial_has_exit<S: State, E: Event, C>(
    initial: &S,
    rules: &[TransitionRule<S, E, C>],
) -> Check {
    if rules.is_empty() || rules.iter().any(|r| r.from == *initial) {
        Validation::success(())
    } else {
        Validation::fail(TableViolation::DeadEndInitial {
            state: initial.name().to_string(),
        })
    }
}

fn check_overlap<S: State, E: Event, C>(
    rules: &[TransitionRule<S, E, C>],
    resolution: GuardResolution,
) -> Vec<Check> {
    rules
        .iter()
        .enumerate()
        .filter_map(|(index, rule)| {
            let earlier = &rules[..index];
            let from = rule.from.name().to_string();
            let on = format!("{:?}", rule.on);

            if let Some(by) = earlier
                .iter()
                .position(|e| !e.is_guarded() && e.matches(&rule.from, rule.on))
            {
                return Some(Validation::fail(TableViolation::ShadowedRule {
                    rule: index,
                    by,
                    from,
                    on,
                }));
            }

            if resolution == GuardResolution::Exclusive && !rule.is_guarded() {
                let guarded = earlier
                    .iter()
                    .position(|e| e.matches(&rule.from, rule.on))?;
                return Some(Validation::fail(TableViolation::AmbiguousFallback {
                    rule: index,
                    guarded,
                    from,
                    on,
                }));
            }

            None
        })
        .collect()
}

fn check_declared<S: State, E: Event, C>(
    initial: &S,
    rules: &[TransitionRule<S, E, C>],
    states: &[S],
) -> Vec<Check> {
    let mut checks = Vec::new();

    if !states.contains(initial) {
        checks.push(Validation::fail(TableViolation::UndeclaredInitial {
            state: initial.name().to_string(),
        }));
    }

    for (index, rule) in rules.iter().enumerate() {
        for state in [&rule.from, &rule.to] {
            if !states.contains(state) {
                checks.push(Validation::fail(TableViolation::UndeclaredState {
                    rule: index,
                    state: state.name().to_string(),
                }));
            }
        }
    }

    checks
}

fn check_reachable<S: State, E: Event, C>(
    initial: &S,
    rules: &[TransitionRule<S, E, C>],
    states: &[S],
) -> Vec<Check> {
    let mut reached = vec![initial];
    let mut frontier = vec![initial];

    while let Some(state) = frontier.pop() {
        for rule in rules.iter().filter(|r| r.from == *state) {
            if !reached.contains(&&rule.to) {
                reached.push(&rule.to);
                frontier.push(&rule.to);
            }
        }
    }

    states
        .iter()
        .filter(|s| !reached.contains(s))
        .map(|s| {
            Validation::fail(TableViolation::UnreachableState {
                state: s.name().to_string(),
            })
        })
        .collect()
}
