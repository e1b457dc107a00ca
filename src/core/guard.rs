//! Guard predicates for transition rules.
//!
//! A guard looks only at the event being dispatched. It must be pure: the
//! engine may evaluate several guards for one event when checking that at
//! most one rule applies.

use super::event::Event;
use std::fmt;

/// Pure predicate over an event that gates whether a rule applies.
///
/// # Example
///
/// ```rust
/// use switchboard::core::Guard;
/// use switchboard::event_enum;
///
/// event_enum! {
///     enum Fetch => FetchKind {
///         Start(String),
///         Cancel,
///     }
/// }
///
/// let secure_only = Guard::new(|e: &Fetch| match e {
///     Fetch::Start(url) => url.starts_with("https://"),
///     _ => false,
/// });
///
/// assert!(secure_only.check(&Fetch::Start("https://example.com/".into())));
/// assert!(!secure_only.check(&Fetch::Start("http://example.com/".into())));
/// assert!(!secure_only.check(&Fetch::Cancel));
/// ```
pub struct Guard<E: Event> {
    predicate: Box<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E: Event> Guard<E> {
    /// Create a guard from a predicate.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against an event.
    pub fn check(&self, event: &E) -> bool {
        (self.predicate)(event)
    }
}

impl<E: Event> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Payment {
        Amount(u32),
        Void,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum PaymentKind {
        Amount,
        Void,
    }

    impl Event for Payment {
        type Kind = PaymentKind;

        fn kind(&self) -> PaymentKind {
            match self {
                Self::Amount(_) => PaymentKind::Amount,
                Self::Void => PaymentKind::Void,
            }
        }

        fn name(&self) -> &str {
            match self {
                Self::Amount(_) => "Amount",
                Self::Void => "Void",
            }
        }
    }

    #[test]
    fn guard_inspects_payload() {
        let large = Guard::new(|e: &Payment| matches!(e, Payment::Amount(n) if *n >= 100));

        assert!(large.check(&Payment::Amount(100)));
        assert!(!large.check(&Payment::Amount(99)));
        assert!(!large.check(&Payment::Void));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|e: &Payment| matches!(e, Payment::Amount(n) if n % 2 == 0));
        let event = Payment::Amount(42);

        assert_eq!(guard.check(&event), guard.check(&event));
    }

    #[test]
    fn guard_debug_hides_closure() {
        let guard = Guard::new(|_: &Payment| true);
        assert_eq!(format!("{guard:?}"), "Guard(..)");
    }
}
