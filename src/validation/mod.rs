//! Build-time validation of transition tables.
//!
//! Closures cannot be compared, so overlap between two guarded rules is
//! only caught at dispatch time (see
//! [`GuardResolution`](crate::engine::GuardResolution)). An unguarded
//! rule sharing a pair with another rule is caught here. Everything that can be decided from the table's shape is checked here,
//! and every problem is collected rather than stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use switchboard::engine::{GuardResolution, TransitionRule};
//! use switchboard::validation::validate_table;
//! use switchboard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Phase {
//!         Ready,
//!         Busy,
//!     }
//! }
//!
//! event_enum! {
//!     enum Cmd => CmdKind {
//!         Go,
//!     }
//! }
//!
//! let rules: Vec<TransitionRule<Phase, Cmd, ()>> = vec![
//!     TransitionRule::new(Phase::Ready, CmdKind::Go, Phase::Busy),
//!     TransitionRule::new(Phase::Ready, CmdKind::Go, Phase::Ready),
//! ];
//!
//! let result = validate_table(&Phase::Ready, &rules, None, GuardResolution::Exclusive);
//! assert!(result.is_failure());
//! ```

pub mod table;
pub mod violations;

pub use table::validate_table;
pub use violations::TableViolation;
