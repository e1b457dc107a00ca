//! Builder API for state machine construction.
//!
//! The transition table is declared row by row, mirroring the usual
//! `source | event | target | action | guard` layout.
//!
//! ```rust
//! use switchboard::builder::{simple_transition, StateMachineBuilder, TransitionBuilder};
//! use switchboard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Player {
//!         Stopped,
//!         Playing,
//!     }
//! }
//!
//! event_enum! {
//!     enum Control => ControlKind {
//!         Play(String),
//!         Stop,
//!     }
//! }
//!
//! let mut player = StateMachineBuilder::<Player, Control>::new()
//!     .initial(Player::Stopped)
//!     .transition(
//!         TransitionBuilder::<Player, Control>::new()
//!             .from(Player::Stopped)
//!             .on(ControlKind::Play)
//!             .to(Player::Playing)
//!             .when(|e| matches!(e, Control::Play(track) if !track.is_empty())),
//!     )
//!     .unwrap()
//!     .rule(simple_transition(Player::Playing, ControlKind::Stop, Player::Stopped))
//!     .build()
//!     .unwrap();
//!
//! player.start().unwrap();
//! assert_eq!(player.process_event(Control::Play("intro".into())), Ok(Player::Playing));
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::engine::TransitionRule;

/// A rule with neither guard nor action.
pub fn simple_transition<S, E, C>(from: S, on: E::Kind, to: S) -> TransitionRule<S, E, C>
where
    S: State,
    E: Event,
{
    TransitionRule::new(from, on, to)
}

/// A rule gated by `guard`, without an action.
pub fn guarded_transition<S, E, C, F>(from: S, on: E::Kind, to: S, guard: F) -> TransitionRule<S, E, C>
where
    S: State,
    E: Event,
    F: Fn(&E) -> bool + Send + Sync + 'static,
{
    let mut rule = TransitionRule::new(from, on, to);
    rule.guard = Some(crate::core::Guard::new(guard));
    rule
}
