//! Switchboard: a table-driven finite state machine engine
//!
//! Events are typed values routed through a static transition table to the
//! next state. Rows may carry a guard (a pure predicate over the event) and
//! an action (a side effect run during the transition); states get entry and
//! exit hooks through the machine's context. Events that match no row are
//! reported as errors, never silently dropped.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: closed enums, declared with [`state_enum!`] and
//!   [`event_enum!`]
//! - **TransitionRule**: `(from, on, to, guard?, action?)`
//! - **StateMachine**: owns the current state, the table and the context
//! - **Hooks**: entry/exit callbacks implemented on the context
//!
//! # Example
//!
//! ```rust
//! use switchboard::builder::{StateMachineBuilder, TransitionBuilder};
//! use switchboard::engine::MachineError;
//! use switchboard::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Download {
//!         Uninitialized,
//!         Downloading,
//!         ContentReady,
//!         Error,
//!     }
//!     error: [Error]
//! }
//!
//! event_enum! {
//!     enum Input => InputKind {
//!         StartDownload(String),
//!         ContentReady,
//!         Error,
//!     }
//! }
//!
//! let mut downloader = StateMachineBuilder::<Download, Input>::new()
//!     .initial(Download::Uninitialized)
//!     .transition(
//!         TransitionBuilder::<Download, Input>::new()
//!             .from(Download::Uninitialized)
//!             .on(InputKind::StartDownload)
//!             .to(Download::Downloading),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::<Download, Input>::new()
//!             .from(Download::Downloading)
//!             .on(InputKind::ContentReady)
//!             .to(Download::ContentReady),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! downloader.start().unwrap();
//! assert_eq!(
//!     downloader.process_event(Input::StartDownload("http://google.com/".into())),
//!     Ok(Download::Downloading)
//! );
//! assert!(matches!(
//!     downloader.process_event(Input::Error),
//!     Err(MachineError::UnhandledEvent { .. })
//! ));
//! assert_eq!(downloader.current_state(), &Download::Downloading);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use builder::{StateMachineBuilder, TransitionBuilder};
pub use core::{Event, Guard, State, StateHistory, StateTransition};
pub use engine::{Hooks, MachineError, StateMachine, TransitionRule, Trigger};
