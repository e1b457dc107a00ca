//! State trait for machine states.
//!
//! A machine's states form a closed set, expressed as a plain enum. The
//! trait only exposes pure inspection methods; entry and exit behaviour
//! lives in [`Hooks`](crate::engine::Hooks), never on the state value.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the current state is copied into history records
/// - `PartialEq`: rules are matched by comparing the current state
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: states are stored in checkpoints
///
/// # Example
///
/// ```rust
/// use switchboard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Download {
///     Uninitialized,
///     Downloading,
///     ContentReady,
///     Error,
/// }
///
/// impl State for Download {
///     fn name(&self) -> &str {
///         match self {
///             Self::Uninitialized => "Uninitialized",
///             Self::Downloading => "Downloading",
///             Self::ContentReady => "ContentReady",
///             Self::Error => "Error",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Error)
///     }
/// }
///
/// assert_eq!(Download::ContentReady.name(), "ContentReady");
/// assert!(!Download::Error.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and reporting.
    fn name(&self) -> &str;

    /// Whether this is a terminal state.
    ///
    /// The engine does not refuse events in final states; this is purely
    /// informational and defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure condition.
    ///
    /// Error states are not necessarily final: a machine may recover from
    /// them through ordinary transitions. Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}
