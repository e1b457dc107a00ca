//! Event trait for machine inputs.
//!
//! Events are values: a `StartDownload` event carries its URL, a
//! `ContentReady` event carries nothing. The transition table cannot refer
//! to an event value before it exists, so every event type also exposes a
//! payload-free *kind* used as the table key.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Most event types are declared with [`event_enum!`](crate::event_enum),
/// which generates the kind enum alongside the event enum. Implementing it
/// by hand looks like this:
///
/// ```rust
/// use switchboard::core::Event;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Download {
///     Start(String),
///     Ready,
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// enum DownloadKind {
///     Start,
///     Ready,
/// }
///
/// impl Event for Download {
///     type Kind = DownloadKind;
///
///     fn kind(&self) -> DownloadKind {
///         match self {
///             Self::Start(_) => DownloadKind::Start,
///             Self::Ready => DownloadKind::Ready,
///         }
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Start(_) => "Start",
///             Self::Ready => "Ready",
///         }
///     }
/// }
///
/// let event = Download::Start("http://example.com/".to_string());
/// assert_eq!(event.kind(), DownloadKind::Start);
/// ```
pub trait Event: Debug {
    /// Payload-free discriminant of the event.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    /// The kind this event belongs to.
    fn kind(&self) -> Self::Kind;

    /// The event's name for display and reporting.
    fn name(&self) -> &str;
}
