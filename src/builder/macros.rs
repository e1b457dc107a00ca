//! Macros for declaring state and event enums.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `serde::Serialize` and `serde::Deserialize`,
/// so the calling crate must depend on `serde`.
///
/// # Example
///
/// ```
/// use switchboard::state_enum;
///
/// state_enum! {
///     pub enum Download {
///         Uninitialized,
///         Downloading,
///         ContentReady,
///         Error,
///     }
///     error: [Error]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Declare an event enum, its payload-free kind enum, and implement
/// [`Event`](crate::core::Event).
///
/// Variants are either unit variants or tuple variants carrying a payload.
/// The kind enum gets one unit variant per event variant, with the same
/// name.
///
/// # Example
///
/// ```
/// use switchboard::core::Event;
/// use switchboard::event_enum;
///
/// event_enum! {
///     pub enum Input => InputKind {
///         StartDownload(String),
///         ContentReady,
///         Error,
///     }
/// }
///
/// let event = Input::StartDownload("http://google.com/".to_string());
/// assert_eq!(event.kind(), InputKind::StartDownload);
/// assert_eq!(event.name(), "StartDownload");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $($field:ty),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $($field),* ) )?
            ),*
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
            Failed,
        }
        final: [Complete, Failed]
        error: [Failed]
    }

    event_enum! {
        enum TestEvent => TestEventKind {
            Begin(String, u32),
            Tick,
            Abort(String),
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Processing.name(), "Processing");
        assert!(!TestState::Initial.is_final());
        assert!(TestState::Complete.is_final());
        assert!(!TestState::Complete.is_error());
        assert!(TestState::Failed.is_final());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn state_enum_works_without_final_error() {
        state_enum! {
            pub enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::Two.is_final());
        assert!(!MinimalState::Two.is_error());
    }

    #[test]
    fn event_enum_maps_variants_to_kinds() {
        assert_eq!(
            TestEvent::Begin("job".into(), 3).kind(),
            TestEventKind::Begin
        );
        assert_eq!(TestEvent::Tick.kind(), TestEventKind::Tick);
        assert_eq!(TestEvent::Abort("oom".into()).kind(), TestEventKind::Abort);
    }

    #[test]
    fn event_enum_names_variants() {
        assert_eq!(TestEvent::Begin("job".into(), 3).name(), "Begin");
        assert_eq!(TestEvent::Tick.name(), "Tick");
    }

    #[test]
    fn event_payload_is_preserved() {
        let event = TestEvent::Abort("oom".into());
        assert_eq!(event.clone(), TestEvent::Abort("oom".to_string()));
        assert_eq!(format!("{event:?}"), "Abort(\"oom\")");
    }
}
