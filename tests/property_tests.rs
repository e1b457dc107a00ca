//! Property-based tests for dispatch.
//!
//! These tests use proptest to replay random event sequences through the
//! downloader machine and compare against the table written as a function.

mod common;

use common::{downloader, expected_next, Download, Input};
use proptest::prelude::*;
use switchboard::checkpoint::Checkpoint;
use switchboard::{Event, MachineError};

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8, path in "[a-z]{1,8}") -> Input {
        match variant {
            0 => Input::StartDownload(format!("http://{path}.example/")),
            1 => Input::ContentReady,
            _ => Input::Error,
        }
    }
}

proptest! {
    #[test]
    fn replay_matches_table_fold(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut machine = downloader();
        machine.start().unwrap();

        let mut expected = Download::Uninitialized;
        for event in &events {
            let result = machine.process_event(event);
            match expected_next(&expected, event) {
                Some(next) => {
                    prop_assert_eq!(result, Ok(next.clone()));
                    expected = next;
                }
                None => {
                    prop_assert!(matches!(result, Err(MachineError::UnhandledEvent { .. })), "expected UnhandledEvent error");
                }
            }
            prop_assert_eq!(machine.current_state(), &expected);
        }
    }

    #[test]
    fn unhandled_events_never_move_the_machine(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut machine = downloader();
        machine.start().unwrap();

        for event in &events {
            let before = machine.current_state().clone();
            if let Err(err) = machine.process_event(event) {
                prop_assert!(err.is_unhandled());
                prop_assert_eq!(machine.current_state(), &before);
            }
        }
    }

    #[test]
    fn entry_hook_fires_once_per_transition(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        let mut machine = downloader();
        machine.start().unwrap();

        for event in &events {
            let _ = machine.process_event(event);
        }

        let entries = &machine.context().entries;
        let history = machine.history();
        prop_assert_eq!(entries.len(), history.len() + 1);

        for ((state, event), transition) in entries.iter().skip(1).zip(history.transitions()) {
            prop_assert_eq!(state, &transition.to);
            prop_assert_eq!(event.as_ref().map(|e| e.name()), Some(transition.event.as_str()));
        }
    }

    #[test]
    fn accepted_downloads_reach_the_action_unmodified(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut machine = downloader();
        machine.start().unwrap();

        let mut accepted = Vec::new();
        for event in &events {
            if machine.process_event(event).is_ok() {
                if let Input::StartDownload(url) = event {
                    accepted.push(url.clone());
                }
            }
        }

        prop_assert_eq!(&machine.context().requested, &accepted);
    }

    #[test]
    fn checkpoint_resumes_where_it_left_off(
        head in prop::collection::vec(arbitrary_event(), 0..20),
        tail in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let mut original = downloader();
        original.start().unwrap();
        for event in &head {
            let _ = original.process_event(event);
        }

        let json = original.checkpoint().to_json().unwrap();
        let mut resumed = downloader();
        resumed.restore(Checkpoint::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(resumed.current_state(), original.current_state());

        for event in &tail {
            let a = original.process_event(event);
            let b = resumed.process_event(event);
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(resumed.history().len(), original.history().len());
    }
}
