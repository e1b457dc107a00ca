//! The downloader machine used by the integration tests.

#![allow(dead_code)]

use switchboard::engine::{HookError, Hooks, StateMachine, Trigger};
use switchboard::{event_enum, state_enum, StateMachineBuilder, TransitionBuilder};

state_enum! {
    pub enum Download {
        Uninitialized,
        Downloading,
        ContentReady,
        Error,
    }
    error: [Error]
}

event_enum! {
    pub enum Input => InputKind {
        StartDownload(String),
        ContentReady,
        Error,
    }
}

type Row = TransitionBuilder<Download, Input, Downloader>;

/// Context recording what the hooks and actions saw.
#[derive(Debug, Default)]
pub struct Downloader {
    pub requested: Vec<String>,
    pub entries: Vec<(Download, Option<Input>)>,
}

impl Hooks<Download, Input> for Downloader {
    fn on_entry(&mut self, state: &Download, trigger: Trigger<'_, Input>) -> Result<(), HookError> {
        self.entries.push((state.clone(), trigger.event().cloned()));
        Ok(())
    }
}

pub fn handle_download(ctx: &mut Downloader, event: &Input) -> Result<(), HookError> {
    if let Input::StartDownload(url) = event {
        ctx.requested.push(url.clone());
    }
    Ok(())
}

fn start_download_from(from: Download) -> Row {
    Row::new()
        .from(from)
        .on(InputKind::StartDownload)
        .to(Download::Downloading)
        .action(handle_download)
}

pub fn downloader() -> StateMachine<Download, Input, Downloader> {
    StateMachineBuilder::<Download, Input, Downloader>::new()
        .initial(Download::Uninitialized)
        .states([
            Download::Uninitialized,
            Download::Downloading,
            Download::ContentReady,
            Download::Error,
        ])
        .transition(start_download_from(Download::Uninitialized))
        .and_then(|b| {
            b.transition(
                Row::new()
                    .from(Download::Downloading)
                    .on(InputKind::ContentReady)
                    .to(Download::ContentReady),
            )
        })
        .and_then(|b| {
            b.transition(
                Row::new()
                    .from(Download::Downloading)
                    .on(InputKind::Error)
                    .to(Download::Error),
            )
        })
        .and_then(|b| b.transition(start_download_from(Download::ContentReady)))
        .and_then(|b| b.transition(start_download_from(Download::Error)))
        .and_then(|b| b.build())
        .expect("downloader table is valid")
}

/// The downloader table written as a plain function.
pub fn expected_next(state: &Download, event: &Input) -> Option<Download> {
    match (state, event) {
        (Download::Uninitialized, Input::StartDownload(_)) => Some(Download::Downloading),
        (Download::Downloading, Input::ContentReady) => Some(Download::ContentReady),
        (Download::Downloading, Input::Error) => Some(Download::Error),
        (Download::ContentReady, Input::StartDownload(_)) => Some(Download::Downloading),
        (Download::Error, Input::StartDownload(_)) => Some(Download::Downloading),
        _ => None,
    }
}
