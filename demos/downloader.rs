//! Downloader State Machine
//!
//! A flat machine with four states and three events. Starting a download
//! issues a (simulated) request from the transition action; errors are
//! recoverable by starting again.
//!
//! Key concepts:
//! - Payload-carrying events routed by kind
//! - Transition actions with access to the machine context
//! - Entry hooks reported through `tracing`
//! - Unhandled events surfaced as errors
//!
//! Run with: RUST_LOG=debug cargo run --example downloader

use switchboard::engine::{HookError, Hooks, Trigger};
use switchboard::report::{trace_unhandled, TracingHooks};
use switchboard::{event_enum, state_enum, StateMachineBuilder, TransitionBuilder};
use tracing::info;

state_enum! {
    enum Download {
        Uninitialized,
        Downloading,
        ContentReady,
        Error,
    }
    error: [Error]
}

event_enum! {
    enum Input => InputKind {
        StartDownload(String),
        ContentReady,
        Error,
    }
}

/// Machine context: a request queue plus the tracing sink.
#[derive(Default)]
struct Downloader {
    tracer: TracingHooks,
    requests: Vec<String>,
}

impl Hooks<Download, Input> for Downloader {
    fn on_entry(&mut self, state: &Download, trigger: Trigger<'_, Input>) -> Result<(), HookError> {
        match state {
            Download::Error => Ok(()),
            _ => Hooks::<Download, Input>::on_entry(&mut self.tracer, state, trigger),
        }
    }

    fn on_exit(&mut self, state: &Download, event: &Input) -> Result<(), HookError> {
        Hooks::<Download, Input>::on_exit(&mut self.tracer, state, event)
    }
}

fn handle_download(ctx: &mut Downloader, event: &Input) -> Result<(), HookError> {
    if let Input::StartDownload(url) = event {
        info!(url = url.as_str(), "requesting download");
        ctx.requests.push(url.clone());
    }
    Ok(())
}

type Row = TransitionBuilder<Download, Input, Downloader>;

fn start_download_from(from: Download) -> Row {
    Row::new()
        .from(from)
        .on(InputKind::StartDownload)
        .to(Download::Downloading)
        .action(handle_download)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("=== Downloader State Machine ===\n");

    let mut machine = StateMachineBuilder::<Download, Input, Downloader>::new()
        .initial(Download::Uninitialized)
        .states([
            Download::Uninitialized,
            Download::Downloading,
            Download::ContentReady,
            Download::Error,
        ])
        .transition(start_download_from(Download::Uninitialized))?
        .transition(
            Row::new()
                .from(Download::Downloading)
                .on(InputKind::ContentReady)
                .to(Download::ContentReady),
        )?
        .transition(
            Row::new()
                .from(Download::Downloading)
                .on(InputKind::Error)
                .to(Download::Error),
        )?
        .transition(start_download_from(Download::ContentReady))?
        .transition(start_download_from(Download::Error))?
        .on_no_transition(trace_unhandled)
        .build()?;

    machine.start()?;
    println!("Started in: {:?}", machine.current_state());

    let script = [
        Input::StartDownload("http://google.com/".to_string()),
        Input::ContentReady,
        Input::ContentReady,
        Input::StartDownload("http://example.org/big.iso".to_string()),
        Input::Error,
        Input::StartDownload("http://mirror.example.org/big.iso".to_string()),
    ];

    for event in script {
        match machine.process_event(&event) {
            Ok(state) => println!("{:<45} -> {:?}", format!("{event:?}"), state),
            Err(err) => println!("{:<45} !! {err}", format!("{event:?}")),
        }
    }

    println!("\nRequests issued: {:?}", machine.context().requests);
    println!(
        "Path: {:?}",
        machine
            .history()
            .get_path()
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
