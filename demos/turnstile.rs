//! Guarded Turnstile
//!
//! The same event can lead to different states depending on its payload.
//! Two guarded rows share `(Locked, Coin)`; their guards are mutually
//! exclusive, so exactly one of them fires for any coin.
//!
//! Key concepts:
//! - Guards over event payloads
//! - Exclusive guard resolution
//! - Checkpoint and resume
//!
//! Run with: cargo run --example turnstile

use switchboard::builder::{guarded_transition, simple_transition};
use switchboard::checkpoint::Checkpoint;
use switchboard::{event_enum, state_enum, StateMachine, StateMachineBuilder};

const FARE: u32 = 50;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Jammed,
    }
    error: [Jammed]
}

event_enum! {
    enum Input => InputKind {
        Coin(u32),
        Push,
        Repair,
    }
}

fn turnstile() -> Result<StateMachine<Turnstile, Input>, switchboard::builder::BuildError> {
    StateMachineBuilder::<Turnstile, Input>::new()
        .initial(Turnstile::Locked)
        .states([Turnstile::Locked, Turnstile::Unlocked, Turnstile::Jammed])
        .transitions(vec![
            guarded_transition(Turnstile::Locked, InputKind::Coin, Turnstile::Unlocked, |e: &Input| {
                matches!(e, Input::Coin(c) if *c == FARE)
            }),
            guarded_transition(Turnstile::Locked, InputKind::Coin, Turnstile::Jammed, |e: &Input| {
                matches!(e, Input::Coin(c) if *c > FARE)
            }),
            simple_transition(Turnstile::Unlocked, InputKind::Push, Turnstile::Locked),
            simple_transition(Turnstile::Jammed, InputKind::Repair, Turnstile::Locked),
        ])
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Guarded Turnstile ===\n");

    let mut gate = turnstile()?;
    gate.start()?;

    for event in [Input::Coin(20), Input::Coin(FARE), Input::Push, Input::Coin(100)] {
        match gate.process_event(&event) {
            Ok(state) => println!("{event:?} -> {state:?}"),
            Err(err) => println!("{event:?} rejected: {err}"),
        }
    }

    let saved = gate.checkpoint().to_json()?;
    println!("\nCheckpoint:\n{saved}\n");

    let mut resumed = turnstile()?;
    resumed.restore(Checkpoint::from_json(&saved)?)?;
    println!("Resumed in: {:?}", resumed.current_state());
    println!("Repair -> {:?}", resumed.process_event(Input::Repair)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
