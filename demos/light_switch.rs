//! Light Switch
//!
//! This example drives a two-state machine loaded from JSON and walks its
//! undo/redo history.
//!
//! Key concepts:
//! - Configuration read from the JSON contract
//! - Event-driven transitions versus direct jumps
//! - Cursor-based undo and redo
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example light_switch

use rewind::StateMachine;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "initial": "off",
    "states": {
        "off": { "transitions": { "turnOn": "on" } },
        "on": { "transitions": { "turnOff": "off", "dim": "dimmed" } },
        "dimmed": { "transitions": { "turnOff": "off", "brighten": "on" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Light Switch Example ===\n");

    let mut machine = StateMachine::from_json(CONFIG)?;
    println!("Initial state: {}", machine.state());
    println!("States handling 'turnOff': {:?}", machine.states(Some("turnOff")));

    machine.trigger("turnOn")?;
    machine.trigger("dim")?;
    println!("After turnOn, dim: {}", machine.state());

    if let Err(err) = machine.trigger("turnOn") {
        println!("Rejected: {err}");
    }

    machine.change_state("off")?;
    println!("Jumped directly to: {}", machine.state());

    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }
    println!("Nothing left to undo");

    machine.change_state("on")?;
    println!("Fresh change after undo: {}", machine.state());

    while machine.undo() {
        println!("  undo -> {}", machine.state());
    }

    machine.clear_history();
    println!("History cleared; undo available: {}", machine.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
