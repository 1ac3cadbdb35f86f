//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine driven by a
//! declarative configuration.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event-driven transitions via `trigger`
//! - Stepping back through the history with `undo`
//!
//! Run with: cargo run --example traffic_light

use waypoint::builder::ConfigBuilder;
use waypoint::core::StateMachine;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    // Cyclic configuration: every state advances on the same "timer" event.
    let config = ConfigBuilder::new()
        .initial("red")
        .transition("red", "timer", "green")
        .transition("green", "timer", "yellow")
        .transition("yellow", "timer", "red")
        .build()
        .unwrap();

    let mut light = StateMachine::new(config).unwrap();
    println!("Initial state: {}\n", light.state());

    println!("Advancing through one full cycle:");
    for _ in 0..3 {
        let from = light.state().clone();
        light.trigger("timer").unwrap();
        println!("  {} -> {}", from, light.state());
    }

    println!("\nVisited so far: {:?}", light.history().path().map(|s| s.as_str()).collect::<Vec<_>>());

    println!("\nStepping back two phases:");
    light.undo();
    light.undo();
    println!("  now at: {}", light.state());

    println!("\nA new transition overwrites the redoable phases:");
    light.trigger("timer").unwrap();
    println!("  now at: {} (redo available: {})", light.state(), light.history().can_redo());

    println!("\n=== Example Complete ===");
}
