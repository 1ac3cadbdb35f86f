//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow with undo/redo
//! and the engine's debug-level tracing output.
//!
//! Key concepts:
//! - Multi-stage linear workflow (draft -> review -> published)
//! - Rejection loops back to an earlier stage
//! - `reset` jumps to the start without losing the recorded history
//! - `clear_history` anchors the history at the current state
//!
//! Run with: cargo run --example document_workflow

use waypoint::builder::ConfigBuilder;
use waypoint::core::StateMachine;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Document Approval Workflow ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .state("published")
        .build()
        .unwrap();

    let mut doc = StateMachine::new(config).unwrap();

    println!("States in this workflow: {:?}", doc.states().iter().map(|s| s.as_str()).collect::<Vec<_>>());
    println!("States that can 'approve': {:?}\n", doc.states_for("approve").iter().map(|s| s.as_str()).collect::<Vec<_>>());

    // First attempt gets rejected.
    doc.trigger("submit").unwrap();
    doc.trigger("reject").unwrap();
    println!("After rejection: {}", doc.state());

    // Second attempt goes through.
    doc.trigger("submit").unwrap();
    doc.trigger("approve").unwrap();
    println!("After approval:  {}\n", doc.state());

    // Unknown events are errors, not silent no-ops.
    if let Err(err) = doc.trigger("submit") {
        println!("Firing 'submit' while published fails: {err}\n");
    }

    // Walk the whole session backward.
    println!("Rewinding the session:");
    while doc.undo() {
        println!("  back to: {}", doc.state());
    }

    // Fast-forward to the end again, then forget the past.
    while doc.redo() {}
    doc.clear_history();
    println!("\nAfter clear_history: state={}, undo possible={}", doc.state(), doc.history().can_undo());

    println!("\n=== Example Complete ===");
}
