//! Waypoint: a configuration-driven finite state machine with an undoable
//! transition history.
//!
//! A machine is constructed once from a declarative [`MachineConfig`]
//! (states and their event -> destination tables) and thereafter tracks a
//! single current state. Every state that ever becomes current is recorded
//! in a linear, cursor-addressed history, so transitions can be stepped
//! backward and forward like an editor's undo stack.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable input describing states and transitions,
//!   assembled with [`ConfigBuilder`](builder::ConfigBuilder) or
//!   deserialized from a host's own format
//! - **Engine**: [`StateMachine`](core::StateMachine) applies event-driven
//!   (`trigger`) and forced (`change_state`) transitions, validated against
//!   the configuration
//! - **History**: [`TransitionHistory`](core::TransitionHistory) keeps the
//!   visitation order with an explicit cursor; a new transition after an
//!   undo discards the redoable branch
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::ConfigBuilder;
//! use waypoint::core::StateMachine;
//!
//! let config = ConfigBuilder::new()
//!     .initial("idle")
//!     .transition("idle", "run", "running")
//!     .transition("running", "stop", "idle")
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//! machine.trigger("run").unwrap();
//! assert_eq!(machine.state().as_str(), "running");
//!
//! // Unknown events are errors, not no-ops.
//! assert!(machine.trigger("jump").is_err());
//!
//! // The history steps back and forward.
//! assert!(machine.undo());
//! assert_eq!(machine.state().as_str(), "idle");
//! assert!(machine.redo());
//! assert_eq!(machine.state().as_str(), "running");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder};
pub use crate::core::{EventId, MachineConfig, MachineError, StateDef, StateId, StateMachine};
