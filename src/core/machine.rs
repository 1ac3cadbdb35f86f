//! The state machine engine.

use super::config::{EventId, MachineConfig, StateId};
use super::error::MachineError;
use super::history::TransitionHistory;
use tracing::debug;

/// A finite state machine driven by a [`MachineConfig`].
///
/// The machine tracks a single current state, applies event-driven or forced
/// transitions against the configuration's tables, and keeps a steppable
/// [`TransitionHistory`] of every state that has ever been current. Failed
/// operations return an error and leave the machine untouched; the history
/// only ever records completed transitions.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::ConfigBuilder;
/// use waypoint::core::StateMachine;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .transition("idle", "run", "running")
///     .transition("running", "stop", "idle")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// assert_eq!(machine.state().as_str(), "idle");
///
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.state().as_str(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state().as_str(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state().as_str(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: StateId,
    history: TransitionHistory,
}

impl StateMachine {
    /// Construct a machine in the configuration's initial state.
    ///
    /// The history starts seeded with the initial state. Fails with
    /// [`MachineError::UndeclaredInitial`] when `initial` names no entry in
    /// the state table, which also rejects a configuration with no states
    /// at all.
    pub fn new(config: MachineConfig) -> Result<Self, MachineError> {
        if !config.contains(&config.initial) {
            return Err(MachineError::UndeclaredInitial(config.initial.clone()));
        }

        let current = config.initial.clone();
        let history = TransitionHistory::seeded(current.clone());

        Ok(StateMachine {
            config,
            current,
            history,
        })
    }

    /// The active state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// The configuration the machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Read-only view of the transition history.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Force the machine into `state`, bypassing event rules.
    ///
    /// Records the new state in the history, discarding any redoable
    /// entries beyond the cursor first (a new transition overwrites the
    /// redo branch). Fails with [`MachineError::UnknownState`] when `state`
    /// is not declared in the configuration; nothing is recorded then.
    pub fn change_state(&mut self, state: impl Into<StateId>) -> Result<(), MachineError> {
        let state = state.into();
        if !self.config.contains(&state) {
            return Err(MachineError::UnknownState(state));
        }

        debug!(from = %self.current, to = %state, "State changed");
        self.current = state.clone();
        self.history.record(state);
        Ok(())
    }

    /// Fire `event` and follow the current state's transition table.
    ///
    /// A state whose table has no entry for the event is an error, not a
    /// no-op: [`MachineError::NoTransition`] names the state and event, and
    /// the machine stays put. On success this delegates to
    /// [`change_state`](Self::change_state), so exactly one history entry is
    /// recorded.
    pub fn trigger(&mut self, event: impl Into<EventId>) -> Result<(), MachineError> {
        let event = event.into();
        let destination = self
            .config
            .destination(&self.current, &event)
            .cloned()
            .ok_or_else(|| MachineError::NoTransition {
                state: self.current.clone(),
                event: event.clone(),
            })?;

        debug!(event = %event, destination = %destination, "Event fired");
        self.change_state(destination)
    }

    /// Jump back to the configuration's initial state.
    ///
    /// Neither the history nor its cursor is touched; only the active state
    /// reverts. The recorded past stays undoable/redoable exactly as it was.
    pub fn reset(&mut self) {
        debug!(initial = %self.config.initial, "Reset to initial state");
        self.current = self.config.initial.clone();
    }

    /// All states declared in the configuration.
    pub fn states(&self) -> Vec<&StateId> {
        self.config.state_ids().collect()
    }

    /// States from which firing `event` is legal.
    ///
    /// Empty when no state handles the event, including when the event is
    /// unknown to the whole configuration.
    pub fn states_for(&self, event: impl Into<EventId>) -> Vec<&StateId> {
        let event = event.into();
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.handles(&event))
            .map(|(id, _)| id)
            .collect()
    }

    /// Step one state back in the history.
    ///
    /// Returns `false` (without mutating anything) when already at the
    /// oldest recorded state.
    pub fn undo(&mut self) -> bool {
        if let Some(state) = self.history.step_back() {
            self.current = state.clone();
            debug!(state = %self.current, "Undo");
            true
        } else {
            false
        }
    }

    /// Step one state forward in the history.
    ///
    /// Returns `false` (without mutating anything) when already at the
    /// newest recorded state.
    pub fn redo(&mut self) -> bool {
        if let Some(state) = self.history.step_forward() {
            self.current = state.clone();
            debug!(state = %self.current, "Redo");
            true
        } else {
            false
        }
    }

    /// Forget the recorded past, keeping only the current state.
    ///
    /// The history collapses to a single entry for the state current at the
    /// moment of the call (not the configuration's initial state), so an
    /// immediate [`undo`](Self::undo) has nothing to step back to.
    pub fn clear_history(&mut self) {
        debug!(anchor = %self.current, "History cleared");
        self.history.reanchor(self.current.clone());
    }
}
