//! Engine error types.

use super::config::{EventId, StateId};
use thiserror::Error;

/// Errors raised by [`StateMachine`](crate::core::StateMachine) operations.
///
/// Every variant signals a violated precondition and carries the offending
/// identifier; the machine is left unmodified whenever one is returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MachineError {
    /// The configuration's initial state is not in its state table, so no
    /// machine can be constructed from it.
    #[error("Initial state '{0}' is not declared in the configuration")]
    UndeclaredInitial(StateId),

    /// A forced state change named a state the configuration does not
    /// declare.
    #[error("Unknown state '{0}'")]
    UnknownState(StateId),

    /// The current state's transition table has no entry for the fired
    /// event.
    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition {
        /// State the machine was in when the event fired.
        state: StateId,
        /// The event that no table entry matched.
        event: EventId,
    },
}
