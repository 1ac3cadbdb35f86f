//! Build errors for the configuration builder.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state or transition")]
    NoStates,

    #[error("Initial state '{0}' is not a declared state")]
    UndeclaredInitial(StateId),

    #[error("Transition '{from}' --{event}--> '{to}' targets an undeclared state")]
    UndeclaredTarget {
        from: StateId,
        event: EventId,
        to: StateId,
    },
}
