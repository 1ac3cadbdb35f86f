//! Fluent builder for machine configurations.

use crate::builder::error::BuildError;
use crate::core::{EventId, MachineConfig, StateDef, StateId};
use std::collections::BTreeMap;

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// [`transition`](Self::transition) implicitly declares its source state;
/// states that are only ever destinations (terminal states) must be declared
/// with [`state`](Self::state). `build` validates what the engine itself
/// does not: that every transition destination names a declared state.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial.as_str(), "draft");
/// assert_eq!(config.states.len(), 3);
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: BTreeMap<StateId, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no outgoing transitions (or ensure an already
    /// declared one exists).
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition, declaring the source state if needed.
    ///
    /// Re-adding the same `(from, event)` pair overwrites the previous
    /// destination, as in a map literal.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    ///
    /// Fails when no initial state was set, no states were declared, the
    /// initial state is undeclared, or any transition targets an undeclared
    /// state.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if !self.states.contains_key(&initial) {
            return Err(BuildError::UndeclaredInitial(initial));
        }

        for (from, def) in &self.states {
            for (event, to) in &def.transitions {
                if !self.states.contains_key(to) {
                    return Err(BuildError::UndeclaredTarget {
                        from: from.clone(),
                        event: event.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}
