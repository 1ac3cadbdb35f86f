//! Configuration value types describing a state machine.
//!
//! A [`MachineConfig`] is the declarative description the engine runs on:
//! an initial state plus a table of states, each with its own event ->
//! destination transition table. The engine treats a configuration as
//! immutable input; it is constructed once (by hand, via the
//! [`ConfigBuilder`](crate::builder::ConfigBuilder), or deserialized from a
//! host's own format) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a state.
///
/// Identifiers are opaque to the engine; they only need to match between
/// the configuration's state table and its transition destinations.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateId;
///
/// let id = StateId::from("idle");
/// assert_eq!(id.as_str(), "idle");
/// assert_eq!(id.to_string(), "idle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// Create a state identifier.
    pub fn new(id: impl Into<String>) -> Self {
        StateId(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        StateId(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        StateId(id)
    }
}

/// Identifier of an event that can trigger a transition.
///
/// # Example
///
/// ```rust
/// use waypoint::core::EventId;
///
/// let event = EventId::from("run");
/// assert_eq!(event.as_str(), "run");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Create an event identifier.
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId(id.to_string())
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        EventId(id)
    }
}

/// Per-state transition table: which event leads to which destination.
///
/// A state with an empty table is valid; it simply cannot be left via
/// [`trigger`](crate::core::StateMachine::trigger).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event -> destination state.
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDef {
    /// Whether this state has a transition for `event`.
    pub fn handles(&self, event: &EventId) -> bool {
        self.transitions.contains_key(event)
    }

    /// Destination for `event`, if the state handles it.
    pub fn destination(&self, event: &EventId) -> Option<&StateId> {
        self.transitions.get(event)
    }
}

/// Declarative description of a state machine.
///
/// The engine requires `initial` to name a key of `states` (checked when a
/// [`StateMachine`](crate::core::StateMachine) is constructed). Transition
/// destinations naming undeclared states are the configuration owner's
/// responsibility; the [`ConfigBuilder`](crate::builder::ConfigBuilder)
/// rejects them at build time.
///
/// # Example
///
/// Configurations deserialize from the plain shape hosts usually store:
///
/// ```rust
/// use waypoint::core::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_value(serde_json::json!({
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "run": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// })).unwrap();
///
/// assert_eq!(config.initial.as_str(), "idle");
/// assert!(config.contains(&"running".into()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// The state the machine starts in.
    pub initial: StateId,
    /// State identifier -> state descriptor.
    pub states: BTreeMap<StateId, StateDef>,
}

impl MachineConfig {
    /// Whether `state` is declared in the state table.
    pub fn contains(&self, state: &StateId) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of firing `event` while in `state`, if any.
    pub fn destination(&self, state: &StateId, event: &EventId) -> Option<&StateId> {
        self.states.get(state).and_then(|def| def.destination(event))
    }

    /// All declared state identifiers, in identifier order.
    pub fn state_ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    /// State identifiers whose transition table handles `event`.
    ///
    /// Empty when no state handles the event, including when the event
    /// appears nowhere in the configuration.
    pub fn states_handling<'a>(&'a self, event: &'a EventId) -> impl Iterator<Item = &'a StateId> {
        self.states
            .iter()
            .filter(move |(_, def)| def.handles(event))
            .map(|(id, _)| id)
    }
}
