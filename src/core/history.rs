//! Steppable history of visited states.
//!
//! [`TransitionHistory`] pairs an ordered sequence of visited states with an
//! explicit cursor, giving the engine linear undo/redo over everything that
//! has ever been the current state. Recording while the cursor sits before
//! the end discards the redoable tail first, the way an editor's undo stack
//! forgets a redo branch once you type something new.

use super::config::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visited state, with the moment it became current.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that became current.
    pub state: StateId,
    /// When it was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        HistoryEntry {
            state,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered sequence of visited states with an explicit cursor.
///
/// Invariants: the sequence is never empty, and `cursor` always indexes a
/// valid entry (`cursor < len`). [`record`](Self::record) is the only
/// operation that grows or truncates the sequence; stepping moves only the
/// cursor.
///
/// # Example
///
/// ```rust
/// use waypoint::core::TransitionHistory;
///
/// let mut history = TransitionHistory::seeded("idle".into());
/// history.record("running".into());
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.step_back(), Some(&"idle".into()));
/// assert_eq!(history.step_back(), None);
/// assert_eq!(history.step_forward(), Some(&"running".into()));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl TransitionHistory {
    /// Create a history containing only `initial`, with the cursor on it.
    pub fn seeded(initial: StateId) -> Self {
        TransitionHistory {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 0,
        }
    }

    /// Record a newly current state.
    ///
    /// Entries beyond the cursor are discarded first, so a new transition
    /// after one or more [`step_back`](Self::step_back) calls overwrites the
    /// redoable branch. The cursor ends on the new entry.
    pub fn record(&mut self, state: StateId) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::now(state));
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor back one entry.
    ///
    /// Returns the state the cursor now rests on, or `None` (without moving)
    /// when already at the oldest entry.
    pub fn step_back(&mut self) -> Option<&StateId> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor].state)
    }

    /// Move the cursor forward one entry.
    ///
    /// Returns the state the cursor now rests on, or `None` (without moving)
    /// when already at the newest entry.
    pub fn step_forward(&mut self) -> Option<&StateId> {
        if self.cursor + 1 == self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor].state)
    }

    /// Collapse the history to a single fresh entry for `anchor`.
    ///
    /// Everything previously recorded is forgotten, so neither stepping
    /// direction has anywhere to go until something new is recorded.
    pub fn reanchor(&mut self, anchor: StateId) {
        self.entries.clear();
        self.entries.push(HistoryEntry::now(anchor));
        self.cursor = 0;
    }

    /// The state under the cursor.
    pub fn cursor_state(&self) -> &StateId {
        &self.entries[self.cursor].state
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history is seeded at construction and never becomes empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Whether [`step_back`](Self::step_back) would move.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether [`step_forward`](Self::step_forward) would move.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Visited states in recording order, including entries beyond the
    /// cursor that are still redoable.
    pub fn path(&self) -> impl Iterator<Item = &StateId> {
        self.entries.iter().map(|entry| &entry.state)
    }

    /// All recorded entries, in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
