//! Undo/redo history of state changes.
//!
//! History is two parallel sequences indexed by slot: the state each change
//! moved *from*, and the state it moved *to*. Slot 0 is a sentinel meaning
//! "no state", so both sequences always share one length. A cursor marks
//! the most recently applied change.
//!
//! Entries are append-only. Undo walks the cursor back over origin states,
//! redo walks it forward over destination states, and a new change appends
//! without truncating what an earlier undo stepped over. Those entries stay
//! reachable by moving the cursor across them again.

use super::state::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What caused a recorded change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCause {
    /// Direct jump through `change_state`.
    Direct,
    /// Transition fired by an event.
    Event(EventId),
}

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// How the change was requested
    pub cause: ChangeCause,
    /// When the change was applied
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(from: StateId, to: StateId, cause: ChangeCause) -> Self {
        Self {
            from,
            to,
            cause,
            recorded_at: Utc::now(),
        }
    }
}

/// Cursor-addressed history backing undo and redo.
///
/// # Example
///
/// ```rust
/// use rewind::core::{ChangeCause, HistoryEntry, UndoHistory};
///
/// let mut history = UndoHistory::new();
/// history.record(HistoryEntry::new("a".into(), "b".into(), ChangeCause::Direct));
///
/// assert_eq!(history.step_back().unwrap(), "a");
/// assert!(history.step_back().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct UndoHistory {
    /// `entries[i]` occupies slot `i + 1`; slot 0 is the sentinel.
    entries: Vec<HistoryEntry>,
    /// `None` once undo has run past the sentinel.
    cursor: Option<usize>,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: Some(0),
        }
    }

    /// Append a change and point the cursor at it.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.cursor = Some(self.entries.len());
    }

    /// Origin state recorded at `slot`, if it names a state.
    pub fn origin_at(&self, slot: usize) -> Option<&StateId> {
        self.entry_at(slot)
            .map(|entry| &entry.from)
            .filter(|state| !state.is_blank())
    }

    /// Destination state recorded at `slot`, if it names a state.
    pub fn destination_at(&self, slot: usize) -> Option<&StateId> {
        self.entry_at(slot)
            .map(|entry| &entry.to)
            .filter(|state| !state.is_blank())
    }

    fn entry_at(&self, slot: usize) -> Option<&HistoryEntry> {
        slot.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    /// Read the origin under the cursor, then move the cursor back one slot.
    ///
    /// The cursor moves even when nothing is there to restore. It stops one
    /// position before the sentinel; every position further back would read
    /// nothing for undo and redo alike.
    pub fn step_back(&mut self) -> Option<StateId> {
        let target = self
            .cursor
            .and_then(|slot| self.origin_at(slot))
            .cloned();
        self.cursor = self.cursor.and_then(|slot| slot.checked_sub(1));
        target
    }

    /// Read the destination after the cursor and advance onto it.
    ///
    /// Leaves the cursor alone when there is nothing to redo.
    pub fn step_forward(&mut self) -> Option<StateId> {
        let next = self.cursor.map_or(0, |slot| slot + 1);
        let target = self.destination_at(next).cloned()?;
        self.cursor = Some(next);
        Some(target)
    }

    /// Drop every entry, keeping the cursor where it was.
    ///
    /// A cursor beyond the remaining slots reads nothing until the next
    /// recorded change repositions it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// True if `step_back` would yield a state.
    pub fn can_undo(&self) -> bool {
        self.cursor.and_then(|slot| self.origin_at(slot)).is_some()
    }

    /// True if `step_forward` would yield a state.
    pub fn can_redo(&self) -> bool {
        let next = self.cursor.map_or(0, |slot| slot + 1);
        self.destination_at(next).is_some()
    }

    /// Current slot, or `None` after undo has run past the sentinel.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of slots in each sequence, sentinel included.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// True when only the sentinel remains.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded changes in the order they were applied.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The "moved from" sequence, sentinel first.
    pub fn origins(&self) -> Vec<Option<&StateId>> {
        std::iter::once(None)
            .chain(self.entries.iter().map(|entry| Some(&entry.from)))
            .collect()
    }

    /// The "moved to" sequence, sentinel first.
    pub fn destinations(&self) -> Vec<Option<&StateId>> {
        std::iter::once(None)
            .chain(self.entries.iter().map(|entry| Some(&entry.to)))
            .collect()
    }
}
