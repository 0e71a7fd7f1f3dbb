use std::collections::VecDeque;

use crate::model::RoundSnapshot;

pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// Two-stack undo/redo over whole snapshots.
///
/// `undo_stack` holds past states, most recent at the back. When it grows
/// past `limit` the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: VecDeque<RoundSnapshot>,
    redo_stack: Vec<RoundSnapshot>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Records the state as it was before a mutation and discards any redo
    /// entries.
    pub fn record(&mut self, before: RoundSnapshot) {
        self.undo_stack.push_back(before);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Pops the previous state, parking `current` on the redo stack.
    pub fn undo(&mut self, current: RoundSnapshot) -> Option<RoundSnapshot> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Mirror of [`History::undo`].
    pub fn redo(&mut self, current: RoundSnapshot) -> Option<RoundSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
}
