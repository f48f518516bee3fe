//! Snapshot-based undo/redo history.
//!
//! Each checkpoint stores a full, independent copy of the line sequence.
//! Undo and redo never copy lines: the popped entry is swapped with the live
//! sequence and then carries the replaced content onto the opposite stack.

use std::collections::VecDeque;
use std::mem;

use tracing::trace;

use crate::line_list::LineList;
use crate::state::HistoryState;

/// A saved line sequence. Never shares nodes with a live buffer.
#[derive(Debug, Clone)]
struct Snapshot {
    lines: LineList,
}

/// Capacity-bounded stack of snapshots; the oldest entry is evicted first.
#[derive(Debug, Clone)]
struct SnapshotStack {
    entries: VecDeque<Snapshot>,
    capacity: usize,
}

impl SnapshotStack {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity
            && let Some(evicted) = self.entries.pop_front()
        {
            trace!(
                evicted_lines = evicted.lines.len(),
                capacity = self.capacity,
                "evicted oldest history snapshot"
            );
        }
        self.entries.push_back(snapshot);
    }

    fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The undo and redo stacks of one buffer.
#[derive(Debug, Clone)]
pub(crate) struct History {
    undo: SnapshotStack,
    redo: SnapshotStack,
}

impl History {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            undo: SnapshotStack::new(capacity),
            redo: SnapshotStack::new(capacity),
        }
    }

    /// Record `lines` as the state to return to, discarding any redo entries.
    pub(crate) fn checkpoint(&mut self, lines: &LineList) {
        self.redo.clear();
        self.undo.push(Snapshot {
            lines: lines.clone(),
        });
    }

    /// Restore the newest undo snapshot into `live`. Returns `false` if there
    /// was nothing to undo.
    pub(crate) fn undo(&mut self, live: &mut LineList) -> bool {
        Self::step(&mut self.undo, &mut self.redo, live)
    }

    /// Restore the newest redo snapshot into `live`. Returns `false` if there
    /// was nothing to redo.
    pub(crate) fn redo(&mut self, live: &mut LineList) -> bool {
        Self::step(&mut self.redo, &mut self.undo, live)
    }

    fn step(from: &mut SnapshotStack, to: &mut SnapshotStack, live: &mut LineList) -> bool {
        let Some(mut entry) = from.pop() else {
            return false;
        };
        mem::swap(&mut entry.lines, live);
        to.push(entry);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub(crate) fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub(crate) fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub(crate) fn state(&self) -> HistoryState {
        HistoryState {
            undo_depth: self.undo.len(),
            redo_depth: self.redo.len(),
            capacity: self.undo.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> LineList {
        LineList::parse(text)
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = History::new(10);
        let mut live = lines("a\n");
        assert!(!history.undo(&mut live));
        assert!(!history.redo(&mut live));
        assert_eq!(live, lines("a\n"));
    }

    #[test]
    fn test_undo_swaps_without_copying() {
        let mut history = History::new(10);
        let mut live = lines("before\n");
        history.checkpoint(&live);

        live = lines("after\n");
        let after_ptr = live.get(0).map(str::as_ptr);

        assert!(history.undo(&mut live));
        assert_eq!(live, lines("before\n"));
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 1);

        assert!(history.redo(&mut live));
        assert_eq!(live, lines("after\n"));
        // The redo entry carried the exact nodes that were replaced by undo.
        assert_eq!(live.get(0).map(str::as_ptr), after_ptr);
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new(10);
        let mut live = lines("1\n");
        history.checkpoint(&live);
        live = lines("2\n");
        history.undo(&mut live);
        assert_eq!(history.redo_depth(), 1);

        history.checkpoint(&live);
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::new(3);
        let mut live = LineList::new();
        for i in 0..5 {
            history.checkpoint(&live);
            live = lines(&format!("{i}\n"));
        }
        assert_eq!(history.undo_depth(), 3);

        let mut restored = Vec::new();
        while history.undo(&mut live) {
            restored.push(live.get(0).map(str::to_owned));
        }
        assert_eq!(
            restored,
            vec![
                Some("3".to_string()),
                Some("2".to_string()),
                Some("1".to_string())
            ]
        );
    }

    #[test]
    fn test_zero_capacity_disables_history() {
        let mut history = History::new(0);
        let mut live = lines("x\n");
        history.checkpoint(&live);
        assert_eq!(history.undo_depth(), 0);
        assert!(!history.undo(&mut live));
    }

    #[test]
    fn test_state_reports_depths() {
        let mut history = History::new(10);
        let live = lines("x\n");
        history.checkpoint(&live);
        history.checkpoint(&live);
        let state = history.state();
        assert_eq!(state.undo_depth, 2);
        assert_eq!(state.redo_depth, 0);
        assert_eq!(state.capacity, 10);
        history.clear();
        assert_eq!(history.state().undo_depth, 0);
    }
}
