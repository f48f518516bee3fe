//! Buffer state queries.
//!
//! Immutable summaries of a [`TextBuffer`](crate::TextBuffer), suitable for
//! status bars and test assertions.
//!
//! # Example
//!
//! ```rust
//! use text_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::new("one\ntwo\n");
//! buffer.delete(0, 0).unwrap();
//!
//! let state = buffer.state();
//! assert_eq!(state.line_count, 1);
//! assert_eq!(state.byte_count, 3);
//! assert_eq!(state.history.undo_depth, 1);
//! ```

/// Undo/redo history state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryState {
    /// Number of snapshots available to undo
    pub undo_depth: usize,
    /// Number of snapshots available to redo
    pub redo_depth: usize,
    /// Maximum number of snapshots each stack keeps
    pub capacity: usize,
}

impl HistoryState {
    /// Returns `true` if an undo would change the buffer.
    pub fn can_undo(&self) -> bool {
        self.undo_depth > 0
    }

    /// Returns `true` if a redo would change the buffer.
    pub fn can_redo(&self) -> bool {
        self.redo_depth > 0
    }
}

/// Buffer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferState {
    /// Total line count
    pub line_count: usize,
    /// Total byte count, line terminators excluded
    pub byte_count: usize,
    /// History stacks
    pub history: HistoryState,
}
