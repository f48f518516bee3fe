#![warn(missing_docs)]
//! Text Buffer - Line-Oriented Editing Kernel
//!
//! # Overview
//!
//! `text-buffer` is a small editing kernel that stores text as a singly-linked sequence of
//! lines. Lines move between buffers by relinking nodes, history is kept as bounded stacks of
//! full snapshots, and all positions are byte based (no Unicode-aware semantics).
//!
//! # Core Features
//!
//! - **Linked Line Storage**: cut and merge transfer nodes without copying text
//! - **Bounded Undo/Redo**: up to 10 snapshots per stack by default, oldest evicted first
//! - **Splice Operations**: merge, paste, cut and delete over inclusive line ranges
//! - **Literal Search**: non-overlapping, case-sensitive, reported as `(line, byte offset)`
//! - **Markup Formatting**: `#heading`, `*bold*` and `_italic_` rendered to HTML tags
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  TextBuffer (operations, validation)        │  ← Public API
//! ├──────────────────────┬──────────────────────┤
//! │  Search / Markup     │  History (snapshots) │  ← Per-line passes / undo
//! ├──────────────────────┴──────────────────────┤
//! │  LineList (singly-linked owned lines)       │  ← Line Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use text_buffer::{SearchMatch, TextBuffer};
//!
//! let mut buffer = TextBuffer::new("line_1\nline_2\nline_3\nline_4\n");
//!
//! // Cut two lines out into their own buffer, then paste them back.
//! let clip = buffer.cut(1, 2).unwrap();
//! assert_eq!(buffer.dump(false), "line_1\nline_4\n");
//! buffer.paste(0, &clip).unwrap();
//! assert_eq!(buffer.dump(false), "line_2\nline_3\nline_1\nline_4\n");
//!
//! // Undo the paste.
//! assert!(buffer.undo());
//! assert_eq!(buffer.line_count(), 2);
//!
//! // Search reports 1-based lines and 0-based byte offsets.
//! let matches = buffer.search("_4");
//! assert_eq!(matches, vec![SearchMatch::new(2, 4)]);
//! ```
//!
//! # Error Handling
//!
//! Out-of-range positions are reported as [`TextBufferError`] values and leave the buffer and
//! its history untouched. A rejected [`TextBuffer::merge`] returns a [`MergeError`] that hands
//! the source buffer back. No-op conditions (empty prefix, empty pattern, undo on an empty
//! stack, splicing an empty buffer) are never errors.
//!
//! # Logging
//!
//! Operations emit [`tracing`] events (`debug` for edits, `warn` for rejected calls, `trace`
//! for history eviction). The crate never installs a subscriber.
//!
//! # Module Description
//!
//! - [`line_list`] - singly-linked line storage
//! - [`buffer`] - the [`TextBuffer`] and its options
//! - [`search`] - literal substring search
//! - [`markup`] - rich text formatter
//! - [`state`] - state query structs
//! - [`error`] - error types

pub mod buffer;
pub mod error;
mod history;
pub mod line_list;
pub mod markup;
pub mod search;
pub mod state;

pub use buffer::{DEFAULT_HISTORY_LIMIT, TextBuffer, TextBufferOptions};
pub use error::{MergeError, Result, TextBufferError};
pub use line_list::{LineList, Lines};
pub use search::SearchMatch;
pub use state::{BufferState, HistoryState};
