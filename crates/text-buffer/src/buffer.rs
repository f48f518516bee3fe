//! Text Buffer
//!
//! [`TextBuffer`] owns a [`LineList`] and its undo/redo history and exposes
//! every editing operation.
//!
//! # Overview
//!
//! - **Structural edits** ([`merge`](TextBuffer::merge),
//!   [`paste`](TextBuffer::paste), [`cut`](TextBuffer::cut),
//!   [`delete`](TextBuffer::delete)) validate their arguments, record an undo
//!   checkpoint, clear the redo stack and then relink nodes.
//! - **Rewrites** ([`add_prefix`](TextBuffer::add_prefix),
//!   [`format_rich_text`](TextBuffer::format_rich_text)) change line contents
//!   in place and are not undoable.
//! - **Queries** ([`dump`](TextBuffer::dump), [`search`](TextBuffer::search),
//!   [`state`](TextBuffer::state)) never modify the buffer.
//!
//! # Example
//!
//! ```rust
//! use text_buffer::TextBuffer;
//!
//! let mut buffer = TextBuffer::new("line_1\nline_2\n");
//! buffer.merge(1, TextBuffer::new("line_3\nline_4\n")).unwrap();
//! assert_eq!(buffer.dump(false), "line_1\nline_3\nline_4\nline_2\n");
//!
//! buffer.undo();
//! assert_eq!(buffer.dump(true), "1. line_1\n2. line_2\n");
//! ```

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use tracing::{debug, warn};

use crate::error::{MergeError, Result, TextBufferError};
use crate::history::History;
use crate::line_list::{LineList, Lines};
use crate::markup;
use crate::search::{self, SearchMatch};
use crate::state::BufferState;

/// Default number of snapshots kept on each history stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

const LINE_NUMBER_SEPARATOR: &str = ". ";

/// Options that control buffer behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBufferOptions {
    /// Maximum number of snapshots on each of the undo and redo stacks.
    /// `0` disables history entirely.
    pub history_limit: usize,
}

impl Default for TextBufferOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Line-oriented text buffer with bounded undo/redo.
///
/// # Example
///
/// ```rust
/// use text_buffer::TextBuffer;
///
/// let mut buffer = TextBuffer::new("1\n2\n3\n");
/// buffer.add_prefix(0, 1, "hello").unwrap();
/// assert_eq!(buffer.dump(false), "hello1\nhello2\n3\n");
/// assert_eq!(buffer.line_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TextBuffer {
    // Field order is drop order: history is released before the live lines.
    history: History,
    lines: LineList,
    options: TextBufferOptions,
}

impl TextBuffer {
    /// Create a buffer from `text`, split on `'\n'`.
    ///
    /// An unterminated trailing segment is discarded; `""` and text without
    /// any `'\n'` produce an empty buffer.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, TextBufferOptions::default())
    }

    /// Create a buffer from `text` with explicit options.
    pub fn with_options(text: &str, options: TextBufferOptions) -> Self {
        let buffer = Self::from_lines(LineList::parse(text), options);
        debug!(
            line_count = buffer.line_count(),
            history_limit = options.history_limit,
            "created text buffer"
        );
        buffer
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_lines(LineList::new(), TextBufferOptions::default())
    }

    fn from_lines(lines: LineList, options: TextBufferOptions) -> Self {
        Self {
            history: History::new(options.history_limit),
            lines,
            options,
        }
    }

    /// Number of lines, O(1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the buffer has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at 0-based `index`, without its terminator.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index)
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> Lines<'_> {
        self.lines.iter()
    }

    /// Total byte length of all lines, terminators excluded.
    pub fn byte_count(&self) -> usize {
        self.lines.byte_len()
    }

    /// Options this buffer was created with.
    pub fn options(&self) -> TextBufferOptions {
        self.options
    }

    /// Snapshot of line, byte and history counters.
    pub fn state(&self) -> BufferState {
        BufferState {
            line_count: self.line_count(),
            byte_count: self.byte_count(),
            history: self.history.state(),
        }
    }

    fn check_range(&self, op: &'static str, from: usize, to: usize) -> Result<()> {
        let line_count = self.line_count();
        if from > to || to >= line_count {
            warn!(op, from, to, line_count, "rejected out-of-range line range");
            return Err(TextBufferError::InvalidRange {
                from,
                to,
                line_count,
            });
        }
        Ok(())
    }

    fn check_position(&self, op: &'static str, pos: usize) -> Result<()> {
        let line_count = self.line_count();
        if pos > line_count {
            warn!(op, pos, line_count, "rejected out-of-range position");
            return Err(TextBufferError::InvalidPosition { pos, line_count });
        }
        Ok(())
    }

    /// Exact byte length of [`dump`](Self::dump)'s output.
    fn dump_len(&self, line_numbers: bool) -> usize {
        // Per-line overhead: the terminator, plus one digit and the separator
        // when numbering. Grows by one each time the number gains a digit.
        let mut overhead = if line_numbers {
            1 + 1 + LINE_NUMBER_SEPARATOR.len()
        } else {
            1
        };
        let mut next_width_at: usize = 10;
        let mut total = 0;
        for (index, line) in self.lines.iter().enumerate() {
            let number = index + 1;
            if line_numbers && number == next_width_at {
                next_width_at = next_width_at.saturating_mul(10);
                overhead += 1;
            }
            total += line.len() + overhead;
        }
        total
    }

    /// Render the buffer as text, each line followed by `'\n'`.
    ///
    /// With `line_numbers`, every line is prefixed by `"<N>. "` (1-based).
    /// An empty buffer dumps to `""`.
    pub fn dump(&self, line_numbers: bool) -> String {
        let capacity = self.dump_len(line_numbers);
        let mut out = String::with_capacity(capacity);
        for (index, line) in self.lines.iter().enumerate() {
            if line_numbers {
                out.push_str(&(index + 1).to_string());
                out.push_str(LINE_NUMBER_SEPARATOR);
            }
            out.push_str(line);
            out.push('\n');
        }
        debug_assert_eq!(out.len(), capacity);
        out
    }

    /// Prepend `prefix` to every line in the inclusive range `[from, to]`.
    ///
    /// An empty prefix is a no-op. Otherwise this rewrite is not undoable and
    /// **discards both history stacks**.
    ///
    /// # Errors
    ///
    /// [`TextBufferError::InvalidRange`] unless `from <= to < line_count()`.
    pub fn add_prefix(&mut self, from: usize, to: usize, prefix: &str) -> Result<()> {
        self.check_range("add_prefix", from, to)?;
        if prefix.is_empty() {
            return Ok(());
        }

        self.history.clear();
        for line in self.lines.iter_mut().skip(from).take(to - from + 1) {
            line.insert_str(0, prefix);
        }
        debug!(from, to, prefix_len = prefix.len(), "prefixed lines, history discarded");
        Ok(())
    }

    /// Move every line of `source` into this buffer at position `pos`.
    ///
    /// Line 0 of `source` becomes line `pos`; the old line `pos` follows the
    /// last moved line. Nodes are relinked, not copied. `source` is consumed
    /// and its history dropped.
    ///
    /// # Errors
    ///
    /// [`MergeError`] wrapping [`TextBufferError::InvalidPosition`] if
    /// `pos > line_count()`. The rejected `source` is handed back unchanged
    /// in [`MergeError::buffer`].
    pub fn merge(
        &mut self,
        pos: usize,
        source: TextBuffer,
    ) -> std::result::Result<(), MergeError> {
        if let Err(error) = self.check_position("merge", pos) {
            return Err(MergeError {
                error,
                buffer: source,
            });
        }
        self.history.checkpoint(&self.lines);

        let TextBuffer { lines: incoming, .. } = source;
        let moved = incoming.len();
        self.lines.splice(pos, incoming);
        debug!(pos, moved, line_count = self.line_count(), "merged buffer");
        Ok(())
    }

    /// Insert a copy of every line of `source` at position `pos`.
    ///
    /// Same placement as [`merge`](Self::merge), but `source` is left intact.
    ///
    /// # Errors
    ///
    /// [`TextBufferError::InvalidPosition`] if `pos > line_count()`.
    pub fn paste(&mut self, pos: usize, source: &TextBuffer) -> Result<()> {
        self.check_position("paste", pos)?;
        self.history.checkpoint(&self.lines);

        let copied = source.lines.len();
        if copied > 0 {
            self.lines.splice(pos, source.lines.clone());
        }
        debug!(pos, copied, line_count = self.line_count(), "pasted buffer");
        Ok(())
    }

    /// Remove the inclusive range `[from, to]` and return it as a new buffer.
    ///
    /// The detached lines move into the new buffer without copying. The new
    /// buffer has no history and inherits this buffer's options.
    ///
    /// # Errors
    ///
    /// [`TextBufferError::InvalidRange`] unless `from <= to < line_count()`.
    pub fn cut(&mut self, from: usize, to: usize) -> Result<TextBuffer> {
        self.check_range("cut", from, to)?;
        self.history.checkpoint(&self.lines);

        let detached = self.lines.detach_range(from, to).unwrap_or_default();
        debug!(from, to, line_count = self.line_count(), "cut lines");
        Ok(TextBuffer::from_lines(detached, self.options))
    }

    /// Delete the inclusive range `[from, to]`.
    ///
    /// # Errors
    ///
    /// [`TextBufferError::InvalidRange`] unless `from <= to < line_count()`.
    pub fn delete(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_range("delete", from, to)?;
        self.history.checkpoint(&self.lines);

        drop(self.lines.detach_range(from, to));
        debug!(from, to, line_count = self.line_count(), "deleted lines");
        Ok(())
    }

    /// Find every literal, case-sensitive occurrence of `pattern`.
    ///
    /// Matches on one line never overlap. Results are ordered by line, then by
    /// byte offset. An empty pattern yields no matches.
    pub fn search(&self, pattern: &str) -> Vec<SearchMatch> {
        search::search_lines(self.lines.iter(), pattern)
    }

    /// Apply the [`markup`] rules to every line.
    ///
    /// This rewrite discards the redo stack but records no undo checkpoint and
    /// leaves the undo stack untouched, so a following [`undo`](Self::undo)
    /// returns to the state before the previous structural edit.
    pub fn format_rich_text(&mut self) {
        self.history.clear_redo();

        let mut rewritten = 0usize;
        for line in self.lines.iter_mut() {
            let rendered = match markup::render_line(line) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rendered) => rendered,
            };
            *line = rendered;
            rewritten += 1;
        }
        debug!(rewritten, "formatted rich text");
    }

    /// Restore the state before the most recent structural edit.
    ///
    /// Returns `false` (and does nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.lines);
        if changed {
            debug!(line_count = self.line_count(), "undo");
        }
        changed
    }

    /// Re-apply the most recently undone edit.
    ///
    /// Returns `false` (and does nothing) if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.lines);
        if changed {
            debug!(line_count = self.line_count(), "redo");
        }
        changed
    }

    /// Returns `true` if [`undo`](Self::undo) would change the buffer.
    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    /// Returns `true` if [`redo`](Self::redo) would change the buffer.
    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines.iter() {
            f.write_str(line)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}
