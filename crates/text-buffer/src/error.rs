//! Error types shared by every fallible buffer operation.

use thiserror::Error;

use crate::buffer::TextBuffer;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, TextBufferError>;

#[derive(Debug, Error)]
/// Errors produced when a buffer operation is called outside its contract.
///
/// A rejected call never mutates the buffer and never touches its history.
pub enum TextBufferError {
    #[error("invalid line range {from}..={to} for buffer with {line_count} lines")]
    /// An inclusive line range was reversed or reached past the last line.
    InvalidRange {
        /// First line of the requested range (0-based).
        from: usize,
        /// Last line of the requested range (0-based, inclusive).
        to: usize,
        /// Line count of the buffer at the time of the call.
        line_count: usize,
    },

    #[error("invalid insertion position {pos} for buffer with {line_count} lines")]
    /// A splice position was greater than the buffer's line count.
    InvalidPosition {
        /// Requested insertion position (0-based).
        pos: usize,
        /// Line count of the buffer at the time of the call.
        line_count: usize,
    },
}

/// A rejected [`TextBuffer::merge`], carrying the source buffer back to the
/// caller.
///
/// ```rust
/// use text_buffer::TextBuffer;
///
/// let mut dst = TextBuffer::new("a\n");
/// let rejected = dst.merge(3, TextBuffer::new("b\n")).unwrap_err();
/// assert_eq!(rejected.buffer.dump(false), "b\n");
///
/// dst.merge(1, rejected.into_buffer()).unwrap();
/// assert_eq!(dst.dump(false), "a\nb\n");
/// ```
#[derive(Debug, Error)]
#[error("{error}")]
pub struct MergeError {
    /// Why the merge was rejected.
    pub error: TextBufferError,
    /// The source buffer, unchanged.
    pub buffer: TextBuffer,
}

impl MergeError {
    /// Take back the source buffer.
    pub fn into_buffer(self) -> TextBuffer {
        self.buffer
    }
}

impl From<MergeError> for TextBufferError {
    fn from(rejected: MergeError) -> Self {
        rejected.error
    }
}
