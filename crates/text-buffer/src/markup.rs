//! Lightweight markup formatter.
//!
//! Rules, applied to each line independently:
//!
//! - A line starting with `#` becomes `<h1>…</h1>` around the rest of the
//!   line. No other rule applies to it.
//! - Otherwise `*text*` becomes `<b>text</b>` and `_text_` becomes
//!   `<i>text</i>`. A delimiter opens only when the byte after it exists and
//!   differs from it, and the same delimiter occurs again at least two bytes
//!   later. Once open, the next occurrence of that delimiter closes it. The
//!   other delimiter is literal while one is open.
//!
//! Rendering is two-pass: the exact output length is computed first, then the
//! output is filled into a single allocation.
//!
//! ```rust
//! use text_buffer::markup::render_line;
//!
//! assert_eq!(render_line("#Title"), "<h1>Title</h1>");
//! assert_eq!(render_line("*h*ello**"), "<b>h</b>ello**");
//! assert_eq!(render_line("he*ll_o_"), "he*ll<i>o</i>");
//! ```

use std::borrow::Cow;

const HEADING_MARK: char = '#';
const HEADING_OPEN: &str = "<h1>";
const HEADING_CLOSE: &str = "</h1>";
const BOLD: u8 = b'*';
const ITALIC: u8 = b'_';

fn open_tag(delimiter: u8) -> &'static str {
    if delimiter == BOLD { "<b>" } else { "<i>" }
}

fn close_tag(delimiter: u8) -> &'static str {
    if delimiter == BOLD { "</b>" } else { "</i>" }
}

/// Whether the delimiter at `index` has a valid closing partner.
fn opens_at(bytes: &[u8], index: usize) -> bool {
    let delimiter = bytes[index];
    match bytes.get(index + 1) {
        Some(&next) if next != delimiter => bytes[index + 2..].contains(&delimiter),
        _ => false,
    }
}

/// Walk `line` and report every delimiter that turns into a tag, as
/// `(byte index, tag)` pairs in order.
fn scan_tags(line: &str, mut emit: impl FnMut(usize, &'static str)) {
    let bytes = line.as_bytes();
    let mut active: Option<u8> = None;
    for (index, &byte) in bytes.iter().enumerate() {
        match active {
            None if (byte == BOLD || byte == ITALIC) && opens_at(bytes, index) => {
                active = Some(byte);
                emit(index, open_tag(byte));
            }
            Some(delimiter) if delimiter == byte => {
                active = None;
                emit(index, close_tag(byte));
            }
            _ => {}
        }
    }
}

/// Number of bytes rendering adds to `line`; zero means the line is unchanged.
pub fn extra_len(line: &str) -> usize {
    if line.starts_with(HEADING_MARK) {
        return HEADING_OPEN.len() + HEADING_CLOSE.len() - HEADING_MARK.len_utf8();
    }
    let mut extra = 0;
    // Each tag replaces its one-byte delimiter.
    scan_tags(line, |_, tag| extra += tag.len() - 1);
    extra
}

/// Render one line. Lines without markup are returned borrowed.
pub fn render_line(line: &str) -> Cow<'_, str> {
    let extra = extra_len(line);
    if extra == 0 {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + extra);
    if let Some(rest) = line.strip_prefix(HEADING_MARK) {
        out.push_str(HEADING_OPEN);
        out.push_str(rest);
        out.push_str(HEADING_CLOSE);
    } else {
        let mut copied = 0;
        scan_tags(line, |index, tag| {
            out.push_str(&line[copied..index]);
            out.push_str(tag);
            copied = index + 1;
        });
        out.push_str(&line[copied..]);
    }
    debug_assert_eq!(out.len(), line.len() + extra);
    Cow::Owned(out)
}
