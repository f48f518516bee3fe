//! Literal substring search.
//!
//! Searches are exact and case-sensitive. A [`memmem::Finder`] is built once
//! per call, then every line is scanned left to right for non-overlapping
//! occurrences: after a hit, scanning on that line resumes at the byte
//! immediately after the end of the match. Searching cannot fail, whatever
//! the length of the pattern.
//!
//! All positions are **byte offsets** within a line; line numbers are 1-based.

use memchr::memmem;

/// A single search hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchMatch {
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset of the match start within the line.
    pub column: usize,
}

impl SearchMatch {
    /// Create a new match record.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<(usize, usize)> for SearchMatch {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

/// Byte offsets of every non-overlapping occurrence of `finder`'s needle in
/// `line`.
pub(crate) fn find_all_in_line<'a>(
    finder: &'a memmem::Finder<'a>,
    line: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    finder.find_iter(line.as_bytes())
}

/// Find all occurrences of `pattern` in `line`, as byte offsets.
///
/// - Returns an empty list if `pattern` is empty.
/// - Overlapping occurrences are skipped: `"abab"` occurs once in `"ababab"`.
pub fn find_all(line: &str, pattern: &str) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }
    let finder = memmem::Finder::new(pattern);
    find_all_in_line(&finder, line).collect()
}

/// Search every line yielded by `lines` for `pattern`.
pub(crate) fn search_lines<'a, I>(lines: I, pattern: &str) -> Vec<SearchMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    if pattern.is_empty() {
        return Vec::new();
    }

    let finder = memmem::Finder::new(pattern);
    let mut matches = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        matches.extend(
            find_all_in_line(&finder, line).map(|column| SearchMatch::new(index + 1, column)),
        );
    }
    matches
}
