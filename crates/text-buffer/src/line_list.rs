//! Line Sequence
//!
//! A singly-linked, `None`-terminated sequence of owned lines. Splicing moves
//! whole nodes between lists, so line contents are never copied when text is
//! cut out of one buffer or merged into another.

use std::fmt;

type Link = Option<Box<LineNode>>;

struct LineNode {
    text: String,
    next: Link,
}

/// Ordered sequence of owned text lines (no terminators stored).
///
/// The length is cached and always equals the number of reachable nodes.
#[derive(Default)]
pub struct LineList {
    head: Link,
    len: usize,
}

impl LineList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Parse `text` into lines, splitting on `'\n'`.
    ///
    /// Every segment terminated by `'\n'` becomes one line. Trailing content
    /// after the last terminator is discarded, so `"a\nb"` yields one line.
    pub fn parse(text: &str) -> Self {
        text.split_inclusive('\n')
            .filter_map(|segment| segment.strip_suffix('\n'))
            .map(str::to_owned)
            .collect()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no lines.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total byte length of all lines, terminators excluded.
    pub fn byte_len(&self) -> usize {
        self.iter().map(str::len).sum()
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.iter().nth(index)
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> Lines<'_> {
        Lines {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterate mutably over the lines in order.
    pub fn iter_mut(&mut self) -> LinesMut<'_> {
        LinesMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// The link slot that owns node `index` (`index == len` is the tail slot).
    fn link_at(&mut self, index: usize) -> Option<&mut Link> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Detach every line from `at` onwards and return them as a new list.
    ///
    /// Returns an empty list if `at >= len`.
    pub fn split_off(&mut self, at: usize) -> LineList {
        if at >= self.len {
            return LineList::new();
        }
        let Some(slot) = self.link_at(at) else {
            return LineList::new();
        };
        let head = slot.take();
        let moved = self.len - at;
        self.len = at;
        LineList { head, len: moved }
    }

    /// Move all of `other`'s nodes to the end of this list.
    pub fn append(&mut self, mut other: LineList) {
        if other.is_empty() {
            return;
        }
        let tail = self.len;
        if let Some(slot) = self.link_at(tail) {
            *slot = other.head.take();
            self.len += other.len;
            other.len = 0;
        }
    }

    /// Move all of `other`'s nodes into this list so that its first line ends
    /// up at position `at`. Positions past the end append.
    pub fn splice(&mut self, at: usize, other: LineList) {
        if other.is_empty() {
            return;
        }
        let tail = self.split_off(at);
        self.append(other);
        self.append(tail);
    }

    /// Detach the inclusive node range `[from, to]` and return it, relinking
    /// the survivors around the gap.
    ///
    /// Returns `None` and leaves the list untouched unless
    /// `from <= to < len()`.
    pub fn detach_range(&mut self, from: usize, to: usize) -> Option<LineList> {
        if from > to || to >= self.len {
            return None;
        }
        let mut detached = self.split_off(from);
        let survivors = detached.split_off(to - from + 1);
        self.append(survivors);
        Some(detached)
    }
}

impl Drop for LineList {
    fn drop(&mut self) {
        // Unlink node by node so long lists don't recurse through `Box` drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for LineList {
    fn clone(&self) -> Self {
        self.iter().map(str::to_owned).collect()
    }
}

impl FromIterator<String> for LineList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = LineList::new();
        let mut count = 0;
        let mut tail = &mut list.head;
        for text in iter {
            let node = tail.insert(Box::new(LineNode { text, next: None }));
            tail = &mut node.next;
            count += 1;
        }
        list.len = count;
        list
    }
}

impl PartialEq for LineList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for LineList {}

impl fmt::Debug for LineList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a LineList {
    type Item = &'a str;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the lines of a [`LineList`].
#[derive(Clone)]
pub struct Lines<'a> {
    next: Option<&'a LineNode>,
    remaining: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.text.as_str()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Lines<'_> {}

/// Mutable iterator over the lines of a [`LineList`].
pub struct LinesMut<'a> {
    next: Option<&'a mut LineNode>,
}

impl<'a> Iterator for LinesMut<'a> {
    type Item = &'a mut String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.text
        })
    }
}
