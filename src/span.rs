//! Index ranges over a single text snapshot
//!
//! A [`Span`] is an inclusive `[start, end]` byte range into one specific
//! snapshot of a text buffer. Spans do not follow the buffer: every splice
//! that changes the buffer's length invalidates the positions of spans at
//! or after the splice point, and the owner must re-shift them before
//! further use. The shift operations here are the only sanctioned way to
//! do that.
//!
//! ## Key Design
//!
//! - **Inclusive end**: `len = end - start + 1`, so a span can never be
//!   empty; zero-length markup produces no span at all
//! - **Byte offsets**: positions come from regex matches and therefore
//!   always sit on UTF-8 boundaries
//! - **Signed shifts**: splices shrink and grow text, so deltas are
//!   `isize`; shifts saturate at zero rather than wrapping

use serde::{Deserialize, Serialize};

/// An inclusive index range over one snapshot of a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `[start, end]`, both inclusive
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "span end {} before start {}", end, start);
        Span { start, end }
    }

    /// Span covering all of `text`, or `None` for empty text
    pub fn of(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Span::new(0, text.len() - 1))
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Move only the start by `delta`
    pub fn shift_start(&mut self, delta: isize) {
        self.start = self.start.saturating_add_signed(delta);
        debug_assert!(self.end >= self.start);
    }

    /// Move only the end by `delta`
    pub fn shift_end(&mut self, delta: isize) {
        self.end = self.end.saturating_add_signed(delta);
        debug_assert!(self.end >= self.start);
    }

    /// Move both bounds by `delta`, preserving the length
    pub fn shift_both(&mut self, delta: isize) {
        self.start = self.start.saturating_add_signed(delta);
        self.end = self.end.saturating_add_signed(delta);
    }

    /// Whether `other` lies entirely within this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Whether the two spans share at least one index
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The equivalent `start..=end` range, for slicing
    pub fn as_range(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
