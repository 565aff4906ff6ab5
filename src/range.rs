//! Contiguous windows over a collection.

use std::fmt;
use std::ops::Range;

/// A contiguous run of positions: `length` elements starting at `location`.
///
/// # Examples
///
/// ```rust
/// use object_array::IndexRange;
///
/// let range = IndexRange::new(1, 2);
/// assert_eq!(range.end(), 3);
/// assert!(range.fits(4));
/// assert!(!range.fits(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexRange {
    /// First position of the window.
    pub location: usize,
    /// Number of positions in the window.
    pub length: usize,
}

impl IndexRange {
    /// Creates a range of `length` positions starting at `location`.
    #[inline]
    #[must_use]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// The range covering `0..count`.
    #[inline]
    #[must_use]
    pub const fn full(count: usize) -> Self {
        Self::new(0, count)
    }

    /// One past the last position. Saturates instead of overflowing.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns `true` if the range has no positions.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns `true` if `index` lies inside the range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.location && index < self.end()
    }

    /// Returns `true` if every position lies inside `0..count`.
    #[inline]
    #[must_use]
    pub const fn fits(&self, count: usize) -> bool {
        match self.location.checked_add(self.length) {
            Some(end) => end <= count,
            None => false,
        }
    }

    /// Converts to a standard half-open range.
    #[inline]
    #[must_use]
    pub const fn to_range(&self) -> Range<usize> {
        self.location..self.end()
    }

    /// Panics unless the range fits a collection of `count` elements.
    #[track_caller]
    pub(crate) fn check(&self, operation: &str, count: usize) {
        assert!(
            self.fits(count),
            "{operation}: range {self} out of bounds for count {count}"
        );
    }
}

impl From<Range<usize>> for IndexRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end.saturating_sub(range.start))
    }
}

impl From<IndexRange> for Range<usize> {
    fn from(range: IndexRange) -> Self {
        range.to_range()
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{{}, {}}}", self.location, self.length)
    }
}

/// Panics unless `index < count`.
#[inline]
#[track_caller]
pub(crate) fn check_index(operation: &str, index: usize, count: usize) {
    assert!(
        index < count,
        "{operation}: index {index} out of bounds for count {count}"
    );
}
