//! Ordered sets of positions stored as runs.
//!
//! [`IndexSet`] stores non-negative positions as a sorted list of disjoint,
//! non-adjacent half-open runs. Inserting `3` into `{1, 2, 4}` produces the
//! single run `1..5`. Scattered operations on collections (`elements_at`,
//! `remove_all_at`, `replace_all_at`) process one run at a time.
//!
//! # Examples
//!
//! ```rust
//! use object_array::{IndexRange, IndexSet};
//!
//! let mut indexes: IndexSet = [1, 2, 4].into_iter().collect();
//! assert_eq!(indexes.ranges().count(), 2);
//!
//! indexes.insert(3);
//! let ranges: Vec<IndexRange> = indexes.ranges().collect();
//! assert_eq!(ranges, vec![IndexRange::new(1, 4)]);
//! assert_eq!(indexes.count(), 4);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::{ControlFlow, Range};

use smallvec::SmallVec;

use crate::options::EnumerationOptions;
use crate::range::IndexRange;

/// Number of runs stored inline before spilling to the heap.
const INLINE_RUNS: usize = 4;

/// An ordered set of positions.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexSet {
    /// Sorted, disjoint, non-adjacent, non-empty runs.
    runs: SmallVec<[Range<usize>; INLINE_RUNS]>,
}

impl IndexSet {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: SmallVec::new(),
        }
    }

    /// Creates a set holding a single position.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let mut set = Self::new();
        set.insert(index);
        set
    }

    /// Creates a set holding every position of `range`.
    #[must_use]
    pub fn from_range(range: impl Into<IndexRange>) -> Self {
        let mut set = Self::new();
        set.insert_range(range);
        set
    }

    /// Number of positions in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.runs.iter().map(ExactSizeIterator::len).sum()
    }

    /// Returns `true` if the set holds no positions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Smallest position, if any.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.runs.first().map(|run| run.start)
    }

    /// Largest position, if any.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.runs.last().map(|run| run.end - 1)
    }

    /// Returns `true` if `index` is in the set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let position = self.runs.partition_point(|run| run.end <= index);
        self.runs
            .get(position)
            .is_some_and(|run| run.start <= index)
    }

    /// Adds a single position.
    ///
    /// Positions are stored as half-open runs, so `usize::MAX` cannot be
    /// represented. Debug builds panic on it; release builds ignore it.
    #[track_caller]
    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < usize::MAX, "insert: index {index} is not representable");
        self.insert_range(index..index.saturating_add(1));
    }

    /// Adds every position of `range`, merging with touching runs.
    pub fn insert_range(&mut self, range: impl Into<IndexRange>) {
        let range = range.into().to_range();
        if range.is_empty() {
            return;
        }
        let first = self.runs.partition_point(|run| run.end < range.start);
        let last = self.runs.partition_point(|run| run.start <= range.end);
        if first == last {
            self.runs.insert(first, range);
            return;
        }
        let start = range.start.min(self.runs[first].start);
        let end = range.end.max(self.runs[last - 1].end);
        self.runs.drain(first..last);
        self.runs.insert(first, start..end);
    }

    /// Removes a single position, splitting its run if needed.
    pub fn remove(&mut self, index: usize) {
        let position = self.runs.partition_point(|run| run.end <= index);
        let Some(run) = self.runs.get(position).cloned() else {
            return;
        };
        if run.start > index {
            return;
        }
        let left = run.start..index;
        let right = index + 1..run.end;
        match (left.is_empty(), right.is_empty()) {
            (true, true) => {
                self.runs.remove(position);
            }
            (true, false) => self.runs[position] = right,
            (false, true) => self.runs[position] = left,
            (false, false) => {
                self.runs[position] = left;
                self.runs.insert(position + 1, right);
            }
        }
    }

    /// Iterates over the runs in ascending order.
    pub fn ranges(&self) -> impl DoubleEndedIterator<Item = IndexRange> + '_ {
        self.runs.iter().map(|run| IndexRange::from(run.clone()))
    }

    /// Iterates over the positions in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.runs.iter().flat_map(Clone::clone)
    }

    /// Visits every position, honoring [`EnumerationOptions::REVERSE`].
    ///
    /// Returns `Break` if the visitor stopped early.
    ///
    /// # Panics
    ///
    /// Panics if `options` contains [`EnumerationOptions::CONCURRENT`].
    #[track_caller]
    pub fn enumerate_indexes<F>(&self, options: EnumerationOptions, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(usize) -> ControlFlow<()>,
    {
        options.check_supported("enumerate_indexes");
        if options.contains(EnumerationOptions::REVERSE) {
            for index in self.iter().rev() {
                visitor(index)?;
            }
        } else {
            for index in self.iter() {
                visitor(index)?;
            }
        }
        ControlFlow::Continue(())
    }

    /// Visits every run, honoring [`EnumerationOptions::REVERSE`].
    ///
    /// # Panics
    ///
    /// Panics if `options` contains [`EnumerationOptions::CONCURRENT`].
    #[track_caller]
    pub fn enumerate_ranges<F>(&self, options: EnumerationOptions, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(IndexRange) -> ControlFlow<()>,
    {
        options.check_supported("enumerate_ranges");
        if options.contains(EnumerationOptions::REVERSE) {
            for range in self.ranges().rev() {
                visitor(range)?;
            }
        } else {
            for range in self.ranges() {
                visitor(range)?;
            }
        }
        ControlFlow::Continue(())
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl Extend<usize> for IndexSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl From<IndexRange> for IndexSet {
    fn from(range: IndexRange) -> Self {
        Self::from_range(range)
    }
}

impl fmt::Debug for IndexSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.runs.iter()).finish()
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for run in &self.runs {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            if run.len() == 1 {
                write!(formatter, "{}", run.start)?;
            } else {
                write!(formatter, "{}-{}", run.start, run.end - 1)?;
            }
        }
        write!(formatter, "]")
    }
}
