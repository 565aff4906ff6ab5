//! Option sets accepted by enumeration, sorting and searching.

use bitflags::bitflags;

bitflags! {
    /// Controls how enumeration walks a collection or an index set.
    ///
    /// `CONCURRENT` is accepted by the type but rejected by every
    /// enumeration entry point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EnumerationOptions: u32 {
        /// Visit elements concurrently. Unsupported.
        const CONCURRENT = 1 << 0;
        /// Visit elements from the highest index to the lowest.
        const REVERSE = 1 << 1;
    }
}

bitflags! {
    /// Sorting hints. Sorting is always stable and sequential.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SortOptions: u32 {
        /// Permit concurrent sorting. Treated as sequential.
        const CONCURRENT = 1 << 0;
        /// Request a stable sort.
        const STABLE = 1 << 4;
    }
}

bitflags! {
    /// Selects which match a binary search reports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BinarySearchingOptions: u32 {
        /// Report the first of several equal elements.
        const FIRST_EQUAL = 1 << 8;
        /// Report the last of several equal elements.
        const LAST_EQUAL = 1 << 9;
        /// Report the insertion point when the element is absent.
        const INSERTION_INDEX = 1 << 10;
    }
}

impl EnumerationOptions {
    /// Panics if `CONCURRENT` is requested.
    #[track_caller]
    pub(crate) fn check_supported(self, operation: &str) {
        assert!(
            !self.contains(Self::CONCURRENT),
            "{operation}: concurrent enumeration is not supported"
        );
    }
}
