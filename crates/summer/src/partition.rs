//! Deterministic partitioning of an index space across workers.

use std::ops::Range;

/// A half-open index range `[start, end)` assigned to one worker.
///
/// Partitions produced by [`partition`] are pairwise disjoint and cover
/// `[0, length)` exactly. An empty partition (`start >= end`) is legal and
/// sums to zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Partition {
    /// First index owned by the worker.
    pub start: usize,
    /// One past the last index owned by the worker.
    pub end: usize,
}

impl Partition {
    /// Number of elements covered by this partition.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the partition covers no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The partition as a slice-index range.
    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, length)` into `workers` contiguous partitions.
///
/// The base chunk size is `length / workers`; every worker starts at
/// `index * chunk`, and the final worker's end bound is pinned to `length`
/// so the integer-division remainder is absorbed by the last partition.
/// When `workers > length` the base chunk is zero and the final partition
/// is the only non-empty one.
///
/// `workers == 0` yields no partitions; callers validate the worker count
/// before dispatching anything.
pub fn partition(length: usize, workers: usize) -> Vec<Partition> {
    if workers == 0 {
        return Vec::new();
    }

    let chunk = length / workers;
    (0..workers)
        .map(|worker| {
            let start = worker * chunk;
            let end = if worker == workers - 1 {
                length
            } else {
                (worker + 1) * chunk
            };
            Partition { start, end }
        })
        .collect()
}
