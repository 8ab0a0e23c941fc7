//! Static work partitioning
//!
//! Divides `[0, total)` into one contiguous slice per worker. Slices are
//! disjoint and exhaustive; the last slice absorbs the division remainder so
//! the counts always sum to exactly `total`.

/// A contiguous `[start, start + count)` range of the operation sequence
/// assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadSlice {
    pub start: usize,
    pub count: usize,
}

/// Split `total` units of work across `workers` threads.
pub fn partition(total: usize, workers: usize) -> Vec<ThreadSlice> {
    debug_assert!(workers > 0, "worker count is validated to be at least 1");
    let per_worker = total / workers;
    (0..workers)
        .map(|i| {
            let start = i * per_worker;
            let count = if i == workers - 1 {
                total - start
            } else {
                per_worker
            };
            ThreadSlice { start, count }
        })
        .collect()
}
