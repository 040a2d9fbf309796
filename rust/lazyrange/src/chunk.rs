//! Partitioning of an index interval among a fixed number of workers.
//!
//! These helpers only compute which sub-interval a worker owns; they perform
//! no synchronization. A parallel driver calls them once per worker to hand
//! out disjoint, gap-free pieces that together cover the whole interval in
//! order.

use crate::adapters::slice::Sliced;
use crate::materialize::distance;

/// Splits `[first, last)` into `n_chunks` contiguous pieces and returns the
/// bounds of the piece owned by `rank`.
///
/// Piece sizes differ by at most one: the first `(last - first) % n_chunks`
/// pieces receive the extra element. A `rank` of `n_chunks` or more is not
/// validated and yields bounds at or past `last`.
///
/// # Panics
///
/// Panics if `n_chunks` is 0, or if `n_chunks` or `rank` exceeds `i64::MAX`.
///
/// ```
/// use lazyrange::chunk_range;
///
/// assert_eq!(chunk_range(0, 10, 3, 0), (0, 4));
/// assert_eq!(chunk_range(0, 10, 3, 1), (4, 7));
/// assert_eq!(chunk_range(0, 10, 3, 2), (7, 10));
/// ```
pub fn chunk_range(first: i64, last: i64, n_chunks: usize, rank: usize) -> (i64, i64) {
    if n_chunks == 0 {
        panic!("n_chunks must be greater than 0");
    }
    let n_chunks = i64::try_from(n_chunks)
        .unwrap_or_else(|_| panic!("n_chunks must not exceed i64::MAX, got {n_chunks}"));
    let rank =
        i64::try_from(rank).unwrap_or_else(|_| panic!("rank must not exceed i64::MAX, got {rank}"));
    let total_size = last - first;
    let chunk_size = total_size / n_chunks;
    let n_large_chunks = total_size - n_chunks * chunk_size;
    if rank < n_large_chunks {
        (
            first + rank * (chunk_size + 1),
            first + (rank + 1) * (chunk_size + 1),
        )
    } else {
        (
            first + n_large_chunks + rank * chunk_size,
            first + n_large_chunks + (rank + 1) * chunk_size,
        )
    }
}

/// Restricts `range` to the piece owned by worker `rank` out of `n_chunks`.
///
/// The source is traversed once to count its elements.
///
/// # Panics
///
/// Panics if `n_chunks` is 0.
pub fn chunk<R>(range: R, n_chunks: usize, rank: usize) -> Sliced<R>
where
    R: IntoIterator + Clone,
{
    let total = distance(range.clone());
    let (start_idx, end_idx) = chunk_range(0, total as i64, n_chunks, rank);
    log::trace!("worker {rank} of {n_chunks} owns elements {start_idx}..{end_idx} of {total}");
    Sliced::new(range, start_idx as usize, end_idx as usize)
}
