//! Lazy range adapters.
//!
//! Every adapter is a small range type that owns its source range(s) by value
//! and produces a fresh iterator on each traversal. Nothing is materialized:
//! elements are pulled from the sources one at a time, so adapters can be
//! nested freely, e.g. `stride(zip((&a, &b)), 2)`.
//!
//! # Provided Adapters
//!
//! - [`Enumerated`]: pairs each element with its index.
//! - [`Transformed`]: applies a function to each element.
//! - [`Zipped`]: walks several ranges in lockstep, stopping at the shortest.
//! - [`Multiplied`]: cartesian product in row-major order.
//! - [`Sliced`]: the elements in `start_idx..end_idx`.
//! - [`Strided`]: every n-th element.
//!
//! Adapter ranges implement `IntoIterator` by value. Their `iter()` method
//! (and `IntoIterator for &Adapter`) clones the stored sources, which is cheap
//! for the usual sources: borrowed collections, [`IntegerRange`] and other
//! adapters.
//!
//! [`IntegerRange`]: crate::IntegerRange

use lazyrange_common::Result;

pub mod enumerate;
pub mod product;
pub mod slice;
pub mod stride;
pub mod transform;
pub mod zip;

pub use enumerate::Enumerated;
pub use product::Multiplied;
pub use slice::Sliced;
pub use stride::Strided;
pub use transform::Transformed;
pub use zip::Zipped;

/// Extension trait for composing adapters in method-call style.
///
/// Implemented for every `IntoIterator`. The method names differ from the
/// `Iterator` adapters of the same flavor so both can be in scope at once.
///
/// ```
/// use lazyrange::RangeExt;
///
/// let v = vec![1, 2, 3, 4, 5, 6, 7];
/// let picked = (&v).sliced(1, 6).strided(2).unwrap().materialize();
/// assert_eq!(picked, vec![&2, &4, &6]);
/// ```
pub trait RangeExt: IntoIterator + Sized {
    /// Pairs each element with its zero-based index.
    fn enumerated(self) -> Enumerated<Self> {
        Enumerated::new(self)
    }

    /// Lazily applies `f` to each element.
    fn transformed<B, F>(self, f: F) -> Transformed<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Transformed::new(self, f)
    }

    /// Restricts the range to the elements at `start_idx..end_idx`.
    fn sliced(self, start_idx: usize, end_idx: usize) -> Sliced<Self> {
        Sliced::new(self, start_idx, end_idx)
    }

    /// Takes every `stride`-th element, starting with the first.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `stride <= 0`.
    fn strided(self, stride: isize) -> Result<Strided<Self>> {
        Strided::new(self, stride)
    }

    /// Restricts the range to the piece owned by worker `rank` when the range
    /// is split into `n_chunks` nearly equal pieces.
    fn chunked(self, n_chunks: usize, rank: usize) -> Sliced<Self>
    where
        Self: Clone,
    {
        crate::chunk::chunk(self, n_chunks, rank)
    }

    /// Drains the range into a `Vec`.
    fn materialize(self) -> Vec<Self::Item> {
        crate::materialize::make_vector_from_range(self)
    }
}

impl<R: IntoIterator> RangeExt for R {}
