//! Composable, lazily evaluated range adapters.
//!
//! This crate provides adapters that wrap one or more source ranges without
//! materializing intermediate collections, plus a minimal integer range type.
//! It offers:
//!
//! - **Adapters**: enumerate, transform, zip, cartesian product, slice and stride
//! - **Integer ranges**: a `Copy` arithmetic progression with a non-zero step
//! - **Partitioning**: splitting an index interval or a range among workers
//! - **Materialization**: draining a lazy range into a `Vec`
//!
//! A *range* is anything implementing `IntoIterator`. Adapters own their
//! sources, so borrowed collections (`&vec`, `&mut vec`), [`IntegerRange`]
//! values and other adapters can all be nested:
//!
//! ```
//! use lazyrange::{enumerate, product, range, stride, zip};
//!
//! let a = vec![1, 2, 3, 4];
//! let b = vec![5, 6, 7, 8];
//! let every_other: Vec<_> = stride(zip((&a, &b)), 2).unwrap().into_iter().collect();
//! assert_eq!(every_other, vec![(&1, &5), (&3, &7)]);
//!
//! for (i, (x, y)) in enumerate(product((range(2), range(3)))) {
//!     assert_eq!(i as i64, 3 * x + y);
//! }
//! ```
//!
//! # Key Types
//!
//! - [`IntegerRange`] - A lazy `first..last` progression with a step
//! - [`RangeExt`] - Extension trait providing the adapters as methods
//! - [`Multiplied`] - The cartesian product, iterated in row-major order

pub mod adapters;
pub mod chunk;
pub mod integer_range;
pub mod materialize;

pub use adapters::RangeExt;
pub use adapters::enumerate::{EnumerateIter, Enumerated, enumerate};
pub use adapters::product::{Multiplied, ProductIter, ProductSources, product, product_array};
pub use adapters::slice::{Sliced, slice};
pub use adapters::stride::{StrideIter, Strided, stride};
pub use adapters::transform::{TransformIter, Transformed, transform};
pub use adapters::zip::{ZipIter, ZipSources, Zipped, zip};
pub use chunk::{chunk, chunk_range};
pub use integer_range::{
    IntegerRange, IntegerRangeIter, ProductExtents, make_range, product_range, range,
};
pub use materialize::{distance, make_vector_from_range};

pub use lazyrange_common::{Error, ErrorKind, Result};
