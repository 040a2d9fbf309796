//! Helpers that drain a lazy range.

/// Collects all elements of `range` into an owned `Vec`.
///
/// ```
/// use lazyrange::{make_vector_from_range, range};
///
/// assert_eq!(make_vector_from_range(range(4)), vec![0, 1, 2, 3]);
/// ```
pub fn make_vector_from_range<R: IntoIterator>(range: R) -> Vec<R::Item> {
    let iter = range.into_iter();
    let (lower, _) = iter.size_hint();
    let mut vec = Vec::with_capacity(lower);
    vec.extend(iter);
    vec
}

/// Number of elements in `range`.
///
/// Exact-size sources such as slices and integer ranges answer without
/// walking their elements.
pub fn distance<R: IntoIterator>(range: R) -> usize {
    range.into_iter().count()
}
