//! A range adapter that applies a function to every element.

use std::fmt;
use std::iter::FusedIterator;

/// A range yielding `f(element)` for every element of the source range.
///
/// The function is stored alongside the source and copied into each iterator,
/// so a stateful closure starts from its captured state on every traversal
/// obtained through [`iter`](Transformed::iter).
#[derive(Clone)]
pub struct Transformed<R, F> {
    range: R,
    f: F,
}

impl<R, F> Transformed<R, F> {
    pub fn new(range: R, f: F) -> Self {
        Transformed { range, f }
    }
}

impl<R: fmt::Debug, F> fmt::Debug for Transformed<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl<B, R, F> Transformed<R, F>
where
    R: IntoIterator + Clone,
    F: FnMut(R::Item) -> B + Clone,
{
    pub fn iter(&self) -> TransformIter<R::IntoIter, F> {
        self.clone().into_iter()
    }

    pub fn len(&self) -> usize
    where
        R::IntoIter: ExactSizeIterator,
    {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool
    where
        R::IntoIter: ExactSizeIterator,
    {
        self.len() == 0
    }
}

impl<B, R, F> IntoIterator for Transformed<R, F>
where
    R: IntoIterator,
    F: FnMut(R::Item) -> B,
{
    type Item = B;
    type IntoIter = TransformIter<R::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        TransformIter {
            inner: self.range.into_iter(),
            f: self.f,
        }
    }
}

impl<B, R, F> IntoIterator for &Transformed<R, F>
where
    R: IntoIterator + Clone,
    F: FnMut(R::Item) -> B + Clone,
{
    type Item = B;
    type IntoIter = TransformIter<R::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator for [`Transformed`]. Yields the function's result by value.
#[derive(Clone)]
pub struct TransformIter<I, F> {
    inner: I,
    f: F,
}

impl<I: fmt::Debug, F> fmt::Debug for TransformIter<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformIter")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<B, I, F> Iterator for TransformIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<B, I, F> ExactSizeIterator for TransformIter<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
}

impl<B, I, F> FusedIterator for TransformIter<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}

/// Lazily applies `f` to each element of `range`.
///
/// ```
/// use lazyrange::{range, transform};
///
/// let squares = transform(range(5), |i| i * i);
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![0, 1, 4, 9, 16]);
/// assert_eq!(squares.len(), 5);
/// ```
pub fn transform<B, R, F>(range: R, f: F) -> Transformed<R, F>
where
    R: IntoIterator,
    F: FnMut(R::Item) -> B,
{
    Transformed::new(range, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeExt, range};

    #[test]
    fn test_square() {
        let vec = vec![1, 2, 3, 4, 5, 6];
        let mut i = 0;
        for x in transform(&vec, |&v| v * v) {
            i += 1;
            assert_eq!(x, i * i);
        }
        assert_eq!(i, 6);
    }

    #[test]
    fn test_non_copyable_elements() {
        let words = vec![String::from("ab"), String::from("cde")];
        let upper: Vec<String> = transform(&words, |s| s.to_uppercase())
            .into_iter()
            .collect();
        assert_eq!(upper, vec!["AB", "CDE"]);
    }

    #[test]
    fn test_length_matches_source() {
        let t = range(17).transformed(|i| i % 3);
        assert_eq!(t.len(), 17);
        assert_eq!(t.iter().count(), 17);
    }

    #[test]
    fn test_stateful_function_restarts_per_traversal() {
        let mut counter = 0;
        let numbered = transform(range(3), move |x| {
            counter += 1;
            (counter, x)
        });
        let first: Vec<_> = numbered.iter().collect();
        let second: Vec<_> = (&numbered).into_iter().collect();
        assert_eq!(first, vec![(1, 0), (2, 1), (3, 2)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_debug_omits_function() {
        let t = transform(range(2), |x| x + 1);
        assert_eq!(
            format!("{t:?}"),
            "Transformed { range: IntegerRange { first: 0, last: 2, step: 1 }, .. }"
        );
    }
}
