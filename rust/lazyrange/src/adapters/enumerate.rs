//! A range adapter that pairs every element with its index.

use std::iter::FusedIterator;

/// A range whose elements are `(index, element)` pairs of the source range.
///
/// Created by [`enumerate`] or [`RangeExt::enumerated`](super::RangeExt::enumerated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerated<R> {
    range: R,
}

impl<R> Enumerated<R> {
    pub fn new(range: R) -> Self {
        Enumerated { range }
    }

    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R> Enumerated<R>
where
    R: IntoIterator + Clone,
{
    /// Starts a new traversal; the index restarts at 0.
    pub fn iter(&self) -> EnumerateIter<R::IntoIter> {
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

impl<R: IntoIterator> IntoIterator for Enumerated<R> {
    type Item = (usize, R::Item);
    type IntoIter = EnumerateIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        EnumerateIter::new(self.range.into_iter())
    }
}

impl<R> IntoIterator for &Enumerated<R>
where
    R: IntoIterator + Clone,
{
    type Item = (usize, R::Item);
    type IntoIter = EnumerateIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator for [`Enumerated`].
///
/// Holds the inner iterator and a running index. Termination is decided by
/// the inner iterator alone.
#[derive(Debug, Clone)]
pub struct EnumerateIter<I> {
    inner: I,
    index: usize,
}

impl<I: Iterator> EnumerateIter<I> {
    pub fn new(inner: I) -> Self {
        EnumerateIter { inner, index: 0 }
    }
}

impl<I: Iterator> Iterator for EnumerateIter<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let item = self.inner.nth(n)?;
        let index = self.index + n;
        self.index = index + 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for EnumerateIter<I> {}

impl<I: FusedIterator> FusedIterator for EnumerateIter<I> {}

/// Pairs each element of `range` with its zero-based index.
///
/// ```
/// use lazyrange::enumerate;
///
/// let letters = ['a', 'b', 'c'];
/// let pairs: Vec<_> = enumerate(&letters).into_iter().collect();
/// assert_eq!(pairs, vec![(0, &'a'), (1, &'b'), (2, &'c')]);
/// ```
pub fn enumerate<R: IntoIterator>(range: R) -> Enumerated<R> {
    Enumerated::new(range)
}
