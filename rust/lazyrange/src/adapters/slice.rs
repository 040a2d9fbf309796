//! A range adapter restricted to an index window of its source.

use std::iter::{Skip, Take};

/// The elements of a source range at positions `start_idx..end_idx`.
///
/// No dedicated iterator is introduced: iteration uses the source's own
/// iterator, positioned with [`Iterator::nth`] (constant time for slices and
/// [`IntegerRange`](crate::IntegerRange)) and cut off after the window.
/// `end_idx` is clamped at construction so that `end_idx >= start_idx`, and
/// at iteration time to the length of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sliced<R> {
    range: R,
    start_idx: usize,
    end_idx: usize,
}

impl<R> Sliced<R> {
    pub fn new(range: R, start_idx: usize, end_idx: usize) -> Self {
        Sliced {
            range,
            start_idx,
            end_idx: end_idx.max(start_idx),
        }
    }

    pub fn start_idx(&self) -> usize {
        self.start_idx
    }

    pub fn end_idx(&self) -> usize {
        self.end_idx
    }

    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R> Sliced<R>
where
    R: IntoIterator + Clone,
{
    pub fn iter(&self) -> Take<Skip<R::IntoIter>> {
        self.clone().into_iter()
    }

    /// `min(source_len, end_idx) - start_idx`, or 0 if the window starts past
    /// the end of the source.
    pub fn len(&self) -> usize
    where
        R::IntoIter: ExactSizeIterator,
    {
        let total = self.range.clone().into_iter().len();
        total.min(self.end_idx).saturating_sub(self.start_idx)
    }

    pub fn is_empty(&self) -> bool
    where
        R::IntoIter: ExactSizeIterator,
    {
        self.len() == 0
    }
}

impl<R: IntoIterator> IntoIterator for Sliced<R> {
    type Item = R::Item;
    type IntoIter = Take<Skip<R::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.range
            .into_iter()
            .skip(self.start_idx)
            .take(self.end_idx - self.start_idx)
    }
}

impl<R> IntoIterator for &Sliced<R>
where
    R: IntoIterator + Clone,
{
    type Item = R::Item;
    type IntoIter = Take<Skip<R::IntoIter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Restricts `range` to the elements at `start_idx..end_idx`.
///
/// An `end_idx` below `start_idx` yields an empty slice; an `end_idx` past the
/// end of the source is clamped to it.
///
/// ```
/// use lazyrange::{range, slice};
///
/// assert_eq!(slice(range(10), 2, 5).iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(slice(range(10), 8, 50).len(), 2);
/// assert!(slice(range(10), 5, 2).is_empty());
/// ```
pub fn slice<R: IntoIterator>(range: R, start_idx: usize, end_idx: usize) -> Sliced<R> {
    Sliced::new(range, start_idx, end_idx)
}
