//! A range adapter that takes every n-th element of its source.

use std::iter::FusedIterator;

use lazyrange_common::{Result, verify_arg};

/// Every `stride`-th element of a source range, starting with the first.
///
/// The number of elements is `ceil(source_len / stride)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strided<R> {
    range: R,
    stride: usize,
}

impl<R> Strided<R> {
    /// Creates a strided range.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `stride <= 0`.
    pub fn new(range: R, stride: isize) -> Result<Self> {
        verify_arg!(stride, stride > 0);
        Ok(Strided {
            range,
            stride: stride.unsigned_abs(),
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R> Strided<R>
where
    R: IntoIterator + Clone,
{
    pub fn iter(&self) -> StrideIter<R::IntoIter> {
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

impl<R: IntoIterator> IntoIterator for Strided<R> {
    type Item = R::Item;
    type IntoIter = StrideIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        StrideIter {
            inner: self.range.into_iter(),
            stride: self.stride,
            started: false,
        }
    }
}

impl<R> IntoIterator for &Strided<R>
where
    R: IntoIterator + Clone,
{
    type Item = R::Item;
    type IntoIter = StrideIter<R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator for [`Strided`].
///
/// After the first element, each step skips `stride - 1` elements with a
/// single [`Iterator::nth`] call, so random-access sources jump directly.
#[derive(Debug, Clone)]
pub struct StrideIter<I> {
    inner: I,
    stride: usize,
    started: bool,
}

impl<I: Iterator> Iterator for StrideIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.started {
            self.inner.nth(self.stride - 1)
        } else {
            self.started = true;
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let stride = self.stride;
        let strided = |n: usize| {
            if self.started {
                n / stride
            } else {
                n.div_ceil(stride)
            }
        };
        (strided(lower), upper.map(strided))
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for StrideIter<I> {}

impl<I: FusedIterator> FusedIterator for StrideIter<I> {}

/// Takes every `stride`-th element of `range`, starting with the first.
///
/// # Errors
///
/// Returns an `InvalidArgument` error if `stride <= 0`.
///
/// ```
/// use lazyrange::{range, stride};
///
/// let s = stride(range(10), 3).unwrap();
/// assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
/// assert!(stride(range(10), 0).is_err());
/// ```
pub fn stride<R: IntoIterator>(range: R, stride: isize) -> Result<Strided<R>> {
    Strided::new(range, stride)
}
