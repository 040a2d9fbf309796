//! A lazy arithmetic progression of integers, similar to Python's `range`.
//!
//! [`IntegerRange`] stores only its bounds and step; elements are produced on
//! demand by [`IntegerRangeIter`]. The range is a plain `Copy` value, so it can
//! be handed to any adapter by value and traversed any number of times.
//!
//! ```
//! use lazyrange::{IntegerRange, make_range};
//!
//! let r = make_range(10, 3, -2).unwrap();
//! assert_eq!(r.into_iter().collect::<Vec<_>>(), vec![10, 8, 6, 4]);
//! assert_eq!(r.len(), 4);
//!
//! let shifted = IntegerRange::to(3) + 5;
//! assert_eq!(shifted.to_string(), "range(5,8,1)");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Add;

use lazyrange_common::{Result, verify_arg};

use crate::adapters::product::{Multiplied, ProductSources};

/// A lazy range of `i64` values: `first, first + step, first + 2 * step, ...`,
/// stopping strictly before `last` in the direction of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    first: i64,
    last: i64,
    step: i64,
}

impl IntegerRange {
    /// Creates a range from `first` (inclusive) to `last` (exclusive) with the
    /// given `step`.
    ///
    /// A negative `step` produces a descending progression. Bounds that point
    /// against the direction of `step` yield an empty range.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `step` is zero.
    pub fn new(first: i64, last: i64, step: i64) -> Result<IntegerRange> {
        verify_arg!(step, step != 0);
        Ok(IntegerRange { first, last, step })
    }

    /// Creates the range `first..last` with a step of 1.
    pub const fn between(first: i64, last: i64) -> IntegerRange {
        IntegerRange {
            first,
            last,
            step: 1,
        }
    }

    /// Creates the range `0..last` with a step of 1.
    pub const fn to(last: i64) -> IntegerRange {
        IntegerRange::between(0, last)
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        remaining(self.first, self.last, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator positioned at the first element.
    pub fn iter(&self) -> IntegerRangeIter {
        IntegerRangeIter {
            pos: self.first,
            last: self.last,
            step: self.step,
        }
    }

    /// Returns the canonical end iterator, positioned at `last`.
    ///
    /// Any iterator of this range that has run past its final element compares
    /// equal to it, see [`IntegerRangeIter::at_end`].
    pub fn end(&self) -> IntegerRangeIter {
        IntegerRangeIter {
            pos: self.last,
            last: self.last,
            step: self.step,
        }
    }
}

/// Shifts both bounds of the range by `shift`, keeping the step.
///
/// # Panics
///
/// Panics on overflow in debug builds.
impl Add<i64> for IntegerRange {
    type Output = IntegerRange;

    fn add(self, shift: i64) -> IntegerRange {
        IntegerRange {
            first: self.first + shift,
            last: self.last + shift,
            step: self.step,
        }
    }
}

impl fmt::Display for IntegerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({},{},{})", self.first, self.last, self.step)
    }
}

impl IntoIterator for IntegerRange {
    type Item = i64;
    type IntoIter = IntegerRangeIter;

    fn into_iter(self) -> IntegerRangeIter {
        self.iter()
    }
}

impl IntoIterator for &IntegerRange {
    type Item = i64;
    type IntoIter = IntegerRangeIter;

    fn into_iter(self) -> IntegerRangeIter {
        self.iter()
    }
}

/// Iterator over an [`IntegerRange`].
///
/// Holds the current position together with the range's `last` and `step`.
#[derive(Debug, Clone, Copy)]
pub struct IntegerRangeIter {
    pos: i64,
    last: i64,
    step: i64,
}

impl IntegerRangeIter {
    /// The value the iterator will yield next, or the position past the end.
    pub fn position(&self) -> i64 {
        self.pos
    }

    /// Whether the position has reached or passed `last` in the direction of
    /// the step.
    pub fn at_end(&self) -> bool {
        if self.step > 0 {
            self.pos >= self.last
        } else {
            self.pos <= self.last
        }
    }
}

/// Two iterators are equal when they share a position, or when both are at
/// the end. This lets any exhausted iterator match the range's
/// [`end`](IntegerRange::end) iterator even if the step overshot `last`.
impl PartialEq for IntegerRangeIter {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos || (self.at_end() && other.at_end())
    }
}

impl Iterator for IntegerRangeIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.at_end() {
            return None;
        }
        let value = self.pos;
        // On overflow the next position is past `last` anyway.
        self.pos = self.pos.checked_add(self.step).unwrap_or(self.last);
        Some(value)
    }

    /// Jumps `n` elements ahead in constant time.
    fn nth(&mut self, n: usize) -> Option<i64> {
        if n >= self.len() {
            self.pos = self.last;
            return None;
        }
        // The target is an element of the range, so it fits in i64.
        self.pos = (self.pos as i128 + n as i128 * self.step as i128) as i64;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = remaining(self.pos, self.last, self.step);
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl ExactSizeIterator for IntegerRangeIter {}

impl FusedIterator for IntegerRangeIter {}

/// Number of terms `pos + k * step` strictly before `last`.
fn remaining(pos: i64, last: i64, step: i64) -> usize {
    let (pos, last, step) = (pos as i128, last as i128, step as i128);
    let count = (last + step - step.signum() - pos) / step;
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

/// Creates an [`IntegerRange`] from `first` to `last` (exclusive) with `step`.
///
/// # Errors
///
/// Returns an `InvalidArgument` error if `step` is zero.
pub fn make_range(first: i64, last: i64, step: i64) -> Result<IntegerRange> {
    IntegerRange::new(first, last, step)
}

/// Shorthand for [`IntegerRange::to`]: the range `0..last`.
pub const fn range(last: i64) -> IntegerRange {
    IntegerRange::to(last)
}

/// A set of extents that can be turned into one `0..extent` range per axis.
///
/// Implemented for tuples of `i64` of up to six elements and for `[i64; N]`.
pub trait ProductExtents {
    type Ranges: ProductSources;

    fn into_ranges(self) -> Self::Ranges;
}

impl<const N: usize> ProductExtents for [i64; N] {
    type Ranges = [IntegerRange; N];

    fn into_ranges(self) -> Self::Ranges {
        self.map(IntegerRange::to)
    }
}

macro_rules! extent_type {
    ($_e:ident) => {
        i64
    };
}

macro_rules! range_type {
    ($_e:ident) => {
        IntegerRange
    };
}

macro_rules! impl_product_extents {
    ($($e:ident),+) => {
        impl ProductExtents for ($(extent_type!($e),)+) {
            type Ranges = ($(range_type!($e),)+);

            fn into_ranges(self) -> Self::Ranges {
                let ($($e,)+) = self;
                ($(IntegerRange::to($e),)+)
            }
        }
    };
}

impl_product_extents!(e0);
impl_product_extents!(e0, e1);
impl_product_extents!(e0, e1, e2);
impl_product_extents!(e0, e1, e2, e3);
impl_product_extents!(e0, e1, e2, e3, e4);
impl_product_extents!(e0, e1, e2, e3, e4, e5);

/// Cartesian product of `0..e` ranges, one per extent, in row-major order.
///
/// ```
/// use lazyrange::product_range;
///
/// let sum: i64 = product_range((5, 5, 5)).into_iter().map(|(i, j, k)| i * j * k).sum();
/// assert_eq!(sum, 1000);
///
/// let cells: Vec<[i64; 2]> = product_range([2, 2]).into_iter().collect();
/// assert_eq!(cells, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
/// ```
pub fn product_range<E: ProductExtents>(extents: E) -> Multiplied<E::Ranges> {
    Multiplied::new(extents.into_ranges())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(r: IntegerRange) -> Vec<i64> {
        r.into_iter().collect()
    }

    #[test]
    fn test_basic_progressions() {
        assert_eq!(collect(range(5)), vec![0, 1, 2, 3, 4]);
        assert_eq!(collect(IntegerRange::between(-2, 1)), vec![-2, -1, 0]);
        assert_eq!(collect(make_range(10, 3, -2).unwrap()), vec![10, 8, 6, 4]);
        assert_eq!(collect(make_range(0, 10, 3).unwrap()), vec![0, 3, 6, 9]);
        assert!(collect(make_range(0, 10, -1).unwrap()).is_empty());
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = make_range(0, 10, 0).unwrap_err();
        assert!(err.is_invalid_arg());
        assert_eq!(err.to_string(), "invalid argument step: step != 0");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(range(1).len(), 1);
        assert_eq!(make_range(-10, 10, 2).unwrap().len(), 10);
        assert_eq!(make_range(10, -10, -2).unwrap().len(), 10);
        assert_eq!(range(0).len(), 0);
        assert!(range(0).is_empty());
        assert_eq!(make_range(-1, 0, -3).unwrap().len(), 0);
        assert_eq!(make_range(10, -10, 2).unwrap().len(), 0);
        assert_eq!(make_range(-10, 10, -2).unwrap().len(), 0);
        assert_eq!(make_range(0, 10, 3).unwrap().len(), 4);
    }

    #[test]
    fn test_sum_matches_explicit_loop() {
        let l = 5;
        for a in -l..=l {
            for b in -l..=l {
                for s in 1..=3 {
                    let step = if a <= b { s } else { -s };
                    let r = make_range(a, b, step).unwrap();
                    let mut expected = Vec::new();
                    let mut i = a;
                    while (step > 0 && i < b) || (step < 0 && i > b) {
                        expected.push(i);
                        i += step;
                    }
                    assert_eq!(r.len(), expected.len(), "{r}");
                    assert_eq!(collect(r), expected, "{r}");
                }
            }
        }
    }

    #[test]
    fn test_extreme_bounds() {
        let r = IntegerRange::between(i64::MIN, i64::MAX);
        assert_eq!(r.len(), usize::MAX);
        let tail = make_range(i64::MAX - 2, i64::MAX, 5).unwrap();
        assert_eq!(collect(tail), vec![i64::MAX - 2]);
    }

    #[test]
    fn test_shift() {
        let r = make_range(1, 9, 3).unwrap() + 10;
        assert_eq!((r.first(), r.last(), r.step()), (11, 19, 3));
        assert_eq!(collect(r), vec![11, 14, 17]);
        assert_eq!(collect(range(3) + -3), vec![-3, -2, -1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(make_range(10, -10, -2).unwrap().to_string(), "range(10,-10,-2)");
    }

    #[test]
    fn test_iterator_equality_at_end() {
        let r = make_range(0, 10, 3).unwrap();
        let mut it = r.iter();
        assert_ne!(it, r.end());
        it.by_ref().for_each(drop);
        // Position 12 overshoots last = 10 but still equals the end iterator.
        assert_eq!(it.position(), 12);
        assert!(it.at_end());
        assert_eq!(it, r.end());

        let down = make_range(5, 0, -2).unwrap();
        let mut it = down.iter();
        it.nth(2);
        assert_eq!(it.position(), -1);
        assert_eq!(it, down.end());
    }

    #[test]
    fn test_nth_jumps() {
        let r = make_range(0, 100, 7).unwrap();
        let mut it = r.iter();
        assert_eq!(it.nth(3), Some(21));
        assert_eq!(it.next(), Some(28));
        assert_eq!(it.len(), 10);
        assert_eq!(it.nth(10), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_reiteration() {
        let r = range(4);
        assert_eq!(r.iter().sum::<i64>(), 6);
        assert_eq!((&r).into_iter().sum::<i64>(), 6);
        assert_eq!(r.iter().count(), 4);
    }

    #[test]
    fn test_product_range() {
        let res: i64 = product_range((5, 5, 5))
            .into_iter()
            .map(|(i, j, k)| i * j * k)
            .sum();
        assert_eq!(res, 1000);

        let pairs: Vec<(i64, i64)> = product_range((2, 3)).into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

        assert_eq!(product_range([1, 2, 3, 4]).len(), 24);
        assert_eq!(product_range((3, 0, 2)).len(), 0);
    }
}
