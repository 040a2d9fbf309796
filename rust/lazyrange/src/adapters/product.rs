//! Cartesian product of several ranges.
//!
//! The product enumerates every combination of one element from each source
//! in row-major order: the last source varies fastest, like the innermost of
//! a set of nested loops.
//!
//! Each source is an *axis*. An axis keeps a pristine copy of its begin
//! iterator, the iterator it is currently walking and the element it is
//! currently positioned at. Advancing the product advances the last axis; an
//! axis that runs off its end is rewound to its begin iterator and carries
//! into the axis before it. The product is finished when the first axis runs
//! off its end.

use std::iter::FusedIterator;

/// One source of a cartesian product.
pub struct Axis<I: Iterator> {
    begin: I,
    iter: I,
    current: Option<I::Item>,
}

impl<I> Axis<I>
where
    I: Iterator + Clone,
{
    pub fn new(begin: I) -> Self {
        let mut iter = begin.clone();
        let current = iter.next();
        Axis {
            begin,
            iter,
            current,
        }
    }

    /// The element the axis is positioned at, `None` once exhausted.
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Moves to the next element and returns `true` if the axis ran off its end.
    #[inline]
    pub fn increment(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_none()
    }

    /// Repositions the axis at its first element.
    pub fn rewind(&mut self) {
        self.iter = self.begin.clone();
        self.current = self.iter.next();
    }

    fn hint(&self) -> AxisHint {
        AxisHint {
            positioned: self.current.is_some(),
            remaining: self.iter.size_hint(),
            total: self.begin.size_hint(),
        }
    }
}

impl<I> Clone for Axis<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Axis {
            begin: self.begin.clone(),
            iter: self.iter.clone(),
            current: self.current.clone(),
        }
    }
}

/// Size information of a single axis, used to compute the product's size hint.
#[derive(Debug, Clone, Copy)]
pub struct AxisHint {
    /// Whether the axis currently holds an element.
    positioned: bool,
    /// Size hint of the elements after the current one.
    remaining: (usize, Option<usize>),
    /// Size hint of the whole axis.
    total: (usize, Option<usize>),
}

/// A collection of ranges that can be multiplied into a cartesian product.
///
/// Implemented for tuples of one to six ranges and for arrays `[R; N]`.
/// Every source iterator must be `Clone` (it is rewound by cloning its begin
/// iterator) and so must its items (an outer element is repeated for every
/// combination of the inner axes).
pub trait ProductSources {
    type Axes: Clone;
    type Item;

    /// Number of axes.
    const ARITY: usize;

    fn into_axes(self) -> Self::Axes;

    /// The combination the axes are positioned at, `None` if any axis is exhausted.
    fn current(axes: &Self::Axes) -> Option<Self::Item>;

    /// Advances axis `k`, returning `true` if it ran off its end.
    fn increment(axes: &mut Self::Axes, k: usize) -> bool;

    fn rewind(axes: &mut Self::Axes, k: usize);

    fn hint(axes: &Self::Axes, k: usize) -> AxisHint;
}

macro_rules! impl_product_sources {
    ($arity:expr; $($R:ident $idx:tt),+) => {
        impl<$($R),+> ProductSources for ($($R,)+)
        where
            $($R: IntoIterator, $R::IntoIter: Clone, $R::Item: Clone,)+
        {
            type Axes = ($(Axis<$R::IntoIter>,)+);
            type Item = ($($R::Item,)+);

            const ARITY: usize = $arity;

            fn into_axes(self) -> Self::Axes {
                ($(Axis::new(self.$idx.into_iter()),)+)
            }

            #[inline]
            fn current(axes: &Self::Axes) -> Option<Self::Item> {
                Some(($(axes.$idx.current()?.clone(),)+))
            }

            #[inline]
            fn increment(axes: &mut Self::Axes, k: usize) -> bool {
                match k {
                    $($idx => axes.$idx.increment(),)+
                    _ => panic!("axis {k} out of bounds for a product of {} ranges", $arity),
                }
            }

            fn rewind(axes: &mut Self::Axes, k: usize) {
                match k {
                    $($idx => axes.$idx.rewind(),)+
                    _ => panic!("axis {k} out of bounds for a product of {} ranges", $arity),
                }
            }

            fn hint(axes: &Self::Axes, k: usize) -> AxisHint {
                match k {
                    $($idx => axes.$idx.hint(),)+
                    _ => panic!("axis {k} out of bounds for a product of {} ranges", $arity),
                }
            }
        }

        impl<$($R),+> ExactSizeIterator for ProductIter<($($R,)+)>
        where
            $($R: IntoIterator, $R::IntoIter: Clone + ExactSizeIterator, $R::Item: Clone,)+
        {
        }
    };
}

impl_product_sources!(1; A 0);
impl_product_sources!(2; A 0, B 1);
impl_product_sources!(3; A 0, B 1, C 2);
impl_product_sources!(4; A 0, B 1, C 2, D 3);
impl_product_sources!(5; A 0, B 1, C 2, D 3, E 4);
impl_product_sources!(6; A 0, B 1, C 2, D 3, E 4, F 5);

impl<R, const N: usize> ProductSources for [R; N]
where
    R: IntoIterator,
    R::IntoIter: Clone,
    R::Item: Clone,
{
    type Axes = [Axis<R::IntoIter>; N];
    type Item = [R::Item; N];

    const ARITY: usize = N;

    fn into_axes(self) -> Self::Axes {
        self.map(|range| Axis::new(range.into_iter()))
    }

    fn current(axes: &Self::Axes) -> Option<Self::Item> {
        if axes.iter().any(|axis| axis.current().is_none()) {
            return None;
        }
        Some(std::array::from_fn(|k| match axes[k].current() {
            Some(item) => item.clone(),
            None => unreachable!("axis {k} was checked to be positioned"),
        }))
    }

    #[inline]
    fn increment(axes: &mut Self::Axes, k: usize) -> bool {
        axes[k].increment()
    }

    fn rewind(axes: &mut Self::Axes, k: usize) {
        axes[k].rewind()
    }

    fn hint(axes: &Self::Axes, k: usize) -> AxisHint {
        axes[k].hint()
    }
}

impl<R, const N: usize> ExactSizeIterator for ProductIter<[R; N]>
where
    R: IntoIterator,
    R::IntoIter: Clone + ExactSizeIterator,
    R::Item: Clone,
{
}

/// The cartesian product of several ranges.
///
/// Created by [`product`], [`product_array`] or
/// [`product_range`](crate::product_range). The number of elements is the
/// product of the sizes of all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiplied<S> {
    sources: S,
}

impl<S> Multiplied<S> {
    pub fn new(sources: S) -> Self {
        Multiplied { sources }
    }

    pub fn into_inner(self) -> S {
        self.sources
    }
}

impl<S> Multiplied<S>
where
    S: ProductSources + Clone,
{
    pub fn iter(&self) -> ProductIter<S> {
        self.clone().into_iter()
    }

    /// The number of combinations, or `None` if it does not fit in `usize`.
    pub fn checked_len(&self) -> Option<usize>
    where
        ProductIter<S>: ExactSizeIterator,
    {
        self.iter().size_hint().1
    }

    /// The number of combinations.
    ///
    /// # Panics
    ///
    /// Panics if the product of the source sizes overflows `usize`. Use
    /// [`checked_len`](Self::checked_len) for sources that may be that large.
    pub fn len(&self) -> usize
    where
        ProductIter<S>: ExactSizeIterator,
    {
        match self.checked_len() {
            Some(len) => len,
            None => panic!("product size overflows usize"),
        }
    }

    pub fn is_empty(&self) -> bool
    where
        ProductIter<S>: ExactSizeIterator,
    {
        self.checked_len() == Some(0)
    }
}

impl<S: ProductSources> IntoIterator for Multiplied<S> {
    type Item = S::Item;
    type IntoIter = ProductIter<S>;

    fn into_iter(self) -> ProductIter<S> {
        ProductIter::new(self.sources)
    }
}

impl<S> IntoIterator for &Multiplied<S>
where
    S: ProductSources + Clone,
{
    type Item = S::Item;
    type IntoIter = ProductIter<S>;

    fn into_iter(self) -> ProductIter<S> {
        self.iter()
    }
}

/// Iterator for [`Multiplied`].
pub struct ProductIter<S: ProductSources> {
    axes: S::Axes,
    done: bool,
}

impl<S: ProductSources> ProductIter<S> {
    pub fn new(sources: S) -> Self {
        ProductIter {
            axes: sources.into_axes(),
            done: S::ARITY == 0,
        }
    }

    /// Advances the last axis and propagates the carry toward the first one.
    fn increment(&mut self) {
        let mut k = S::ARITY - 1;
        while S::increment(&mut self.axes, k) {
            if k == 0 {
                self.done = true;
                return;
            }
            S::rewind(&mut self.axes, k);
            k -= 1;
        }
    }
}

impl<S: ProductSources> Clone for ProductIter<S> {
    fn clone(&self) -> Self {
        ProductIter {
            axes: self.axes.clone(),
            done: self.done,
        }
    }
}

impl<S: ProductSources> Iterator for ProductIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        let Some(item) = S::current(&self.axes) else {
            // Some axis is empty, so is the product.
            self.done = true;
            return None;
        };
        self.increment();
        Some(item)
    }

    /// Remaining combinations: `1 + sum(remaining[k] * prod(total[j] for j > k))`.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let mut lower = 1usize;
        let mut upper = Some(1usize);
        let mut inner_lower = 1usize;
        let mut inner_upper = Some(1usize);
        for k in (0..S::ARITY).rev() {
            let hint = S::hint(&self.axes, k);
            if !hint.positioned {
                return (0, Some(0));
            }
            lower = lower.saturating_add(hint.remaining.0.saturating_mul(inner_lower));
            upper = match (upper, hint.remaining.1, inner_upper) {
                (Some(acc), Some(rem), Some(inner)) => rem
                    .checked_mul(inner)
                    .and_then(|steps| acc.checked_add(steps)),
                _ => None,
            };
            inner_lower = inner_lower.saturating_mul(hint.total.0);
            inner_upper = match (inner_upper, hint.total.1) {
                (Some(acc), Some(total)) => acc.checked_mul(total),
                _ => None,
            };
        }
        (lower, upper)
    }
}

impl<S: ProductSources> FusedIterator for ProductIter<S> {}

/// The cartesian product of a tuple of ranges, in row-major order.
///
/// ```
/// use lazyrange::product;
///
/// let rows = ['a', 'b'];
/// let cols = [1, 2, 3];
/// let cells: Vec<_> = product((&rows, &cols)).into_iter().collect();
/// assert_eq!(
///     cells,
///     vec![(&'a', &1), (&'a', &2), (&'a', &3), (&'b', &1), (&'b', &2), (&'b', &3)]
/// );
/// ```
pub fn product<S: ProductSources>(sources: S) -> Multiplied<S> {
    Multiplied::new(sources)
}

/// The cartesian product of an array of ranges of the same type.
///
/// Elements are arrays holding one element of every range.
pub fn product_array<R, const N: usize>(ranges: [R; N]) -> Multiplied<[R; N]>
where
    [R; N]: ProductSources,
{
    Multiplied::new(ranges)
}

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::{IntegerRange, product_range, range, transform};

    #[test]
    fn test_row_major_order() {
        let vec1 = vec![0, 1, 2, 3, 4];
        let vec2 = vec![0, 1, 2, 3, 4];
        let (mut i, mut j) = (0, 0);
        for (x, y) in product((&vec1, &vec2)) {
            assert_eq!((*x, *y), (i, j));
            j += 1;
            if j > 4 {
                i += 1;
                j = 0;
            }
        }
        assert_eq!(i, 5);
    }

    #[test]
    fn test_matches_iproduct() {
        let a = vec![3, 1, 4];
        let b = vec!['x', 'y'];
        let c = vec![true, false, true, false];
        let ours: Vec<_> = product((&a, &b, &c)).into_iter().collect();
        let reference: Vec<_> = iproduct!(&a, &b, &c).collect();
        assert_eq!(ours, reference);
        assert_eq!(product((&a, &b, &c)).len(), 24);
    }

    #[test]
    fn test_array_of_ranges() {
        let ranges = [range(1), range(2), range(3), range(4)];
        let m = product_array(ranges);
        assert_eq!(m.iter().count(), 24);
        assert_eq!(m.len(), 24);
        let last = m.iter().last();
        assert_eq!(last, Some([0, 1, 2, 3]));
    }

    #[test]
    fn test_empty_axis_yields_nothing() {
        let empty: Vec<i32> = Vec::new();
        let full = vec![1, 2, 3];
        assert_eq!(product((&empty, &full)).into_iter().count(), 0);
        assert_eq!(product((&full, &empty)).into_iter().count(), 0);
        assert_eq!(product((&full, &full, &empty)).len(), 0);
        assert!(product((&full, &empty)).is_empty());
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut it = product((range(3), range(4))).into_iter();
        assert_eq!(it.len(), 12);
        it.next();
        assert_eq!(it.len(), 11);
        for _ in 0..4 {
            it.next();
        }
        assert_eq!(it.len(), 7);
        assert_eq!(it.next(), Some((1, 1)));
        it.by_ref().for_each(drop);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_single_axis() {
        let it: Vec<(i64,)> = product((range(3),)).into_iter().collect();
        assert_eq!(it, vec![(0,), (1,), (2,)]);
    }

    #[test]
    fn test_transformed_axis() {
        // Sums all numbers from 0 to 99.
        let tens = transform(range(10), |i| 10 * i);
        let total: i64 = product((tens, range(10))).into_iter().map(|(a, b)| a + b).sum();
        assert_eq!(total, 99 * 100 / 2);
    }

    #[test]
    fn test_nested_product() {
        let inner = product((range(2), range(2)));
        let outer: Vec<((i64, i64), i64)> = product((inner, IntegerRange::between(5, 7)))
            .into_iter()
            .collect();
        assert_eq!(outer.len(), 8);
        assert_eq!(outer[0], ((0, 0), 5));
        assert_eq!(outer[1], ((0, 0), 6));
        assert_eq!(outer[7], ((1, 1), 6));
    }

    #[test]
    fn test_overflowing_size() {
        let huge = product_range((1i64 << 33, 1i64 << 33));
        assert_eq!(huge.checked_len(), None);
        assert!(!huge.is_empty());
        assert_eq!(huge.iter().next(), Some((0, 0)));
        assert_eq!(product_range((4, 5)).checked_len(), Some(20));
    }

    #[test]
    #[should_panic(expected = "product size overflows usize")]
    fn test_overflowing_len_panics() {
        let _ = product_range((1i64 << 33, 1i64 << 33)).len();
    }
}
