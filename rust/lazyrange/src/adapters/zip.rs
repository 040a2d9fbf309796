//! A range adapter that walks several ranges in lockstep.
//!
//! Iteration stops as soon as ANY of the zipped ranges is exhausted, so the
//! zipped range is as long as its shortest source. The remaining tail of the
//! longer sources is never visited.

use std::iter::FusedIterator;

/// A tuple of ranges that can be zipped together.
///
/// Implemented for tuples of one to six `IntoIterator` values.
pub trait ZipSources {
    /// The tuple of inner iterators.
    type Iters;
    /// The tuple of inner items.
    type Item;

    fn into_iters(self) -> Self::Iters;

    /// Advances every iterator once, or returns `None` if any is exhausted.
    fn next_all(iters: &mut Self::Iters) -> Option<Self::Item>;

    /// Element-wise minimum of the inner size hints.
    fn size_hint(iters: &Self::Iters) -> (usize, Option<usize>);

    /// The largest lower-bound size hint among the inner iterators.
    fn max_remaining(iters: &Self::Iters) -> usize;
}

macro_rules! impl_zip_sources {
    ($($R:ident $idx:tt),+) => {
        impl<$($R),+> ZipSources for ($($R,)+)
        where
            $($R: IntoIterator,)+
        {
            type Iters = ($($R::IntoIter,)+);
            type Item = ($($R::Item,)+);

            fn into_iters(self) -> Self::Iters {
                ($(self.$idx.into_iter(),)+)
            }

            #[inline]
            fn next_all(iters: &mut Self::Iters) -> Option<Self::Item> {
                Some(($(iters.$idx.next()?,)+))
            }

            fn size_hint(iters: &Self::Iters) -> (usize, Option<usize>) {
                let mut lower = usize::MAX;
                let mut upper: Option<usize> = None;
                $(
                    let (lo, hi) = iters.$idx.size_hint();
                    lower = lower.min(lo);
                    upper = match (upper, hi) {
                        (Some(a), Some(b)) => Some(a.min(b)),
                        (a, b) => a.or(b),
                    };
                )+
                (lower, upper)
            }

            fn max_remaining(iters: &Self::Iters) -> usize {
                let mut remaining = 0;
                $(remaining = remaining.max(iters.$idx.size_hint().0);)+
                remaining
            }
        }
    };
}

impl_zip_sources!(A 0);
impl_zip_sources!(A 0, B 1);
impl_zip_sources!(A 0, B 1, C 2);
impl_zip_sources!(A 0, B 1, C 2, D 3);
impl_zip_sources!(A 0, B 1, C 2, D 3, E 4);
impl_zip_sources!(A 0, B 1, C 2, D 3, E 4, F 5);

/// A range over tuples of corresponding elements of several ranges.
///
/// Created by [`zip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zipped<S> {
    sources: S,
}

impl<S> Zipped<S> {
    pub fn new(sources: S) -> Self {
        Zipped { sources }
    }

    pub fn into_inner(self) -> S {
        self.sources
    }
}

impl<S> Zipped<S>
where
    S: ZipSources + Clone,
{
    pub fn iter(&self) -> ZipIter<S> {
        self.clone().into_iter()
    }

    pub fn len(&self) -> usize
    where
        ZipIter<S>: ExactSizeIterator,
    {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool
    where
        ZipIter<S>: ExactSizeIterator,
    {
        self.len() == 0
    }
}

impl<S: ZipSources> IntoIterator for Zipped<S> {
    type Item = S::Item;
    type IntoIter = ZipIter<S>;

    fn into_iter(self) -> ZipIter<S> {
        ZipIter {
            iters: self.sources.into_iters(),
            finished: false,
        }
    }
}

impl<S> IntoIterator for &Zipped<S>
where
    S: ZipSources + Clone,
{
    type Item = S::Item;
    type IntoIter = ZipIter<S>;

    fn into_iter(self) -> ZipIter<S> {
        self.iter()
    }
}

/// Iterator for [`Zipped`].
pub struct ZipIter<S: ZipSources> {
    iters: S::Iters,
    finished: bool,
}

impl<S> Clone for ZipIter<S>
where
    S: ZipSources,
    S::Iters: Clone,
{
    fn clone(&self) -> Self {
        ZipIter {
            iters: self.iters.clone(),
            finished: self.finished,
        }
    }
}

impl<S: ZipSources> Iterator for ZipIter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        if self.finished {
            return None;
        }
        let item = S::next_all(&mut self.iters);
        if item.is_none() {
            self.finished = true;
            let surplus = S::max_remaining(&self.iters);
            if surplus > 0 {
                log::trace!(
                    "zip reached the end of its shortest source, \
                     {surplus} elements of a longer source were not visited"
                );
            }
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            S::size_hint(&self.iters)
        }
    }
}

macro_rules! impl_zip_exact_size {
    ($($R:ident),+) => {
        impl<$($R),+> ExactSizeIterator for ZipIter<($($R,)+)>
        where
            $($R: IntoIterator, $R::IntoIter: ExactSizeIterator,)+
        {
        }
    };
}

impl_zip_exact_size!(A);
impl_zip_exact_size!(A, B);
impl_zip_exact_size!(A, B, C);
impl_zip_exact_size!(A, B, C, D);
impl_zip_exact_size!(A, B, C, D, E);
impl_zip_exact_size!(A, B, C, D, E, F);

impl<S: ZipSources> FusedIterator for ZipIter<S> {}

/// Zips a tuple of ranges into a range of tuples.
///
/// Mutable sources can be updated in place through the zipped range.
///
/// ```
/// use lazyrange::zip;
///
/// let src = [1, 2, 3];
/// let mut dst = vec![0; 3];
/// for (s, d) in zip((&src, &mut dst)) {
///     *d = s * 10;
/// }
/// assert_eq!(dst, vec![10, 20, 30]);
/// ```
pub fn zip<S: ZipSources>(sources: S) -> Zipped<S> {
    Zipped::new(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{make_range, range, transform};

    #[test]
    fn test_pairs_in_order() {
        let arr = [6, 5, 4, 3, 2, 1];
        let vec = vec![1, 2, 3, 4, 5, 6];
        for (x, y) in zip((&arr, &vec)) {
            assert_eq!(7 - y, *x);
        }
        assert_eq!(zip((&arr, &vec)).len(), 6);
    }

    #[test]
    fn test_write_through_second_source() {
        let src = vec![String::from("a"), String::from("b")];
        let mut dst = vec![String::new(), String::new()];
        for (s, d) in zip((&src, &mut dst)) {
            d.push_str(s);
        }
        assert_eq!(src, dst);
    }

    #[test]
    fn test_shortest_range_wins() {
        let long = vec![1, 2, 3, 4, 5, 6];
        let short = vec![1.0, 2.0, 3.0];
        let z = zip((&long, &short));
        assert_eq!(z.iter().count(), short.len());
        assert_eq!(z.len(), 3);

        let z = zip((&short, &long));
        assert_eq!(z.iter().count(), short.len());
    }

    #[test]
    fn test_three_way() {
        let names = ["a", "b", "c"];
        let down = make_range(10, 0, -5).unwrap();
        let zipped: Vec<(i64, &&str, i64)> = zip((range(3), &names, down)).into_iter().collect();
        assert_eq!(zipped, vec![(0, &"a", 10), (1, &"b", 5)]);
    }

    #[test]
    fn test_single_source() {
        let single: Vec<(i64,)> = zip((range(2),)).into_iter().collect();
        assert_eq!(single, vec![(0,), (1,)]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut it = zip((range(1), range(5))).into_iter();
        assert_eq!(it.next(), Some((0, 0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_matches_itertools_zip_eq() {
        use itertools::Itertools;

        let mut rng = fastrand::Rng::with_seed(7);
        let a: Vec<u32> = (0..50).map(|_| rng.u32(..100)).collect();
        let b: Vec<u32> = (0..50).map(|_| rng.u32(..100)).collect();
        let ours: Vec<(u32, u32)> = zip((&a, &b)).into_iter().map(|(x, y)| (*x, *y)).collect();
        let reference: Vec<(u32, u32)> = a.iter().copied().zip_eq(b.iter().copied()).collect();
        assert_eq!(ours, reference);
    }

    #[test]
    fn test_zip_of_transformed_ranges() {
        let doubled = transform(range(4), |x| x * 2);
        let halved = transform(range(4), |x| x / 2);
        let pairs: Vec<_> = zip((doubled, halved)).into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (2, 0), (4, 1), (6, 1)]);
    }
}
