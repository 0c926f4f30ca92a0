//! Numeric sequences and range sources.

use num_traits::{Bounded, Num};

use lazyseq_common::Result;

use crate::halt::catch_halt;
use crate::ord_seq::extreme_by;
use crate::seq::{Seq, fold_with};

/// Adds [`sum`](NumSeq::sum) to a sequence of numbers, and
/// [`max`](NumSeq::max) / [`min`](NumSeq::min) when the numbers are ordered.
/// Created by [`Seq::num`] and by the range constructors.
#[derive(Clone)]
pub struct NumSeq<S> {
    inner: S,
}

impl<S> NumSeq<S>
where
    S: Seq,
    S::Item: Num + Copy,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The sum of all elements; zero for an empty sequence.
    pub fn sum(&self) -> S::Item {
        fold_with(&self.inner, num_traits::zero::<S::Item>(), |acc, v| acc + v)
    }

    /// Like [`NumSeq::sum`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_sum(&self) -> Result<S::Item> {
        catch_halt(|| self.sum())
    }
}

impl<S> NumSeq<S>
where
    S: Seq,
    S::Item: Num + PartialOrd + Copy,
{
    /// The greatest element; ties keep the first.
    pub fn max(&self) -> Result<S::Item> {
        extreme_by(&self.inner, |candidate, best| candidate > best)
    }

    /// Like [`NumSeq::max`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_max(&self) -> Result<S::Item> {
        catch_halt(|| self.max())?
    }

    /// The least element; ties keep the first.
    pub fn min(&self) -> Result<S::Item> {
        extreme_by(&self.inner, |candidate, best| candidate < best)
    }

    /// Like [`NumSeq::min`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_min(&self) -> Result<S::Item> {
        catch_halt(|| self.min())?
    }
}

impl<S> Seq for NumSeq<S>
where
    S: Seq,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        self.inner.drive(sink)
    }
}

/// An arithmetic progression bounded by an exclusive end.
#[derive(Clone, Copy, Debug)]
pub struct RangeInterval<V> {
    from: V,
    to: V,
    step: V,
}

impl<V> RangeInterval<V>
where
    V: Num + Bounded + PartialOrd + Copy,
{
    fn is_empty(&self) -> bool {
        let zero: V = num_traits::zero();
        self.step == zero
            || (self.step > zero && self.to <= self.from)
            || (self.step < zero && self.to >= self.from)
    }

    /// The element after `i`, or `None` once stepping would leave the range
    /// of `V`. Past either bound of `V` lies past `to` as well.
    fn next_after(&self, i: V, ascending: bool) -> Option<V> {
        let fits = if ascending {
            i <= V::max_value() - self.step
        } else {
            i >= V::min_value() - self.step
        };
        fits.then(|| i + self.step)
    }
}

impl<V> Seq for RangeInterval<V>
where
    V: Num + Bounded + PartialOrd + Copy,
{
    type Item = V;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(V) -> bool + ?Sized,
    {
        if self.is_empty() {
            return;
        }
        let ascending = self.step > num_traits::zero::<V>();
        let mut i = self.from;
        while (ascending && i < self.to) || (!ascending && i > self.to) {
            if !sink(i) {
                return;
            }
            match self.next_after(i, ascending) {
                Some(next) => i = next,
                None => return,
            }
        }
    }
}

/// `0, 1, ... to - 1`.
pub fn range<V>(to: V) -> NumSeq<RangeInterval<V>>
where
    V: Num + Bounded + PartialOrd + Copy,
{
    range_interval(num_traits::zero(), to, num_traits::one())
}

/// `from, from + 1, ...` up to but excluding `to`.
pub fn range_from<V>(from: V, to: V) -> NumSeq<RangeInterval<V>>
where
    V: Num + Bounded + PartialOrd + Copy,
{
    range_interval(from, to, num_traits::one())
}

/// `from, from + step, ...` while below `to` (positive `step`) or above `to`
/// (negative `step`).
///
/// The range is empty when `step` is zero or points away from `to`.
///
/// ```
/// use lazyseq::{Seq, range_interval};
///
/// assert_eq!(range_interval(1, -6, -2).collect_vec(), vec![1, -1, -3, -5]);
/// assert!(range_interval(1, 6, -2).collect_vec().is_empty());
/// ```
pub fn range_interval<V>(from: V, to: V, step: V) -> NumSeq<RangeInterval<V>>
where
    V: Num + Bounded + PartialOrd + Copy,
{
    NumSeq::new(RangeInterval { from, to, step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, iter_slice};

    #[test]
    fn test_range() {
        assert_eq!(range(3).collect_vec(), vec![0, 1, 2]);
        assert!(range(0).collect_vec().is_empty());
        assert!(range(-3).collect_vec().is_empty());
        assert_eq!(range_from(-2, 2).collect_vec(), vec![-2, -1, 0, 1]);
        assert!(range_from(5u8, 5).collect_vec().is_empty());
    }

    #[test]
    fn test_range_interval() {
        assert_eq!(range_interval(2, 11, 2).collect_vec(), vec![2, 4, 6, 8, 10]);
        assert_eq!(range_interval(1, -6, -2).collect_vec(), vec![1, -1, -3, -5]);
        assert_eq!(
            range_interval(1.0, 3.0, 0.5).collect_vec(),
            vec![1.0, 1.5, 2.0, 2.5]
        );
    }

    #[test]
    fn test_degenerate_intervals() {
        assert!(range_interval(0, 10, 0).collect_vec().is_empty());
        assert!(range_interval(0, 10, -1).collect_vec().is_empty());
        assert!(range_interval(10, 0, 1).collect_vec().is_empty());
        assert!(range_interval(3, 3, 1).collect_vec().is_empty());
        assert!(range_interval(3, 3, -1).collect_vec().is_empty());
    }

    #[test]
    fn test_interval_stops_at_type_bounds() {
        assert_eq!(range_interval(250u8, 255, 10).collect_vec(), vec![250]);
        assert_eq!(range_interval(-120i8, -128, -5).collect_vec(), vec![-120, -125]);
        assert_eq!(range_interval(0u8, 255, 100).collect_vec(), vec![0, 100, 200]);
        assert_eq!(
            range_interval(i8::MIN, i8::MAX, 127).collect_vec(),
            vec![-128, -1, 126]
        );
        assert_eq!(
            range_interval(1i8, i8::MIN, i8::MIN).collect_vec(),
            vec![1, -127]
        );
        assert_eq!(range_from(253u8, u8::MAX).collect_vec(), vec![253, 254]);
    }

    #[test]
    fn test_range_is_lazy_and_unbounded_ranges_stop() {
        assert_eq!(range(u64::MAX).take(3).collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_sum() {
        assert_eq!(range(4).sum(), 6);
        assert_eq!(range(0).sum(), 0);
        assert_eq!(range_interval(0, -4, -1).sum(), -6);
        assert_eq!(range_interval(0.5, 2.0, 0.5).sum(), 3.0);
        assert_eq!(range(4).try_sum().unwrap(), 6);
    }

    #[test]
    fn test_num_after_stages() {
        let evens = range(10).filter(|n| n % 2 == 0).num();
        assert_eq!(evens.sum(), 20);
        assert_eq!(evens.max().unwrap(), 8);
        assert_eq!(evens.min().unwrap(), 0);

        let squares = generate(4, |i| (i * i) as i64).num();
        assert_eq!(squares.sum(), 14);
    }

    #[test]
    fn test_min_max_on_numbers() {
        let seq = iter_slice(&[2.5, -1.0, 7.25, -1.0]).num();
        assert_eq!(seq.max().unwrap(), 7.25);
        assert_eq!(seq.min().unwrap(), -1.0);
        assert!(range(0).max().unwrap_err().is_empty_seq());
        assert!(range(0.0).try_min().unwrap_err().is_empty_seq());
    }
}
