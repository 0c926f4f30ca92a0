//! Stages that select a subset of elements without changing them.
//!
//! None of these stages can produce more elements than its upstream. Their
//! counters and flags live on the stack of a single [`Seq::drive`] call, so a
//! stage value can be driven repeatedly and always starts from scratch.

use crate::seq::Seq;

/// Keeps the elements matching a predicate.
#[derive(Clone)]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        self.inner.drive(&mut |v: S::Item| {
            if (self.predicate)(&v) {
                sink(v)
            } else {
                true
            }
        });
    }
}

/// Drops a fixed number of leading elements.
#[derive(Clone)]
pub struct Skip<S> {
    inner: S,
    count: usize,
}

impl<S> Skip<S> {
    pub fn new(inner: S, count: usize) -> Self {
        Self { inner, count }
    }
}

impl<S> Seq for Skip<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        let mut skipped = 0;
        self.inner.drive(&mut |v: S::Item| {
            if skipped < self.count {
                skipped += 1;
                return true;
            }
            sink(v)
        });
    }
}

/// Drops the leading run of elements matching a predicate.
///
/// Once an element fails the predicate, it and everything after it are
/// forwarded, whether or not they match.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> SkipWhile<S, P> {
    pub fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Seq for SkipWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        let mut skipping = true;
        self.inner.drive(&mut |v: S::Item| {
            if skipping {
                if (self.predicate)(&v) {
                    return true;
                }
                skipping = false;
            }
            sink(v)
        });
    }
}

/// Forwards at most a fixed number of elements.
///
/// The upstream is told to stop as soon as the last wanted element has been
/// forwarded, so it is never asked for one more.
#[derive(Clone)]
pub struct Take<S> {
    inner: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(inner: S, count: usize) -> Self {
        Self { inner, count }
    }
}

impl<S> Seq for Take<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        if self.count == 0 {
            return;
        }
        let mut taken = 0;
        self.inner.drive(&mut |v: S::Item| {
            taken += 1;
            sink(v) && taken < self.count
        });
    }
}

/// Forwards the leading run of elements matching a predicate.
///
/// Stops for good at the first element that fails.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> TakeWhile<S, P> {
    pub fn new(inner: S, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Item) -> bool + ?Sized,
    {
        self.inner
            .drive(&mut |v: S::Item| (self.predicate)(&v) && sink(v));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{Seq, from_fn, iter, iter_slice};

    const NINE: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn test_filter() {
        let kept = iter_slice(&[true, false, true, false, true])
            .filter(|b| !b)
            .collect_vec();
        assert_eq!(kept, vec![false, false]);
    }

    #[test]
    fn test_skip() {
        assert_eq!(iter_slice(&NINE).skip(3).collect_vec(), vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(iter_slice(&NINE).skip(0).collect_vec(), NINE.to_vec());
        assert!(iter_slice(&NINE).skip(9).collect_vec().is_empty());
        assert!(iter_slice(&NINE).skip(100).collect_vec().is_empty());
    }

    #[test]
    fn test_take() {
        assert_eq!(iter_slice(&NINE).take(3).collect_vec(), vec![1, 2, 3]);
        assert_eq!(iter_slice(&NINE).take(100).collect_vec(), NINE.to_vec());
        assert!(iter_slice(&NINE).take(0).collect_vec().is_empty());
    }

    #[test]
    fn test_skip_then_take() {
        let window = iter_slice(&NINE).skip(3).take(3).collect_vec();
        assert_eq!(window, vec![4, 5, 6]);
    }

    #[test]
    fn test_take_pulls_exactly_count() {
        let pulls = Cell::new(0);
        let naturals = from_fn(|sink: &mut dyn FnMut(u64) -> bool| {
            let mut n = 0;
            loop {
                pulls.set(pulls.get() + 1);
                if !sink(n) {
                    break;
                }
                n += 1;
            }
        });
        assert_eq!((&naturals).take(2).collect_vec(), vec![0, 1]);
        assert_eq!(pulls.get(), 2);

        pulls.set(0);
        assert!((&naturals).take(0).collect_vec().is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_while_single_run() {
        let taken = iter_slice(&[2, 4, 5, 6, 8]).take_while(is_even).collect_vec();
        assert_eq!(taken, vec![2, 4]);
    }

    #[test]
    fn test_skip_while_single_run() {
        let rest = iter_slice(&[2, 4, 5, 6, 8]).skip_while(is_even).collect_vec();
        assert_eq!(rest, vec![5, 6, 8]);
    }

    #[test]
    fn test_stored_stage_restarts() {
        let base = iter(1..=9).skip(3);
        assert_eq!((&base).take(3).collect_vec(), vec![4, 5, 6]);
        assert_eq!((&base).skip(3).collect_vec(), vec![7, 8, 9]);
        assert_eq!(base.clone().take(1).collect_vec(), vec![4]);
        assert_eq!(base.collect_vec(), vec![4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_random_chains_match_std() {
        fastrand::seed(7_340_211);
        for _ in 0..200 {
            let len = fastrand::usize(0..40);
            let data: Vec<i32> = (0..len).map(|_| fastrand::i32(-50..50)).collect();
            let skip = fastrand::usize(0..45);
            let take = fastrand::usize(0..45);
            let threshold = fastrand::i32(-50..50);

            let ours = iter_slice(&data)
                .filter(|v| *v != threshold)
                .skip(skip)
                .take_while(|v| *v > threshold - 40)
                .take(take)
                .collect_vec();
            let expected: Vec<i32> = data
                .iter()
                .copied()
                .filter(|v| *v != threshold)
                .skip(skip)
                .take_while(|v| *v > threshold - 40)
                .take(take)
                .collect();
            assert_eq!(ours, expected);
        }
    }
}
