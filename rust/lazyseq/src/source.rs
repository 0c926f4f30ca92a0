//! Entry points that turn collections and functions into sequences.
//!
//! Every source here can be driven any number of times. Sources that borrow
//! their backing collection rely on the borrow checker to keep the collection
//! unchanged while a traversal is in flight; owned sources ([`iter`],
//! [`iter_pairs`]) clone their iterable once per traversal.

use std::marker::PhantomData;

use crate::seq::Seq;
use crate::seq2::Seq2;

/// Clones each element of a slice, in index order.
pub struct SliceSeq<'a, V> {
    slice: &'a [V],
}

impl<V> Clone for SliceSeq<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SliceSeq<'_, V> {}

impl<V> Seq for SliceSeq<'_, V>
where
    V: Clone,
{
    type Item = V;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(V) -> bool + ?Sized,
    {
        for v in self.slice {
            if !sink(v.clone()) {
                return;
            }
        }
    }
}

/// Creates a sequence over the elements of `slice`.
///
/// ```
/// use lazyseq::{Seq, iter_slice};
///
/// let words = ["a", "b", "c"];
/// assert_eq!(iter_slice(&words).skip(1).collect_vec(), vec!["b", "c"]);
/// ```
pub fn iter_slice<V>(slice: &[V]) -> SliceSeq<'_, V>
where
    V: Clone,
{
    SliceSeq { slice }
}

/// Drives a fresh clone of an iterable on every traversal.
#[derive(Clone)]
pub struct IterSeq<I> {
    source: I,
}

impl<I> Seq for IterSeq<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(I::Item) -> bool + ?Sized,
    {
        for v in self.source.clone() {
            if !sink(v) {
                return;
            }
        }
    }
}

/// Creates a sequence over anything that can be cloned and iterated:
/// ranges, vectors, borrowed collections, `Clone` iterators.
pub fn iter<I>(source: I) -> IterSeq<I>
where
    I: IntoIterator + Clone,
{
    IterSeq { source }
}

/// Yields `f(0)`, `f(1)`, ... `f(count - 1)`.
#[derive(Clone)]
pub struct Generate<F> {
    count: usize,
    f: F,
}

impl<F, V> Seq for Generate<F>
where
    F: Fn(usize) -> V,
{
    type Item = V;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(V) -> bool + ?Sized,
    {
        for i in 0..self.count {
            if !sink((self.f)(i)) {
                return;
            }
        }
    }
}

pub fn generate<F, V>(count: usize, f: F) -> Generate<F>
where
    F: Fn(usize) -> V,
{
    Generate { count, f }
}

/// A sequence defined directly by its traversal function.
pub struct FromFn<F, V> {
    f: F,
    _item: PhantomData<fn() -> V>,
}

impl<F: Clone, V> Clone for FromFn<F, V> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _item: PhantomData,
        }
    }
}

impl<F, V> Seq for FromFn<F, V>
where
    F: Fn(&mut dyn FnMut(V) -> bool),
{
    type Item = V;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(V) -> bool + ?Sized,
    {
        (self.f)(&mut |v| sink(v))
    }
}

/// Wraps a function that pushes values into a sink until the sink returns
/// `false`. The function is called once per traversal.
///
/// ```
/// use lazyseq::{Seq, from_fn};
///
/// let powers = from_fn(|sink: &mut dyn FnMut(u32) -> bool| {
///     let mut n = 1;
///     while sink(n) {
///         n *= 2;
///     }
/// });
/// assert_eq!(powers.take(5).collect_vec(), vec![1, 2, 4, 8, 16]);
/// ```
pub fn from_fn<F, V>(f: F) -> FromFn<F, V>
where
    F: Fn(&mut dyn FnMut(V) -> bool),
{
    FromFn {
        f,
        _item: PhantomData,
    }
}

/// Key/value pairs of a borrowed associative container.
pub struct MapSeq<'a, M: ?Sized> {
    map: &'a M,
}

impl<M: ?Sized> Clone for MapSeq<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ?Sized> Copy for MapSeq<'_, M> {}

impl<'a, M, K, V> Seq2 for MapSeq<'a, M>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(K, V) -> bool + ?Sized,
    {
        for (k, v) in self.map {
            if !sink(k.clone(), v.clone()) {
                return;
            }
        }
    }
}

/// Creates a paired sequence over the entries of a map.
///
/// Each key is visited once. The order is the map's own enumeration order,
/// which for hash maps is unspecified and may differ between traversals.
pub fn iter_map<'a, M, K, V>(map: &'a M) -> MapSeq<'a, M>
where
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    MapSeq { map }
}

#[derive(Clone)]
pub struct PairsSeq<I> {
    pairs: I,
}

impl<I, K, V> Seq2 for PairsSeq<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(K, V) -> bool + ?Sized,
    {
        for (k, v) in self.pairs.clone() {
            if !sink(k, v) {
                return;
            }
        }
    }
}

/// Creates a paired sequence over explicit `(key, value)` tuples.
pub fn iter_pairs<I, K, V>(pairs: I) -> PairsSeq<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    PairsSeq { pairs }
}

/// The paired counterpart of [`FromFn`].
pub struct FromFn2<F, K, V> {
    f: F,
    _pair: PhantomData<fn() -> (K, V)>,
}

impl<F: Clone, K, V> Clone for FromFn2<F, K, V> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _pair: PhantomData,
        }
    }
}

impl<F, K, V> Seq2 for FromFn2<F, K, V>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(K, V) -> bool + ?Sized,
    {
        (self.f)(&mut |k, v| sink(k, v))
    }
}

pub fn from_fn2<F, K, V>(f: F) -> FromFn2<F, K, V>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    FromFn2 {
        f,
        _pair: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_iter_slice() {
        let empty: [i32; 0] = [];
        assert!(iter_slice(&empty).collect_vec().is_empty());
        assert_eq!(iter_slice(&[3, 1, 2]).collect_vec(), vec![3, 1, 2]);

        let owned = vec![String::from("x"), String::from("y")];
        let seq = iter_slice(&owned);
        assert_eq!(seq.collect_vec(), owned);
        assert_eq!(seq.collect_vec(), owned);
    }

    #[test]
    fn test_iter_over_range_and_vec() {
        assert_eq!(iter(0..4).collect_vec(), vec![0, 1, 2, 3]);
        let data = vec![1, 2, 3];
        assert_eq!(iter(&data).collect_vec(), vec![&1, &2, &3]);
        assert_eq!(iter(data.clone()).last().unwrap(), 3);
    }

    #[test]
    fn test_generate() {
        assert_eq!(generate(4, |i| i * i).collect_vec(), vec![0, 1, 4, 9]);
        assert!(generate(0, |i| i).collect_vec().is_empty());
    }

    #[test]
    fn test_from_fn_runs_once_per_traversal() {
        let calls = Cell::new(0);
        let seq = from_fn(|sink: &mut dyn FnMut(char) -> bool| {
            calls.set(calls.get() + 1);
            for c in "abc".chars() {
                if !sink(c) {
                    return;
                }
            }
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(seq.collect_vec(), vec!['a', 'b', 'c']);
        assert_eq!(seq.first().unwrap(), 'a');
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_iter_map_visits_every_entry() {
        let ordered = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(iter_map(&ordered).collect_pairs(), vec![("a", 1), ("b", 2)]);

        let hashed: HashMap<u32, u32> = (0..50).map(|k| (k, k * 10)).collect();
        let mut pairs = iter_map(&hashed).collect_pairs();
        pairs.sort_unstable();
        assert_eq!(pairs.len(), 50);
        assert!(pairs.iter().all(|(k, v)| *v == k * 10));

        let empty: HashMap<u32, u32> = HashMap::new();
        assert!(iter_map(&empty).collect_pairs().is_empty());
    }

    #[test]
    fn test_iter_pairs_and_from_fn2() {
        let pairs = iter_pairs([(1, 'a'), (2, 'b')]);
        assert_eq!(pairs.keys().collect_vec(), vec![1, 2]);

        let squares = from_fn2(|sink: &mut dyn FnMut(u32, u32) -> bool| {
            for n in 0.. {
                if !sink(n, n * n) {
                    break;
                }
            }
        });
        assert_eq!(squares.take(3).collect_pairs(), vec![(0, 0), (1, 1), (2, 4)]);
    }
}
