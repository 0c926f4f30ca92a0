//! Stages that transform pairs, and the projections back to single-value
//! sequences.

use crate::seq::Seq;
use crate::seq2::Seq2;

/// Applies a function to each pair as it is pulled.
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, K, V> Seq2 for Map<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> (K, V),
{
    type Key = K;
    type Value = V;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(K, V) -> bool + ?Sized,
    {
        self.inner.drive(&mut |k: S::Key, v: S::Value| {
            let (k, v) = (self.f)(k, v);
            sink(k, v)
        });
    }
}

/// Maps each pair to an `Option`, forwarding only the `Some` pairs.
#[derive(Clone)]
pub struct FilterMap<S, F> {
    inner: S,
    f: F,
}

impl<S, F> FilterMap<S, F> {
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, K, V> Seq2 for FilterMap<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> Option<(K, V)>,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(K, V) -> bool + ?Sized,
    {
        self.inner
            .drive(&mut |k: S::Key, v: S::Value| match (self.f)(k, v) {
                Some((k, v)) => sink(k, v),
                None => true,
            });
    }
}

/// The keys of a paired sequence.
#[derive(Clone)]
pub struct Keys<S> {
    inner: S,
}

impl<S> Keys<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for Keys<S>
where
    S: Seq2,
{
    type Item = S::Key;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(S::Key) -> bool + ?Sized,
    {
        self.inner.drive(&mut |k: S::Key, _: S::Value| sink(k));
    }
}

/// The values of a paired sequence.
#[derive(Clone)]
pub struct Values<S> {
    inner: S,
}

impl<S> Values<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq for Values<S>
where
    S: Seq2,
{
    type Item = S::Value;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(S::Value) -> bool + ?Sized,
    {
        self.inner.drive(&mut |_: S::Key, v: S::Value| sink(v));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::{Seq, Seq2, iter_map, iter_pairs, iter_slice};

    #[test]
    fn test_keys_and_values() {
        let numbers = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
        assert_eq!(iter_map(&numbers).keys().collect_vec(), vec![1, 2, 3]);
        assert_eq!(
            iter_map(&numbers).values().collect_vec(),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_map() {
        let swapped = iter_pairs(vec![(1, 10), (2, 20)])
            .map(|k, v| (v, k))
            .collect_pairs();
        assert_eq!(swapped, vec![(10, 1), (20, 2)]);
    }

    #[test]
    fn test_filter_map_drops_none() {
        let matching = iter_slice(&[8usize, 1, 5, 3])
            .indexed()
            .map_to::<usize, usize>()
            .filter_map(|i, n| (i == n).then_some((i, n)))
            .values()
            .collect_vec();
        assert_eq!(matching, vec![1, 3]);
    }

    #[test]
    fn test_filter_map_same_types() {
        let evens = iter_pairs(vec![("a", 1), ("b", 2), ("c", 4)])
            .filter_map(|k, v| (v % 2 == 0).then_some((k, v / 2)))
            .collect_pairs();
        assert_eq!(evens, vec![("b", 1), ("c", 2)]);
    }
}
