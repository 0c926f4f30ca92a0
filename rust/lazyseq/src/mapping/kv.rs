//! The paired counterpart of [`Mapper`](super::Mapper).

use std::marker::PhantomData;

use lazyseq_common::Result;

use crate::halt::catch_halt;
use crate::seq2::{
    Filter, FilterMap, Map, Seq2, Skip, SkipWhile, Take, TakeWhile, fold_pairs_with,
};

/// A type-level list of `(key, value)` type pairs for a [`KvMapper`] chain.
pub trait Hops2 {
    type Stage<S: Seq2>;

    fn stage<S: Seq2>(inner: S) -> Self::Stage<S>;
}

impl Hops2 for () {
    type Stage<S: Seq2> = S;

    #[inline]
    fn stage<S: Seq2>(inner: S) -> S {
        inner
    }
}

impl<K, V, Rest> Hops2 for ((K, V), Rest)
where
    Rest: Hops2,
{
    type Stage<S: Seq2> = KvMapper<S, ((K, V), Rest)>;

    #[inline]
    fn stage<S: Seq2>(inner: S) -> KvMapper<S, ((K, V), Rest)> {
        KvMapper::new(inner)
    }
}

/// Spells a [`Hops2`] list: `kv_hops![(A, B), (C, D)]` is
/// `((A, B), ((C, D), ()))`.
#[macro_export]
macro_rules! kv_hops {
    () => { () };
    (($key:ty, $value:ty) $(, ($tail_key:ty, $tail_value:ty))* $(,)?) => {
        (($key, $value), $crate::kv_hops![$(($tail_key, $tail_value)),*])
    };
}

/// A paired sequence waiting for a stage that changes its key or value type.
pub struct KvMapper<S, H> {
    inner: S,
    _hops: PhantomData<fn() -> H>,
}

impl<S: Clone, H> Clone for KvMapper<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _hops: PhantomData,
        }
    }
}

impl<S, H> KvMapper<S, H> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _hops: PhantomData,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, K, V, Rest> KvMapper<S, ((K, V), Rest)>
where
    S: Seq2,
    Rest: Hops2,
{
    pub fn map<F>(self, f: F) -> Rest::Stage<Map<S, F>>
    where
        F: Fn(S::Key, S::Value) -> (K, V),
    {
        Rest::stage(Map::new(self.inner, f))
    }

    pub fn filter_map<F>(self, f: F) -> Rest::Stage<FilterMap<S, F>>
    where
        F: Fn(S::Key, S::Value) -> Option<(K, V)>,
    {
        Rest::stage(FilterMap::new(self.inner, f))
    }

    pub fn filter<P>(self, predicate: P) -> KvMapper<Filter<S, P>, ((K, V), Rest)>
    where
        P: Fn(&S::Key, &S::Value) -> bool,
    {
        KvMapper::new(Filter::new(self.inner, predicate))
    }

    pub fn skip(self, count: usize) -> KvMapper<Skip<S>, ((K, V), Rest)> {
        KvMapper::new(Skip::new(self.inner, count))
    }

    pub fn skip_while<P>(self, predicate: P) -> KvMapper<SkipWhile<S, P>, ((K, V), Rest)>
    where
        P: Fn(&S::Key, &S::Value) -> bool,
    {
        KvMapper::new(SkipWhile::new(self.inner, predicate))
    }

    pub fn take(self, count: usize) -> KvMapper<Take<S>, ((K, V), Rest)> {
        KvMapper::new(Take::new(self.inner, count))
    }

    pub fn take_while<P>(self, predicate: P) -> KvMapper<TakeWhile<S, P>, ((K, V), Rest)>
    where
        P: Fn(&S::Key, &S::Value) -> bool,
    {
        KvMapper::new(TakeWhile::new(self.inner, predicate))
    }

    /// Left-folds the current pairs into an accumulator pair of any types.
    pub fn fold<A, B, F>(&self, initial_key: A, initial_value: B, combine: F) -> (A, B)
    where
        F: FnMut(A, B, S::Key, S::Value) -> (A, B),
    {
        fold_pairs_with(&self.inner, initial_key, initial_value, combine)
    }

    /// Like [`KvMapper::fold`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_fold<A, B, F>(&self, initial_key: A, initial_value: B, combine: F) -> Result<(A, B)>
    where
        F: FnMut(A, B, S::Key, S::Value) -> (A, B),
    {
        catch_halt(|| self.fold(initial_key, initial_value, combine))
    }
}
