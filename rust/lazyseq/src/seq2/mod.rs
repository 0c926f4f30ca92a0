//! Paired sequences.
//!
//! A [`Seq2`] pushes two covarying values per element, conventionally a key
//! and a value. Keys need not be unique and the pairing carries no map
//! semantics. The stage and terminal surface mirrors [`Seq`](crate::Seq),
//! with callbacks taking both halves of the pair.

use lazyseq_common::Result;
use lazyseq_common::result::non_empty;

use crate::halt::catch_halt;
use crate::mapping::KvMapper;

pub mod select;
pub mod transform;

pub use select::{Filter, Skip, SkipWhile, Take, TakeWhile};
pub use transform::{FilterMap, Keys, Map, Values};

/// A lazy, re-drivable sequence of key/value pairs.
pub trait Seq2 {
    type Key;
    type Value;

    /// Pushes every pair into `sink`, stopping as soon as `sink` returns
    /// `false`.
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool + ?Sized;

    /// Continues with the keys only.
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }

    /// Continues with the values only.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Transforms each pair with `f`. To change the key or value type, see
    /// [`Seq2::map_to`].
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Key, Self::Value) -> (Self::Key, Self::Value),
    {
        Map::new(self, f)
    }

    /// Transforms each pair with `f`, dropping the ones mapped to `None`.
    fn filter_map<F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Key, Self::Value) -> Option<(Self::Key, Self::Value)>,
    {
        FilterMap::new(self, f)
    }

    /// Keeps the pairs for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Key, &Self::Value) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drops the first `count` pairs.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Drops the leading run of pairs for which `predicate` holds.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Key, &Self::Value) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Keeps at most the first `count` pairs, never pulling one more.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Keeps the leading run of pairs for which `predicate` holds, stopping
    /// for good at the first pair that fails it.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Key, &Self::Value) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Starts a stage whose `map` changes the pair types to `(K, V)`.
    fn map_to<K, V>(self) -> KvMapper<Self, ((K, V), ())>
    where
        Self: Sized,
    {
        KvMapper::new(self)
    }

    /// Starts a chain of type-changing stages. See [`kv_hops!`](crate::kv_hops).
    fn mapping<H>(self) -> KvMapper<Self, H>
    where
        Self: Sized,
    {
        KvMapper::new(self)
    }

    /// Calls `f` with every pair, in traversal order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Key, Self::Value),
    {
        self.drive(&mut |k, v| {
            f(k, v);
            true
        });
    }

    /// Like [`Seq2::for_each`], but returns a halt as `ErrorKind::Halted`.
    fn try_for_each<F>(&self, f: F) -> Result<()>
    where
        F: FnMut(Self::Key, Self::Value),
    {
        catch_halt(|| self.for_each(f))
    }

    /// Collects the pairs into a vector, in traversal order.
    fn collect_pairs(&self) -> Vec<(Self::Key, Self::Value)> {
        let mut out = Vec::new();
        self.drive(&mut |k, v| {
            out.push((k, v));
            true
        });
        out
    }

    /// Like [`Seq2::collect_pairs`], but returns a halt as `ErrorKind::Halted`.
    fn try_collect_pairs(&self) -> Result<Vec<(Self::Key, Self::Value)>> {
        catch_halt(|| self.collect_pairs())
    }

    /// Left-folds the pairs, seeding with the first one. `combine` receives the
    /// accumulated pair followed by the current pair.
    ///
    /// Fails with `EmptySeq` if there are no pairs.
    fn reduce<F>(&self, mut combine: F) -> Result<(Self::Key, Self::Value)>
    where
        F: FnMut(Self::Key, Self::Value, Self::Key, Self::Value) -> (Self::Key, Self::Value),
    {
        let mut acc = None;
        self.drive(&mut |k, v| {
            acc = Some(match acc.take() {
                Some((acc_k, acc_v)) => combine(acc_k, acc_v, k, v),
                None => (k, v),
            });
            true
        });
        non_empty(acc)
    }

    /// Like [`Seq2::reduce`], but returns a halt as `ErrorKind::Halted`.
    fn try_reduce<F>(&self, combine: F) -> Result<(Self::Key, Self::Value)>
    where
        F: FnMut(Self::Key, Self::Value, Self::Key, Self::Value) -> (Self::Key, Self::Value),
    {
        catch_halt(|| self.reduce(combine))?
    }

    /// Left-folds the pairs onto `(initial_key, initial_value)`. An empty
    /// sequence returns the initial pair unchanged.
    fn fold<F>(
        &self,
        initial_key: Self::Key,
        initial_value: Self::Value,
        combine: F,
    ) -> (Self::Key, Self::Value)
    where
        F: FnMut(Self::Key, Self::Value, Self::Key, Self::Value) -> (Self::Key, Self::Value),
    {
        fold_pairs_with(self, initial_key, initial_value, combine)
    }

    /// Like [`Seq2::fold`], but returns a halt as `ErrorKind::Halted`.
    fn try_fold<F>(
        &self,
        initial_key: Self::Key,
        initial_value: Self::Value,
        combine: F,
    ) -> Result<(Self::Key, Self::Value)>
    where
        F: FnMut(Self::Key, Self::Value, Self::Key, Self::Value) -> (Self::Key, Self::Value),
    {
        catch_halt(|| self.fold(initial_key, initial_value, combine))
    }

    /// Returns the first pair without pulling any further ones.
    fn first(&self) -> Result<(Self::Key, Self::Value)> {
        let mut first = None;
        self.drive(&mut |k, v| {
            first = Some((k, v));
            false
        });
        non_empty(first)
    }

    /// Like [`Seq2::first`], but returns a halt as `ErrorKind::Halted`.
    fn try_first(&self) -> Result<(Self::Key, Self::Value)> {
        catch_halt(|| self.first())?
    }

    /// Returns the last pair. Drives the whole sequence.
    fn last(&self) -> Result<(Self::Key, Self::Value)> {
        let mut last = None;
        self.drive(&mut |k, v| {
            last = Some((k, v));
            true
        });
        non_empty(last)
    }

    /// Like [`Seq2::last`], but returns a halt as `ErrorKind::Halted`.
    fn try_last(&self) -> Result<(Self::Key, Self::Value)> {
        catch_halt(|| self.last())?
    }

    /// Returns `true` if some pair satisfies `test`; stops at the first match.
    fn any<P>(&self, mut test: P) -> bool
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        let mut found = false;
        self.drive(&mut |k, v| {
            found = test(k, v);
            !found
        });
        found
    }

    /// Like [`Seq2::any`], but returns a halt as `ErrorKind::Halted`.
    fn try_any<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        catch_halt(|| self.any(test))
    }

    /// Returns `true` if no pair satisfies `test`.
    fn none<P>(&self, test: P) -> bool
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        !self.any(test)
    }

    /// Like [`Seq2::none`], but returns a halt as `ErrorKind::Halted`.
    fn try_none<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        catch_halt(|| self.none(test))
    }

    /// Returns `true` if every pair satisfies `test`; stops at the first
    /// failure.
    fn every<P>(&self, mut test: P) -> bool
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        let mut all = true;
        self.drive(&mut |k, v| {
            all = test(k, v);
            all
        });
        all
    }

    /// Like [`Seq2::every`], but returns a halt as `ErrorKind::Halted`.
    fn try_every<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        catch_halt(|| self.every(test))
    }
}

impl<S> Seq2 for &S
where
    S: Seq2 + ?Sized,
{
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool + ?Sized,
    {
        (**self).drive(sink)
    }
}

/// Folds `seq` into an accumulator pair of any types.
pub(crate) fn fold_pairs_with<S, A, B, F>(
    seq: &S,
    initial_key: A,
    initial_value: B,
    mut combine: F,
) -> (A, B)
where
    S: Seq2 + ?Sized,
    F: FnMut(A, B, S::Key, S::Value) -> (A, B),
{
    let mut acc = Some((initial_key, initial_value));
    seq.drive(&mut |k, v| {
        acc = acc
            .take()
            .map(|(acc_k, acc_v)| combine(acc_k, acc_v, k, v));
        true
    });
    match acc {
        Some(acc) => acc,
        None => unreachable!("fold accumulator is restored after every pair"),
    }
}
