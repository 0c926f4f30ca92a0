//! Type-changing stages.
//!
//! [`Seq::map`] keeps the element type. To change it, a pipeline first names
//! the target type with [`Seq::map_to`] (one hop) or [`Seq::mapping`] (several
//! hops, spelled with [`hops!`](crate::hops)). The resulting [`Mapper`] offers
//! only stages that can precede the type change, plus [`Mapper::fold`]. Its
//! `map`, `filter_map` and `expand` consume one hop: with no hops left they
//! return a plain sequence, otherwise the next `Mapper`.
//!
//! ```
//! use lazyseq::{Seq, hops, iter_slice};
//!
//! let scaled = iter_slice(&["1", "20", "3"])
//!     .mapping::<hops![u8, f64]>()
//!     .map(|s| s.as_bytes()[0] - b'0')
//!     .map(|d| f64::from(d) / 2.0)
//!     .collect_vec();
//! assert_eq!(scaled, vec![0.5, 1.0, 1.5]);
//! ```

use std::marker::PhantomData;

use lazyseq_common::Result;

use crate::halt::catch_halt;
use crate::seq::{
    Expand, Filter, FilterMap, Map, Seq, Skip, SkipWhile, Take, TakeWhile, fold_with,
};

pub mod kv;

pub use kv::{Hops2, KvMapper};

/// A type-level list of the element types still to be reached by a
/// [`Mapper`] chain: `()` when none are left, `(O, Rest)` otherwise.
pub trait Hops {
    /// What a type-changing stage returns once it has consumed the current
    /// hop.
    type Stage<S: Seq>;

    fn stage<S: Seq>(inner: S) -> Self::Stage<S>;
}

impl Hops for () {
    type Stage<S: Seq> = S;

    #[inline]
    fn stage<S: Seq>(inner: S) -> S {
        inner
    }
}

impl<O, Rest> Hops for (O, Rest)
where
    Rest: Hops,
{
    type Stage<S: Seq> = Mapper<S, (O, Rest)>;

    #[inline]
    fn stage<S: Seq>(inner: S) -> Mapper<S, (O, Rest)> {
        Mapper::new(inner)
    }
}

/// Spells a [`Hops`] list: `hops![A, B]` is `(A, (B, ()))`.
#[macro_export]
macro_rules! hops {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::hops![$($tail),*])
    };
}

/// A sequence waiting for a type-changing stage.
///
/// Created by [`Seq::map_to`] and [`Seq::mapping`]. A `Mapper` is not itself a
/// [`Seq`]; collecting requires going through `map`, `filter_map` or
/// `expand` first.
pub struct Mapper<S, H> {
    inner: S,
    _hops: PhantomData<fn() -> H>,
}

impl<S: Clone, H> Clone for Mapper<S, H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _hops: PhantomData,
        }
    }
}

impl<S, H> Mapper<S, H> {
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

impl<S, O, Rest> Mapper<S, (O, Rest)>
where
    S: Seq,
    Rest: Hops,
{
    /// Converts each element to `O`.
    pub fn map<F>(self, f: F) -> Rest::Stage<Map<S, F>>
    where
        F: Fn(S::Item) -> O,
    {
        Rest::stage(Map::new(self.inner, f))
    }

    /// Converts each element to `O`, dropping the ones mapped to `None`.
    pub fn filter_map<F>(self, f: F) -> Rest::Stage<FilterMap<S, F>>
    where
        F: Fn(S::Item) -> Option<O>,
    {
        Rest::stage(FilterMap::new(self.inner, f))
    }

    /// Replaces each element with a sequence of `O`.
    pub fn expand<F, T>(self, f: F) -> Rest::Stage<Expand<S, F>>
    where
        F: Fn(S::Item) -> T,
        T: Seq<Item = O>,
    {
        Rest::stage(Expand::new(self.inner, f))
    }

    pub fn filter<P>(self, predicate: P) -> Mapper<Filter<S, P>, (O, Rest)>
    where
        P: Fn(&S::Item) -> bool,
    {
        Mapper::new(Filter::new(self.inner, predicate))
    }

    pub fn skip(self, count: usize) -> Mapper<Skip<S>, (O, Rest)> {
        Mapper::new(Skip::new(self.inner, count))
    }

    pub fn skip_while<P>(self, predicate: P) -> Mapper<SkipWhile<S, P>, (O, Rest)>
    where
        P: Fn(&S::Item) -> bool,
    {
        Mapper::new(SkipWhile::new(self.inner, predicate))
    }

    pub fn take(self, count: usize) -> Mapper<Take<S>, (O, Rest)> {
        Mapper::new(Take::new(self.inner, count))
    }

    pub fn take_while<P>(self, predicate: P) -> Mapper<TakeWhile<S, P>, (O, Rest)>
    where
        P: Fn(&S::Item) -> bool,
    {
        Mapper::new(TakeWhile::new(self.inner, predicate))
    }

    /// Left-folds the current elements into an accumulator of any type.
    pub fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, S::Item) -> A,
    {
        fold_with(&self.inner, initial, combine)
    }

    /// Like [`Mapper::fold`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_fold<A, F>(&self, initial: A, combine: F) -> Result<A>
    where
        F: FnMut(A, S::Item) -> A,
    {
        catch_halt(|| self.fold(initial, combine))
    }
}

#[cfg(test)]
mod tests {
    use crate::{OrHalt, Seq, generate, iter, iter_slice};

    #[test]
    fn test_single_hop() {
        let lengths = iter_slice(&["a", "bcd", "ef"])
            .map_to::<usize>()
            .map(str::len)
            .collect_vec();
        assert_eq!(lengths, vec![1, 3, 2]);
    }

    #[test]
    fn test_three_hops() {
        let scaled = iter_slice(&["1", "200", "3", "42", "55"])
            .mapping::<hops![u8, i32, f64]>()
            .map(|s| s.as_bytes()[0])
            .map(|b| i32::from(b - b'0'))
            .map(|n| f64::from(n) * 1.1)
            .collect_vec();
        let expected = [1.1, 2.2, 3.3, 4.4, 5.5];
        assert_eq!(scaled.len(), expected.len());
        for (got, want) in scaled.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn test_fold_to_string() {
        let joined = generate(5, |i| i + 1)
            .map_to::<String>()
            .fold(String::new(), |mut acc, n| {
                if !acc.is_empty() {
                    acc.push_str(", ");
                }
                acc.push_str(&n.to_string());
                acc
            });
        assert_eq!(joined, "1, 2, 3, 4, 5");
    }

    #[test]
    fn test_filter_map_drops_failures() {
        let parsed = iter_slice(&["1", "two", "3"])
            .map_to::<i32>()
            .filter_map(|s| s.parse().ok())
            .collect_vec();
        assert_eq!(parsed, vec![1, 3]);
    }

    #[test]
    fn test_map_halts_on_failure() {
        let err = iter_slice(&["1", "two", "3"])
            .map_to::<i32>()
            .map(|s| s.parse::<i32>().or_halt())
            .try_collect_vec()
            .unwrap_err();
        let source = err.into_halted().unwrap();
        assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_expand_changes_type() {
        let chars = iter_slice(&["ab", "", "c"])
            .map_to::<char>()
            .expand(|s| iter(s.chars()))
            .collect_vec();
        assert_eq!(chars, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_selection_before_type_change() {
        let mapper = iter(1..=10)
            .map_to::<String>()
            .filter(|n| n % 2 == 1)
            .skip(1)
            .skip_while(|n| *n < 5)
            .take_while(|n| *n < 10)
            .take(2);
        assert_eq!(mapper.fold(0, |acc, n| acc + n), 12);
        assert_eq!(mapper.try_fold(0, |acc, n| acc + n).unwrap(), 12);

        let strings = mapper.map(|n| n.to_string()).collect_vec();
        assert_eq!(strings, vec!["5", "7"]);
    }

    #[test]
    fn test_try_fold_halts() {
        let err = iter(1..=3)
            .map_to::<u8>()
            .try_fold(0, |acc, n| {
                if n == 2 {
                    crate::halt_iteration("two");
                }
                acc + n
            })
            .unwrap_err();
        assert!(err.is_halted());
    }
}
