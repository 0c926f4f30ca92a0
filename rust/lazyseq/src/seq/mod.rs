//! Single-value sequences.
//!
//! A [`Seq`] is a push-driven producer: [`Seq::drive`] calls a sink once per
//! element, in order, until the source is exhausted or the sink returns
//! `false`. Everything else in this module is built on that one method.
//!
//! Lazy stages ([`Seq::map`], [`Seq::filter`], [`Seq::skip`], ...) consume the
//! upstream sequence and return an adapter; nothing runs until a terminal
//! operation ([`Seq::collect_vec`], [`Seq::reduce`], [`Seq::first`], ...)
//! drives the chain. Terminal operations borrow the sequence, so the same
//! pipeline can be driven again, starting over from its source with fresh
//! per-traversal state.
//!
//! Every terminal has a `try_` twin that converts an early termination raised
//! with [`halt_iteration`](crate::halt::halt_iteration) into
//! [`ErrorKind::Halted`](lazyseq_common::ErrorKind::Halted).

use lazyseq_common::Result;
use lazyseq_common::result::non_empty;

use crate::halt::catch_halt;
use crate::mapping::Mapper;
use crate::num_seq::NumSeq;
use crate::ord_seq::OrdSeq;

pub mod select;
pub mod transform;

pub use select::{Filter, Skip, SkipWhile, Take, TakeWhile};
pub use transform::{Expand, FilterMap, Indexed, Map};

/// A lazy, re-drivable sequence of values.
pub trait Seq {
    type Item;

    /// Pushes every element into `sink`, stopping as soon as `sink` returns
    /// `false`.
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(Self::Item) -> bool + ?Sized;

    /// Transforms each element with `f`. To change the element type, see
    /// [`Seq::map_to`].
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Self::Item,
    {
        Map::new(self, f)
    }

    /// Transforms each element with `f`, dropping the ones mapped to `None`.
    fn filter_map<F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Option<Self::Item>,
    {
        FilterMap::new(self, f)
    }

    /// Keeps the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drops the first `count` elements. Skipping past the end yields an
    /// empty sequence.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Drops the leading run of elements for which `predicate` holds.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Keeps at most the first `count` elements.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Keeps the leading run of elements for which `predicate` holds.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Replaces each element with the sequence `f` returns for it.
    fn expand<F, T>(self, f: F) -> Expand<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> T,
        T: Seq<Item = Self::Item>,
    {
        Expand::new(self, f)
    }

    /// Pairs each element with its 0-based position.
    fn indexed(self) -> Indexed<Self>
    where
        Self: Sized,
    {
        Indexed::new(self)
    }

    /// Starts a stage whose `map` changes the element type to `O`.
    fn map_to<O>(self) -> Mapper<Self, (O, ())>
    where
        Self: Sized,
    {
        Mapper::new(self)
    }

    /// Starts a chain of type-changing stages, one per entry of `H`.
    /// See [`hops!`](crate::hops).
    fn mapping<H>(self) -> Mapper<Self, H>
    where
        Self: Sized,
    {
        Mapper::new(self)
    }

    /// Wraps the sequence to add [`OrdSeq::max`] and [`OrdSeq::min`].
    fn ord(self) -> OrdSeq<Self>
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        OrdSeq::new(self)
    }

    /// Wraps the sequence to add [`NumSeq::sum`].
    fn num(self) -> NumSeq<Self>
    where
        Self: Sized,
        Self::Item: num_traits::Num + Copy,
    {
        NumSeq::new(self)
    }

    /// Erases the concrete pipeline type.
    fn boxed<'a>(self) -> BoxedSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxedSeq(Box::new(self))
    }

    /// Calls `f` with every element, in traversal order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        self.drive(&mut |v| {
            f(v);
            true
        });
    }

    /// Like [`Seq::for_each`], but returns a halt as `ErrorKind::Halted`.
    fn try_for_each<F>(&self, f: F) -> Result<()>
    where
        F: FnMut(Self::Item),
    {
        catch_halt(|| self.for_each(f))
    }

    /// Collects the elements into a vector, in traversal order.
    fn collect_vec(&self) -> Vec<Self::Item> {
        let mut out = Vec::new();
        self.append_to(&mut out);
        out
    }

    /// Like [`Seq::collect_vec`], but returns a halt as `ErrorKind::Halted`.
    fn try_collect_vec(&self) -> Result<Vec<Self::Item>> {
        catch_halt(|| self.collect_vec())
    }

    /// Appends the elements to `out`, in traversal order.
    fn append_to(&self, out: &mut Vec<Self::Item>) {
        self.drive(&mut |v| {
            out.push(v);
            true
        });
    }

    /// Like [`Seq::append_to`], but returns a halt as `ErrorKind::Halted`.
    /// On failure `out` is restored to its original length.
    fn try_append_to(&self, out: &mut Vec<Self::Item>) -> Result<()> {
        let len = out.len();
        let result = catch_halt(|| self.append_to(out));
        if result.is_err() {
            out.truncate(len);
        }
        result
    }

    /// Left-folds the elements, seeding with the first one.
    ///
    /// Fails with `EmptySeq` if there are no elements.
    fn reduce<F>(&self, mut combine: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut acc = None;
        self.drive(&mut |v| {
            acc = Some(match acc.take() {
                Some(acc) => combine(acc, v),
                None => v,
            });
            true
        });
        non_empty(acc)
    }

    /// Like [`Seq::reduce`], but returns a halt as `ErrorKind::Halted`.
    fn try_reduce<F>(&self, combine: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        catch_halt(|| self.reduce(combine))?
    }

    /// Left-folds the elements onto `initial`. An empty sequence returns
    /// `initial` unchanged.
    fn fold<F>(&self, initial: Self::Item, combine: F) -> Self::Item
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        fold_with(self, initial, combine)
    }

    /// Like [`Seq::fold`], but returns a halt as `ErrorKind::Halted`.
    fn try_fold<F>(&self, initial: Self::Item, combine: F) -> Result<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        catch_halt(|| self.fold(initial, combine))
    }

    /// Returns the first element without pulling any further ones.
    fn first(&self) -> Result<Self::Item> {
        let mut first = None;
        self.drive(&mut |v| {
            first = Some(v);
            false
        });
        non_empty(first)
    }

    /// Like [`Seq::first`], but returns a halt as `ErrorKind::Halted`.
    fn try_first(&self) -> Result<Self::Item> {
        catch_halt(|| self.first())?
    }

    /// Returns the last element. Drives the whole sequence.
    fn last(&self) -> Result<Self::Item> {
        let mut last = None;
        self.drive(&mut |v| {
            last = Some(v);
            true
        });
        non_empty(last)
    }

    /// Like [`Seq::last`], but returns a halt as `ErrorKind::Halted`.
    fn try_last(&self) -> Result<Self::Item> {
        catch_halt(|| self.last())?
    }

    /// Returns `true` if some element satisfies `test`; stops at the first
    /// match.
    fn any<P>(&self, mut test: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut found = false;
        self.drive(&mut |v| {
            found = test(v);
            !found
        });
        found
    }

    /// Like [`Seq::any`], but returns a halt as `ErrorKind::Halted`.
    fn try_any<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Item) -> bool,
    {
        catch_halt(|| self.any(test))
    }

    /// Returns `true` if no element satisfies `test`.
    fn none<P>(&self, test: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        !self.any(test)
    }

    /// Like [`Seq::none`], but returns a halt as `ErrorKind::Halted`.
    fn try_none<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Item) -> bool,
    {
        catch_halt(|| self.none(test))
    }

    /// Returns `true` if every element satisfies `test`; stops at the first
    /// failure.
    fn every<P>(&self, mut test: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut all = true;
        self.drive(&mut |v| {
            all = test(v);
            all
        });
        all
    }

    /// Like [`Seq::every`], but returns a halt as `ErrorKind::Halted`.
    fn try_every<P>(&self, test: P) -> Result<bool>
    where
        P: FnMut(Self::Item) -> bool,
    {
        catch_halt(|| self.every(test))
    }
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(Self::Item) -> bool + ?Sized,
    {
        (**self).drive(sink)
    }
}

/// Folds `seq` into an accumulator of any type.
pub(crate) fn fold_with<S, A, F>(seq: &S, initial: A, mut combine: F) -> A
where
    S: Seq + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = Some(initial);
    seq.drive(&mut |v| {
        acc = acc.take().map(|acc| combine(acc, v));
        true
    });
    match acc {
        Some(acc) => acc,
        None => unreachable!("fold accumulator is restored after every element"),
    }
}

/// Object-safe face of [`Seq`], used by [`BoxedSeq`].
pub trait DynSeq<V> {
    fn drive_dyn(&self, sink: &mut dyn FnMut(V) -> bool);
}

impl<S> DynSeq<S::Item> for S
where
    S: Seq,
{
    fn drive_dyn(&self, sink: &mut dyn FnMut(S::Item) -> bool) {
        self.drive(sink)
    }
}

/// A type-erased sequence, created by [`Seq::boxed`].
pub struct BoxedSeq<'a, V>(Box<dyn DynSeq<V> + 'a>);

impl<V> Seq for BoxedSeq<'_, V> {
    type Item = V;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(V) -> bool + ?Sized,
    {
        self.0.drive_dyn(&mut |v| sink(v))
    }
}
