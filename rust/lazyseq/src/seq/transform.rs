//! Stages that transform elements: [`Map`], [`FilterMap`], [`Expand`] and
//! [`Indexed`].
//!
//! The adapters themselves are not type-preserving; [`Seq::map`] pins the
//! output type to the input type, while [`Mapper`](crate::mapping::Mapper)
//! drives the same adapters with a different output type.

use crate::seq::Seq;
use crate::seq2::Seq2;

/// Applies a function to each element as it is pulled.
///
/// Created by [`Seq::map`] and [`Mapper::map`](crate::mapping::Mapper::map).
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

impl<S, F, O> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> O,
{
    type Item = O;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(O) -> bool + ?Sized,
    {
        self.inner.drive(&mut |v: S::Item| sink((self.f)(v)));
    }
}

/// Maps each element to an `Option`, forwarding only the `Some` values.
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

impl<S, F, O> Seq for FilterMap<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> Option<O>,
{
    type Item = O;

    #[inline]
    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(O) -> bool + ?Sized,
    {
        self.inner.drive(&mut |v: S::Item| match (self.f)(v) {
            Some(mapped) => sink(mapped),
            None => true,
        });
    }
}

/// Flattens the sub-sequence produced for each upstream element.
///
/// Each sub-sequence is driven to completion before the next upstream element
/// is pulled. A stop from downstream ends both the sub-sequence and the
/// upstream traversal.
#[derive(Clone)]
pub struct Expand<S, F> {
    inner: S,
    f: F,
}

impl<S, F> Expand<S, F> {
    pub fn new(inner: S, f: F) -> Self {
        Self { inner, f }
    }
}

impl<S, F, T> Seq for Expand<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> T,
    T: Seq,
{
    type Item = T::Item;

    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(T::Item) -> bool + ?Sized,
    {
        self.inner.drive(&mut |v: S::Item| {
            let mut more = true;
            (self.f)(v).drive(&mut |e: T::Item| {
                more = sink(e);
                more
            });
            more
        });
    }
}

/// Pairs each element with its position, starting at 0.
#[derive(Clone)]
pub struct Indexed<S> {
    inner: S,
}

impl<S> Indexed<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> Seq2 for Indexed<S>
where
    S: Seq,
{
    type Key = usize;
    type Value = S::Item;

    fn drive<G>(&self, sink: &mut G)
    where
        G: FnMut(usize, S::Item) -> bool + ?Sized,
    {
        let mut index = 0;
        self.inner.drive(&mut |v: S::Item| {
            let more = sink(index, v);
            index += 1;
            more
        });
    }
}
