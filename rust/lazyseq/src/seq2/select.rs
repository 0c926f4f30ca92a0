//! Stages that select a subset of pairs without changing them.

use crate::seq2::Seq2;

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

impl<S, P> Seq2 for Filter<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Key, S::Value) -> bool + ?Sized,
    {
        self.inner.drive(&mut |k: S::Key, v: S::Value| {
            if (self.predicate)(&k, &v) {
                sink(k, v)
            } else {
                true
            }
        });
    }
}

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

impl<S> Seq2 for Skip<S>
where
    S: Seq2,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Key, S::Value) -> bool + ?Sized,
    {
        let mut skipped = 0;
        self.inner.drive(&mut |k: S::Key, v: S::Value| {
            if skipped < self.count {
                skipped += 1;
                return true;
            }
            sink(k, v)
        });
    }
}

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

impl<S, P> Seq2 for SkipWhile<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Key, S::Value) -> bool + ?Sized,
    {
        let mut skipping = true;
        self.inner.drive(&mut |k: S::Key, v: S::Value| {
            if skipping {
                if (self.predicate)(&k, &v) {
                    return true;
                }
                skipping = false;
            }
            sink(k, v)
        });
    }
}

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

impl<S> Seq2 for Take<S>
where
    S: Seq2,
{
    type Key = S::Key;
    type Value = S::Value;

    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Key, S::Value) -> bool + ?Sized,
    {
        if self.count == 0 {
            return;
        }
        let mut taken = 0;
        self.inner.drive(&mut |k: S::Key, v: S::Value| {
            taken += 1;
            sink(k, v) && taken < self.count
        });
    }
}

/// Forwards pairs while the predicate holds; the first pair that fails it
/// ends the traversal.
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

impl<S, P> Seq2 for TakeWhile<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn drive<F>(&self, sink: &mut F)
    where
        F: FnMut(S::Key, S::Value) -> bool + ?Sized,
    {
        self.inner
            .drive(&mut |k: S::Key, v: S::Value| (self.predicate)(&k, &v) && sink(k, v));
    }
}
