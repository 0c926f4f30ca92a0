//! Sequences of comparable values.

use lazyseq_common::Result;
use lazyseq_common::result::non_empty;

use crate::halt::catch_halt;
use crate::seq::Seq;

/// Adds [`max`](OrdSeq::max) and [`min`](OrdSeq::min) to a sequence of
/// `PartialOrd` values. Created by [`Seq::ord`].
///
/// `OrdSeq` is itself a [`Seq`], so further stages can follow; call
/// [`Seq::ord`] again to get the extremes of the result.
#[derive(Clone)]
pub struct OrdSeq<S> {
    inner: S,
}

impl<S> OrdSeq<S>
where
    S: Seq,
    S::Item: PartialOrd,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// The greatest element. When several elements compare equal, the first
    /// of them wins.
    pub fn max(&self) -> Result<S::Item> {
        extreme_by(&self.inner, |candidate, best| candidate > best)
    }

    /// Like [`OrdSeq::max`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_max(&self) -> Result<S::Item> {
        catch_halt(|| self.max())?
    }

    /// The least element. When several elements compare equal, the first of
    /// them wins.
    pub fn min(&self) -> Result<S::Item> {
        extreme_by(&self.inner, |candidate, best| candidate < best)
    }

    /// Like [`OrdSeq::min`], but returns a halt as `ErrorKind::Halted`.
    pub fn try_min(&self) -> Result<S::Item> {
        catch_halt(|| self.min())?
    }
}

impl<S> Seq for OrdSeq<S>
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

/// Keeps the first element for which no later one `replaces` it.
pub(crate) fn extreme_by<S, F>(seq: &S, mut replaces: F) -> Result<S::Item>
where
    S: Seq + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut best: Option<S::Item> = None;
    seq.drive(&mut |v| {
        let keep = match &best {
            Some(current) => !replaces(&v, current),
            None => false,
        };
        if !keep {
            best = Some(v);
        }
        true
    });
    non_empty(best)
}
