//! Early termination of a traversal from inside a callback.
//!
//! A callback deep in a pipeline (a `map` body, a `filter` predicate, a
//! `for_each` closure) can abort the whole traversal by calling
//! [`halt_iteration`]. The traversal unwinds with a [`HaltIteration`] payload
//! that carries the application error past every intermediate stage.
//!
//! What happens next depends on the terminal operation:
//!
//! - Plain terminals (`collect_vec`, `reduce`, `first`, ...) do not catch
//!   anything; the unwind continues to their caller, which may recover it with
//!   [`std::panic::catch_unwind`] and downcast the payload to
//!   [`HaltIteration`].
//! - `try_` terminals (`try_collect_vec`, `try_reduce`, ...) catch a
//!   [`HaltIteration`] payload and return it as
//!   [`ErrorKind::Halted`](lazyseq_common::ErrorKind::Halted). A payload of any
//!   other type is re-raised untouched.
//!
//! The mechanism relies on unwinding; with `panic = "abort"` a halt aborts the
//! process.
//!
//! The first halt installs a panic hook that stays silent for
//! [`HaltIteration`] payloads and forwards every other panic to the hook that
//! was in place before it. A hook installed later with
//! [`std::panic::set_hook`] replaces this one, and halts are then reported
//! like any other panic.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use lazyseq_common::{Error, Result, StdErrorBoxed};
use thiserror::Error as ThisError;

/// The unwind payload raised by [`halt_iteration`].
#[derive(Debug, ThisError)]
#[error("error during iteration: {0}")]
pub struct HaltIteration(#[source] StdErrorBoxed);

impl HaltIteration {
    pub fn new(err: impl Into<StdErrorBoxed>) -> HaltIteration {
        HaltIteration(err.into())
    }

    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> StdErrorBoxed {
        self.0
    }

    /// Recovers the application error from a payload returned by
    /// [`std::panic::catch_unwind`]. Payloads of any other type are handed back.
    pub fn from_payload(
        payload: Box<dyn Any + Send + 'static>,
    ) -> std::result::Result<StdErrorBoxed, Box<dyn Any + Send + 'static>> {
        payload.downcast::<HaltIteration>().map(|halt| halt.0)
    }
}

/// Aborts the current traversal, delivering `err` to the nearest `try_`
/// terminal operation.
pub fn halt_iteration<E>(err: E) -> !
where
    E: Into<StdErrorBoxed>,
{
    let err = err.into();
    log::trace!("halting iteration: {err}");
    install_quiet_hook();
    panic::panic_any(HaltIteration(err))
}

static QUIET_HALTS: Once = Once::new();

/// Chains a panic hook that skips the report for halts.
fn install_quiet_hook() {
    QUIET_HALTS.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !is_halt_payload(info.payload()) {
                previous(info);
            }
        }));
    });
}

fn is_halt_payload(payload: &(dyn Any + Send)) -> bool {
    payload.is::<HaltIteration>()
}

/// Halts with `err` if there is one; `None` is a no-op.
#[inline]
pub fn halt_if<E>(err: Option<E>)
where
    E: Into<StdErrorBoxed>,
{
    if let Some(err) = err {
        halt_iteration(err);
    }
}

/// Unwraps `result`, halting the traversal on `Err`.
#[inline]
pub fn halt_on_error<T, E>(result: std::result::Result<T, E>) -> T
where
    E: Into<StdErrorBoxed>,
{
    match result {
        Ok(value) => value,
        Err(err) => halt_iteration(err),
    }
}

/// Extension for halting on `Err` in method-chain position.
///
/// ```
/// use lazyseq::{OrHalt, Seq, iter_slice};
///
/// let err = iter_slice(&["1", "two", "3"])
///     .map_to::<i32>()
///     .map(|s| s.parse::<i32>().or_halt())
///     .try_collect_vec()
///     .unwrap_err();
/// assert!(err.is_halted());
/// ```
pub trait OrHalt<T> {
    fn or_halt(self) -> T;
}

impl<T, E> OrHalt<T> for std::result::Result<T, E>
where
    E: Into<StdErrorBoxed>,
{
    #[inline]
    fn or_halt(self) -> T {
        halt_on_error(self)
    }
}

/// Runs `f`, converting a [`HaltIteration`] unwind into `Err`.
///
/// Any other unwind payload continues unwinding unchanged.
pub(crate) fn catch_halt<T>(f: impl FnOnce() -> T) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Ok(value),
        Err(payload) => match HaltIteration::from_payload(payload) {
            Ok(source) => {
                log::debug!("iteration halted: {source}");
                Err(Error::halted(source))
            }
            Err(payload) => {
                log::debug!("re-raising a foreign panic through a try_ guard");
                panic::resume_unwind(payload)
            }
        },
    }
}
