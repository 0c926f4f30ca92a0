pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns the `EmptySeq` error when `value` is `None`.
///
/// Terminal operations that need at least one element use this to turn their
/// "nothing seen" state into a result.
#[inline]
pub fn non_empty<T>(value: Option<T>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => empty_seq(),
    }
}

#[cold]
pub fn empty_seq<T>() -> Result<T> {
    Err(crate::error::ErrorKind::EmptySeq.into())
}
