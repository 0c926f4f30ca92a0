//! Core definitions shared by all lazyseq crates: the error type and the `Result` alias.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind, StdErrorBoxed};
pub use result::Result;
