//! Lazy, composable sequence pipelines driven by push callbacks.
//!
//! A pipeline starts from a source, stacks lazy stages and ends with a
//! terminal operation that drives it:
//!
//! ```
//! use lazyseq::{Seq, iter_slice};
//!
//! let evens = iter_slice(&[1, 2, 3, 4, 5, 6])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10);
//! assert_eq!(evens.collect_vec(), vec![20, 40, 60]);
//! // Pipelines can be driven again; each traversal starts over.
//! assert_eq!(evens.first().unwrap(), 20);
//! ```
//!
//! # Key Types
//!
//! - [`Seq`] - single-value sequences and their stages and terminals
//! - [`Seq2`] - key/value sequences
//! - [`Mapper`] / [`KvMapper`] - stages that change the element types
//! - [`OrdSeq`] / [`NumSeq`] - extremes of ordered values, sums of numbers
//! - [`halt_iteration`] - aborts a traversal from inside a callback; the `try_`
//!   terminals turn the abort into an [`Error`]

pub mod halt;
pub mod mapping;
pub mod num_seq;
pub mod ord_seq;
pub mod seq;
pub mod seq2;
pub mod source;

pub use halt::{HaltIteration, OrHalt, halt_if, halt_iteration, halt_on_error};
pub use mapping::{Hops, Hops2, KvMapper, Mapper};
pub use num_seq::{NumSeq, RangeInterval, range, range_from, range_interval};
pub use ord_seq::OrdSeq;
pub use seq::{BoxedSeq, Seq};
pub use seq2::Seq2;
pub use source::{from_fn, from_fn2, generate, iter, iter_map, iter_pairs, iter_slice};

pub use lazyseq_common::{Error, ErrorKind, Result};
