//! Prefix-free, lexicographically ordered integer sequences.
//!
//! For a fixed even base >= 4, [`Sequencer`] enumerates nonnegative
//! integers whose base renderings sort lexicographically in the same
//! order as their numeric values, with no rendering a prefix of
//! another. The n-th member has O(log n) digits, so the sequence
//! yields slowly growing, sortable identifiers (version tags, list
//! positions, composite sort keys) without fixed-width padding.
//!
//! ## Crate layout
//! - `base`: the validated [`Base`] configuration newtype.
//! - `tier`: digit-length tier bounds, the partitioning arithmetic.
//! - `sequence`: the [`Sequencer`] operations and member iterator.
//! - `error`: [`SequenceError`].
//!
//! The engine only produces and consumes integers; rendering members
//! as strings is the job of a digit codec such as `lexseq-codec`.

mod base;
mod error;
mod sequence;
mod tier;


pub use base::Base;
pub use error::SequenceError;
pub use sequence::{Members, Sequencer};
