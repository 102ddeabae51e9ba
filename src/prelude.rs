//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{IntoSeq, Pull, Seq, SeqError, Step};

// Conversion
pub use crate::{seq, Just};

// Combinators
pub use crate::{concat, filter, map, skip, take};

// Materializers
pub use crate::{array, count, each, item_at_index, reduce};
