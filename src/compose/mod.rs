//! Lazy combinators over traversals and sequences.
//!
//! The structs in this module wrap a live [`Pull`](crate::Pull) and step it only
//! when they are stepped themselves. The free functions accept anything that
//! converts into a [`Seq`] and return a new sequence without traversing it.

mod concat;
mod filter;
mod limit;
mod map;

pub use concat::{concat, Concat};
pub use filter::{filter, Filter};
pub use limit::{skip, take, Skip, Take};
pub use map::{map, Map};
