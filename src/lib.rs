//! # LazySeq: Composable Lazy Sequences
//!
//! Describe ordered streams of items once, transform them without touching a
//! single item, and pay for the work only when a result is demanded.
//!
//! ## Core Types
//!
//! - **[`Seq<T>`]**: Opaque, re-traversable handle over a lazy sequence
//! - **[`Pull<T>`]**: Live state of one traversal, stepped with `next()`
//! - **[`Step<T>`]**: Outcome of a single step, `Yielded(item)` or `End`
//!
//! ## Key Features
//!
//! - **Lazy**: Combinators build new sequences without traversing anything
//! - **Re-traversable**: Every traversal starts fresh from the source
//! - **Short-circuiting**: `take`, `all`, `any` and `item_at_index` stop pulling
//!   as soon as the answer is known
//! - **Push or pull**: Sources can be step functions or drivers that call back
//!   once per item
//!
//! ## Example
//!
//! ```
//! use lazyseq::*;
//!
//! let evens = Seq::range(1, 10).filter(|x| x % 2 == 0);
//! let shifted = concat(&evens, vec![100, 200]).map(|x| x + 1);
//!
//! assert_eq!(shifted.array(), vec![3, 5, 7, 9, 11, 101, 201]);
//! assert_eq!(count(&shifted), 7);
//! assert!(any(&shifted, |x| x > 150));
//! assert_eq!(item_at_index(take(&shifted, 2), 1), Ok(5));
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`Seq::range(start, end)`](Seq::range) - Inclusive integer range
//! - [`Seq::from_pull(init)`](Seq::from_pull) - Initializer plus step function
//! - [`Seq::from_push(driver)`](Seq::from_push) - Driver calling an action per item
//! - [`seq(value)`](seq) - Convert collections, options and scalars
//!
//! **Combinators:**
//! - [`map`], [`filter`], [`concat`], [`skip`], [`take`]
//!
//! **Materializers:**
//! - [`array`], [`count`], [`length`], [`item_at_index`]
//! - [`each`], [`all`], [`any`], [`reduce`]

mod adapter;
mod bridge;
mod build;
mod compose;
mod config;
mod error;
mod iter;
mod materialize;
mod pull;
mod seq;
mod step;

pub mod prelude;

pub use adapter::{seq, IntoSeq, Just};
pub use compose::{concat, filter, map, skip, take, Concat, Filter, Map, Skip, Take};
pub use config::{BridgeConfig, ConfigError};
pub use error::SeqError;
pub use iter::SeqIter;
pub use materialize::{all, any, array, count, each, item_at_index, length, reduce};
pub use pull::{from_fn, BoxPull, FromFn, Fuse, Pull};
pub use seq::{Driver, SendDriver, Seq};
pub use step::Step;
