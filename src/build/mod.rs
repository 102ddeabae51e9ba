//! Building traversals from scratch
//!
//! This module provides the constant sources every sequence constructor in
//! [`Seq`](crate::Seq) bottoms out in.

mod constant;
mod cursor;

pub use constant::{Empty, Range};
pub use cursor::Cursor;
