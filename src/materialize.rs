//! Functions for driving sequences to completion.
//!
//! Materializers are the only place a sequence is actually consumed. Each one
//! starts a fresh traversal, steps it until `End` or until the answer is known,
//! and returns a concrete value. Every materializer exists both as a method on
//! [`Seq`] and as a free function accepting anything that converts into one.

use std::ops::ControlFlow;

use tracing::debug;

use crate::{
    adapter::IntoSeq,
    error::{Result, SeqError},
    seq::Seq,
    step::Step,
};

impl<T: 'static> Seq<T> {
    /// Collect every item, in order.
    ///
    /// There is no cap: on an infinite sequence this never returns.
    pub fn array(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len_hint().unwrap_or(0));
        let mut pull = self.pull();
        while let Step::Yielded(item) = pull.next() {
            items.push(item);
        }
        items
    }

    /// Number of items.
    ///
    /// Answered without traversing when the sequence knows its length,
    /// otherwise by a single counting pass.
    pub fn count(&self) -> usize {
        if let Some(len) = self.len_hint() {
            return len;
        }
        let mut count = 0_usize;
        self.drive(|_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    /// Alias for [`Seq::count`].
    pub fn length(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the sequence has no items. Steps at most once.
    pub fn is_empty(&self) -> bool {
        match self.len_hint() {
            Some(len) => len == 0,
            None => self.pull().next().is_end(),
        }
    }

    /// The item at zero-based position `index`.
    ///
    /// Steps the sequence exactly `index + 1` times.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::IndexOutOfRange`] if the sequence ends first; `len`
    /// is the number of items it actually had.
    ///
    /// ```
    /// use lazyseq::{Seq, SeqError};
    ///
    /// assert_eq!(Seq::range(1, 3).item_at_index(1), Ok(2));
    /// assert_eq!(
    ///     Seq::range(1, 3).item_at_index(5),
    ///     Err(SeqError::IndexOutOfRange { index: 5, len: 3 })
    /// );
    /// ```
    pub fn item_at_index(&self, index: usize) -> Result<T> {
        let mut pull = self.pull();
        let mut seen = 0_usize;
        loop {
            match pull.next() {
                Step::Yielded(item) if seen == index => return Ok(item),
                Step::Yielded(_) => seen += 1,
                Step::End => {
                    debug!(index, len = seen, "item_at_index past the end");
                    return Err(SeqError::IndexOutOfRange { index, len: seen });
                }
            }
        }
    }

    /// Call `action` once per item, in order.
    pub fn each<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        self.drive(|item| {
            action(item);
            ControlFlow::Continue(())
        });
    }

    /// Returns `true` if every item satisfies `predicate`.
    ///
    /// Stops at the first item that fails. Vacuously `true` when empty.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        let mut result = true;
        self.drive(|item| {
            if predicate(item) {
                ControlFlow::Continue(())
            } else {
                result = false;
                ControlFlow::Break(())
            }
        });
        result
    }

    /// Returns `true` if some item satisfies `predicate`.
    ///
    /// Stops at the first item that passes. Vacuously `false` when empty.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        let mut result = false;
        self.drive(|item| {
            if predicate(item) {
                result = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        result
    }

    /// Left fold: `f(f(f(seed, a), b), c)`. Returns `seed` when empty.
    ///
    /// Push sources are buffered first, like any other pulled traversal.
    pub fn reduce<A, F>(&self, mut f: F, seed: A) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = seed;
        let mut pull = self.pull();
        while let Step::Yielded(item) = pull.next() {
            acc = f(acc, item);
        }
        acc
    }
}

/// Collect every item of `src`, in order.
pub fn array<T: 'static, S: IntoSeq<T>>(src: S) -> Vec<T> {
    src.into_seq().array()
}

/// Number of items in `src`.
pub fn count<T: 'static, S: IntoSeq<T>>(src: S) -> usize {
    src.into_seq().count()
}

/// Alias for [`count`].
pub fn length<T: 'static, S: IntoSeq<T>>(src: S) -> usize {
    src.into_seq().length()
}

/// The item at zero-based position `index` of `src`.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] if `src` has `index` items or fewer.
pub fn item_at_index<T: 'static, S: IntoSeq<T>>(src: S, index: usize) -> Result<T> {
    src.into_seq().item_at_index(index)
}

/// Call `action` once per item of `src`, in order.
pub fn each<T, S, F>(src: S, action: F)
where
    T: 'static,
    S: IntoSeq<T>,
    F: FnMut(T),
{
    src.into_seq().each(action)
}

/// Returns `true` if every item of `src` satisfies `predicate`.
pub fn all<T, S, F>(src: S, predicate: F) -> bool
where
    T: 'static,
    S: IntoSeq<T>,
    F: FnMut(T) -> bool,
{
    src.into_seq().all(predicate)
}

/// Returns `true` if some item of `src` satisfies `predicate`.
pub fn any<T, S, F>(src: S, predicate: F) -> bool
where
    T: 'static,
    S: IntoSeq<T>,
    F: FnMut(T) -> bool,
{
    src.into_seq().any(predicate)
}

/// Left fold of `src` starting from `seed`.
///
/// ```
/// use lazyseq::reduce;
///
/// assert_eq!(reduce(vec![1, 2, 3], |acc: i32, x: i32| acc + x, 0), 6);
/// ```
pub fn reduce<T, S, A, F>(src: S, f: F, seed: A) -> A
where
    T: 'static,
    S: IntoSeq<T>,
    F: FnMut(A, T) -> A,
{
    src.into_seq().reduce(f, seed)
}
