//! Core trait for pull-driven traversals.
//!
//! This module defines the [`Pull`] trait, the contract every sequence reduces to.
//! A [`Pull`] is the live state of one traversal: each call to [`Pull::next`]
//! either yields the next item or reports [`Step::End`].
//!
//! # The Pull Trait
//!
//! [`Pull<T>`] represents a traversal that:
//! - Yields items of type `T` one at a time, on demand
//! - Eventually reports `End` (or never does, for infinite sources)
//! - Keeps reporting `End` once it has done so
//!
//! The last rule is not enforced by the trait itself. Sources written by callers
//! are wrapped in [`Fuse`] before the engine sees them.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::{from_fn, Pull, Step};
//!
//! let mut n = 0;
//! let mut counter = from_fn(move || {
//!     n += 1;
//!     if n <= 2 { Step::Yielded(n) } else { Step::End }
//! })
//! .map(|x: i32| x * 10);
//!
//! assert_eq!(counter.next(), Step::Yielded(10));
//! assert_eq!(counter.next(), Step::Yielded(20));
//! assert_eq!(counter.next(), Step::End);
//! ```

use crate::{
    compose::{Concat, Filter, Map, Skip, Take},
    step::Step,
};

/// Boxed traversal, the erased form every sequence hands out.
pub type BoxPull<T> = Box<dyn Pull<T>>;

/// Live state of a single traversal.
///
/// Each call to `next()` either yields the next item or reports the end of the
/// traversal. Combinator methods wrap the traversal without stepping it.
pub trait Pull<T> {
    /// Produce the next item, or `End` once the traversal is exhausted.
    fn next(&mut self) -> Step<T>;

    /// Erase the concrete traversal type.
    fn boxed(self) -> BoxPull<T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Guarantee that nothing is pulled from this traversal after its first `End`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Transform each yielded item.
    fn map<U, F>(self, f: F) -> Map<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> U,
    {
        Map::new(self, f)
    }

    /// Keep only the items satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yield everything from this traversal, then everything from `tail`.
    fn concat<R>(self, tail: R) -> Concat<Self, R>
    where
        Self: Sized,
        R: Pull<T>,
    {
        Concat::new(self, tail)
    }

    /// Discard the first `n` items.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yield at most `n` items.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }
}

/// A traversal that reports `End` forever once its inner traversal has ended.
///
/// The inner traversal is dropped at its first `End`, so a step function that
/// would misbehave afterwards is never called again.
pub struct Fuse<P> {
    inner: Option<P>,
}

impl<P> Fuse<P> {
    pub fn new(inner: P) -> Self {
        Self { inner: Some(inner) }
    }

    /// Returns `true` once the inner traversal has reported `End`.
    pub fn is_done(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T, P> Pull<T> for Fuse<P>
where
    P: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        match self.inner {
            Some(ref mut inner) => match inner.next() {
                Step::Yielded(item) => Step::Yielded(item),
                Step::End => {
                    self.inner = None;
                    Step::End
                }
            },
            None => Step::End,
        }
    }
}

/// A traversal backed by a closure.
pub struct FromFn<F>(F);

/// Create a traversal from a step function.
///
/// ```rust
/// use lazyseq::{from_fn, Pull, Step};
///
/// let mut once = Some("only");
/// let mut pull = from_fn(move || Step::from(once.take()));
/// assert_eq!(pull.next(), Step::Yielded("only"));
/// assert_eq!(pull.next(), Step::End);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(f)
}

impl<T, F> Pull<T> for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    fn next(&mut self) -> Step<T> {
        (self.0)()
    }
}

impl<T, P> Pull<T> for Box<P>
where
    P: Pull<T> + ?Sized,
{
    fn next(&mut self) -> Step<T> {
        (**self).next()
    }
}

impl<T, P> Pull<T> for &'_ mut P
where
    P: Pull<T> + ?Sized,
{
    fn next(&mut self) -> Step<T> {
        (**self).next()
    }
}

impl<T, P> Pull<T> for Option<P>
where
    P: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        match self {
            Some(p) => p.next(),
            None => Step::End,
        }
    }
}

impl<T, L, R> Pull<T> for either::Either<L, R>
where
    L: Pull<T>,
    R: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn misbehaving() -> impl Pull<i32> {
        let mut calls = 0;
        from_fn(move || {
            calls += 1;
            match calls {
                1 => Step::Yielded(1),
                2 => Step::End,
                _ => Step::Yielded(99),
            }
        })
    }

    #[test]
    fn test_fuse_hides_items_after_end() {
        let mut pull = misbehaving().fuse();
        assert_eq!(pull.next(), Step::Yielded(1));
        assert_eq!(pull.next(), Step::End);
        assert!(pull.is_done());
        assert_eq!(pull.next(), Step::End);
        assert_eq!(pull.next(), Step::End);
    }

    #[test]
    fn test_unfused_source_is_observable() {
        let mut pull = misbehaving();
        pull.next();
        pull.next();
        assert_eq!(pull.next(), Step::Yielded(99));
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let mut left: either::Either<_, FromFn<fn() -> Step<i32>>> =
            either::Either::Left(from_fn(|| Step::Yielded(1)));
        let mut right: either::Either<FromFn<fn() -> Step<i32>>, _> =
            either::Either::Right(from_fn(|| Step::Yielded(2)));

        assert_eq!(Pull::next(&mut left), Step::Yielded(1));
        assert_eq!(Pull::next(&mut right), Step::Yielded(2));
    }

    #[test]
    fn test_none_is_an_ended_traversal() {
        let mut none: Option<FromFn<fn() -> Step<i32>>> = None;
        assert_eq!(none.next(), Step::End);
    }

    #[test]
    fn test_boxed_and_mut_ref_forward() {
        let mut boxed = from_fn(|| Step::Yielded(7)).boxed();
        assert_eq!(boxed.next(), Step::Yielded(7));

        let mut inner = from_fn(|| Step::Yielded(8));
        let mut by_ref = &mut inner;
        assert_eq!(Pull::next(&mut by_ref), Step::Yielded(8));
    }
}
