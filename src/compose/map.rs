//! Transforming yielded items.

use std::marker::PhantomData;

use crate::{adapter::IntoSeq, pull::Pull, seq::Seq, step::Step};

/// Transforms each item yielded by the wrapped traversal.
///
/// The function runs once per item, at the moment that item is pulled.
pub struct Map<P, F, T> {
    pull: P,
    f: F,
    _phantom: PhantomData<fn(T)>,
}

impl<P, F, T> Map<P, F, T> {
    pub fn new(pull: P, f: F) -> Self {
        Self {
            pull,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<T, U, P, F> Pull<U> for Map<P, F, T>
where
    P: Pull<T>,
    F: FnMut(T) -> U,
{
    fn next(&mut self) -> Step<U> {
        match self.pull.next() {
            Step::Yielded(item) => Step::Yielded((self.f)(item)),
            Step::End => Step::End,
        }
    }
}

/// Create a sequence that applies `f` to every item of `src`.
///
/// # Examples
///
/// ```
/// use lazyseq::{array, map};
///
/// assert_eq!(array(map(vec![1, 2, 3], |x: i32| x * 10)), vec![10, 20, 30]);
/// ```
pub fn map<T, U, S, F>(src: S, f: F) -> Seq<U>
where
    T: 'static,
    U: 'static,
    S: IntoSeq<T>,
    F: Fn(T) -> U + 'static,
{
    src.into_seq().map(f)
}
