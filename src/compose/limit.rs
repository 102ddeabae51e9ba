//! Positional limits: [`Skip`] and [`Take`].

use crate::{adapter::IntoSeq, pull::Pull, seq::Seq, step::Step};

/// Discards the first `n` items of the wrapped traversal.
///
/// The discarding happens on the first step and stops early, without error,
/// if the inner traversal ends first.
pub struct Skip<P> {
    pull: P,
    remaining: usize,
}

impl<P> Skip<P> {
    pub fn new(pull: P, n: usize) -> Self {
        Self { pull, remaining: n }
    }
}

impl<T, P> Pull<T> for Skip<P>
where
    P: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.pull.next().is_end() {
                self.remaining = 0;
                return Step::End;
            }
        }
        self.pull.next()
    }
}

/// Yields at most `n` items of the wrapped traversal.
///
/// The inner traversal is never stepped past its `n`th item.
pub struct Take<P> {
    pull: P,
    remaining: usize,
}

impl<P> Take<P> {
    pub fn new(pull: P, n: usize) -> Self {
        Self { pull, remaining: n }
    }
}

impl<T, P> Pull<T> for Take<P>
where
    P: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        if self.remaining == 0 {
            return Step::End;
        }
        match self.pull.next() {
            Step::Yielded(item) => {
                self.remaining -= 1;
                Step::Yielded(item)
            }
            Step::End => {
                self.remaining = 0;
                Step::End
            }
        }
    }
}

/// Create a sequence without the first `n` items of `src`.
///
/// # Examples
///
/// ```
/// use lazyseq::{array, skip, Seq};
///
/// assert_eq!(array(skip(Seq::range(1, 5), 3)), vec![4, 5]);
/// assert!(array(skip(Seq::range(1, 5), 10)).is_empty());
/// ```
pub fn skip<T, S>(src: S, n: usize) -> Seq<T>
where
    T: 'static,
    S: IntoSeq<T>,
{
    src.into_seq().skip(n)
}

/// Create a sequence of at most the first `n` items of `src`.
///
/// # Examples
///
/// ```
/// use lazyseq::{array, take, Seq, Step};
///
/// let naturals = Seq::from_pull(|| {
///     let mut n = 0_u64;
///     move || {
///         n += 1;
///         Step::Yielded(n)
///     }
/// });
/// assert_eq!(array(take(naturals, 3)), vec![1, 2, 3]);
/// ```
pub fn take<T, S>(src: S, n: usize) -> Seq<T>
where
    T: 'static,
    S: IntoSeq<T>,
{
    src.into_seq().take(n)
}
