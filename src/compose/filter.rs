//! Dropping items that fail a predicate.

use crate::{adapter::IntoSeq, pull::Pull, seq::Seq, step::Step};

/// Yields only the items of the wrapped traversal that satisfy a predicate.
///
/// One step of a `Filter` may step the inner traversal many times. The
/// predicate sees every inner item at most once.
pub struct Filter<P, F> {
    pull: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(pull: P, predicate: F) -> Self {
        Self { pull, predicate }
    }
}

impl<T, P, F> Pull<T> for Filter<P, F>
where
    P: Pull<T>,
    F: FnMut(&T) -> bool,
{
    fn next(&mut self) -> Step<T> {
        loop {
            match self.pull.next() {
                Step::Yielded(item) if (self.predicate)(&item) => return Step::Yielded(item),
                Step::Yielded(_) => continue,
                Step::End => return Step::End,
            }
        }
    }
}

/// Create a sequence holding the items of `src` that satisfy `predicate`.
///
/// # Examples
///
/// ```
/// use lazyseq::{array, filter, Seq};
///
/// let evens = filter(Seq::range(1, 10), |x: &i64| x % 2 == 0);
/// assert_eq!(array(evens), vec![2, 4, 6, 8, 10]);
/// ```
pub fn filter<T, S, F>(src: S, predicate: F) -> Seq<T>
where
    T: 'static,
    S: IntoSeq<T>,
    F: Fn(&T) -> bool + 'static,
{
    src.into_seq().filter(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_filter_evaluates_predicate_once_per_item() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seq = filter(Seq::range(1, 6), {
            let seen = Rc::clone(&seen);
            move |x: &i64| {
                seen.borrow_mut().push(*x);
                x % 3 == 0
            }
        });

        assert_eq!(seq.array(), vec![3, 6]);
        assert_eq!(&*seen.borrow(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_stops_stepping_at_first_match() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seq = filter(Seq::range(1, 1_000), {
            let seen = Rc::clone(&seen);
            move |x: &i64| {
                seen.borrow_mut().push(*x);
                *x > 2
            }
        });

        let mut pull = seq.pull();
        assert_eq!(pull.next(), Step::Yielded(3));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let seq = filter(vec![1, 3, 5], |x: &i32| x % 2 == 0);
        assert!(seq.array().is_empty());
        assert_eq!(seq.len_hint(), None);
    }
}
