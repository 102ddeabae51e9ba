//! Iterator adapter for sequences.
//!
//! [`SeqIter`] runs one traversal of a [`Seq`] as a standard [`Iterator`], so
//! sequences plug into `for` loops and the rest of the iterator ecosystem.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::Seq;
//!
//! let seq = Seq::range(1, 4);
//! let mut total = 0;
//! for x in &seq {
//!     total += x;
//! }
//! assert_eq!(total, 10);
//!
//! let doubled: Vec<i64> = seq.iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//! ```

use std::iter::FusedIterator;

use crate::{
    pull::{BoxPull, Fuse, Pull},
    seq::Seq,
    step::Step,
};

/// Iterator over one traversal of a [`Seq`].
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so a traversal can
/// be consumed in pieces.
pub struct SeqIter<T> {
    pull: Fuse<BoxPull<T>>,
    hint: Option<usize>,
}

impl<T> SeqIter<T> {
    /// Wrap a running traversal.
    pub fn new(pull: BoxPull<T>) -> Self {
        Self {
            pull: Fuse::new(pull),
            hint: None,
        }
    }

    /// Check if the traversal has ended.
    pub fn is_done(&self) -> bool {
        self.pull.is_done()
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match Pull::next(&mut self.pull) {
            Step::Yielded(item) => {
                self.hint = self.hint.map(|n| n.saturating_sub(1));
                Some(item)
            }
            Step::End => {
                self.hint = Some(0);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.hint {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<T> FusedIterator for SeqIter<T> {}

impl<T: 'static> Seq<T> {
    /// Start a traversal as an [`Iterator`].
    pub fn iter(&self) -> SeqIter<T> {
        SeqIter {
            hint: self.len_hint(),
            ..SeqIter::new(self.pull())
        }
    }
}

impl<T: 'static> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = SeqIter<T>;

    fn into_iter(self) -> SeqIter<T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_yields_in_order() {
        let mut iter = Seq::range(1, 2).iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert!(iter.is_done());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_in_pieces_with_mut_ref() {
        let mut iter = Seq::range(1, 6).iter();
        let head: Vec<_> = (&mut iter).take(2).collect();
        assert_eq!(head, vec![1, 2]);
        let rest: Vec<_> = iter.collect();
        assert_eq!(rest, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_size_hint_tracks_known_length() {
        let mut iter = Seq::range(1, 3).iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));

        let filtered = Seq::range(1, 3).filter(|x| *x > 1);
        assert_eq!(filtered.iter().size_hint(), (0, None));
    }

    #[test]
    fn test_for_loop_over_push_source() {
        let seq = Seq::from_push(|action| {
            action("a");
            action("b");
        });
        let mut seen = Vec::new();
        for item in seq {
            seen.push(item);
        }
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn test_each_iterator_is_a_new_traversal() {
        let seq = Seq::range(1, 3);
        let first: Vec<_> = seq.iter().collect();
        let second: Vec<_> = (&seq).into_iter().collect();
        assert_eq!(first, second);
    }
}
