//! Converting values into sequences.
//!
//! [`IntoSeq`] is the single entry point every combinator and materializer goes
//! through for its receiver and for sequence-like arguments. It dispatches over
//! a closed set of shapes:
//!
//! - an existing [`Seq`] is returned as-is, the same handle
//! - ordered collections yield their elements in order, cloned per traversal
//! - external iterators go through [`Seq::from_iterator`] or [`Seq::from_iterable`]
//! - any other value becomes a single-item sequence; [`Just`] wraps arbitrary
//!   `Clone` values and the common scalar types convert directly
//!
//! Cloning is the duplicate capability: single values are duplicated for every
//! traversal. Values that cannot be cloned go through [`Seq::single_owned`].
//!
//! # Examples
//!
//! ```
//! use lazyseq::{seq, Just, Seq};
//!
//! let s = Seq::range(1, 3);
//! assert!(Seq::ptr_eq(&seq(&s), &s));
//!
//! assert_eq!(seq(vec![1, 2, 3]).array(), vec![1, 2, 3]);
//! assert_eq!(seq(42_u8).array(), vec![42]);
//! assert_eq!(seq(Just((1, "one"))).array(), vec![(1, "one")]);
//! ```

use std::{collections::VecDeque, rc::Rc};

use crate::seq::Seq;

/// Conversion into a [`Seq`].
pub trait IntoSeq<T> {
    fn into_seq(self) -> Seq<T>;
}

/// Convert any supported value into a sequence.
pub fn seq<T, S>(value: S) -> Seq<T>
where
    S: IntoSeq<T>,
{
    value.into_seq()
}

/// Marks an arbitrary value as a single item.
///
/// `Just(value)` converts into a sequence yielding a clone of `value` on every
/// traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Just<T>(pub T);

impl<T: 'static> IntoSeq<T> for Seq<T> {
    fn into_seq(self) -> Seq<T> {
        self
    }
}

impl<T: 'static> IntoSeq<T> for &Seq<T> {
    fn into_seq(self) -> Seq<T> {
        self.clone()
    }
}

impl<T: Clone + 'static> IntoSeq<T> for Just<T> {
    fn into_seq(self) -> Seq<T> {
        Seq::single(self.0)
    }
}

impl<T: Clone + 'static> IntoSeq<T> for Vec<T> {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(Rc::from(self))
    }
}

impl<T: Clone + 'static, const N: usize> IntoSeq<T> for [T; N] {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(Rc::from(self))
    }
}

impl<T: Clone + 'static> IntoSeq<T> for &[T] {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(Rc::from(self))
    }
}

impl<T: Clone + 'static> IntoSeq<T> for Box<[T]> {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(Rc::from(self))
    }
}

impl<T: Clone + 'static> IntoSeq<T> for Rc<[T]> {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(self)
    }
}

impl<T: Clone + 'static> IntoSeq<T> for VecDeque<T> {
    fn into_seq(self) -> Seq<T> {
        Seq::from_items(self.into_iter().collect())
    }
}

impl<T: Clone + 'static> IntoSeq<T> for Option<T> {
    fn into_seq(self) -> Seq<T> {
        match self {
            Some(value) => Seq::single(value),
            None => Seq::empty(),
        }
    }
}

macro_rules! single_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoSeq<$ty> for $ty {
                fn into_seq(self) -> Seq<$ty> {
                    Seq::single(self)
                }
            }
        )*
    };
}

single_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &'static str,
);

impl<T: Clone + 'static> FromIterator<T> for Seq<T> {
    /// Collects eagerly into a collection-backed sequence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::from_items(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn test_sequence_is_identity() {
        let s = Seq::range(1, 3);
        assert!(Seq::ptr_eq(&seq(s.clone()), &s));
        assert!(Seq::ptr_eq(&seq(&s), &s));
    }

    #[test]
    fn test_collections_keep_order_and_length() {
        let from_vec = seq(vec!['x', 'y']);
        assert_eq!(from_vec.array(), vec!['x', 'y']);
        assert_eq!(from_vec.len_hint(), Some(2));

        assert_eq!(seq([3, 2, 1]).array(), vec![3, 2, 1]);
        assert_eq!(seq(&[1, 2][..]).array(), vec![1, 2]);
        assert_eq!(seq(VecDeque::from(vec![5, 6])).array(), vec![5, 6]);
        assert_eq!(seq(vec![1, 2].into_boxed_slice()).array(), vec![1, 2]);
    }

    #[test]
    fn test_collections_are_copied_on_adapt() {
        let mut source = vec![String::from("a")];
        let s = seq(source.clone());
        source.push(String::from("b"));
        assert_eq!(s.array(), vec![String::from("a")]);
    }

    #[test]
    fn test_option_is_zero_or_one_item() {
        assert_eq!(seq(Some(4)).array(), vec![4]);
        assert!(seq(None::<i32>).array().is_empty());
    }

    #[test]
    fn test_scalars_become_single_items() {
        assert_eq!(seq(7_i64).array(), vec![7]);
        assert_eq!(seq(true).array(), vec![true]);
        assert_eq!(seq("text").array(), vec!["text"]);
        assert_eq!(seq(String::from("owned")).count(), 1);
    }

    #[test]
    fn test_single_values_are_duplicated_per_traversal() {
        let s = seq(Just(vec![1, 2]));
        assert_eq!(s.array(), vec![vec![1, 2]]);
        assert_eq!(s.array(), vec![vec![1, 2]]);
    }

    #[test]
    fn test_non_duplicable_value_is_passed_through_once() {
        struct Handle(&'static str);
        let s = Seq::single_owned(Handle("h"));
        let mut pull = s.pull();
        assert!(matches!(pull.next(), Step::Yielded(Handle("h"))));
        assert!(pull.next().is_end());
        assert!(s.pull().next().is_end());
    }

    #[test]
    fn test_from_iterator_collects() {
        let s: Seq<u32> = (1..=3).collect();
        assert_eq!(s.array(), vec![1, 2, 3]);
        assert_eq!(s.len_hint(), Some(3));
    }
}
