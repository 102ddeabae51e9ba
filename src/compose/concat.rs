use crate::{adapter::IntoSeq, pull::Pull, seq::Seq, step::Step};

/// Concatenates two traversals.
///
/// Created via [`Pull::concat`] or [`concat`]. The head is dropped from memory
/// once it reports `End`, and the tail is not stepped before that.
pub struct Concat<A, B> {
    head: Option<A>,
    tail: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(head: A, tail: B) -> Self {
        Self {
            head: Some(head),
            tail,
        }
    }
}

impl<T, A, B> Pull<T> for Concat<A, B>
where
    A: Pull<T>,
    B: Pull<T>,
{
    fn next(&mut self) -> Step<T> {
        match self.head {
            Some(ref mut head) => match head.next() {
                Step::Yielded(item) => Step::Yielded(item),
                Step::End => {
                    self.head = None; // the head is finished for good
                    self.tail.next()
                }
            },
            None => self.tail.next(),
        }
    }
}

/// Create a sequence yielding every item of `head`, then every item of `tail`.
///
/// `tail` goes through the same conversion as `head`, so it can be a
/// collection, a single value or another sequence.
///
/// # Examples
///
/// ```
/// use lazyseq::{array, concat, Seq};
///
/// let joined = concat(Seq::range(1, 3), vec![10_i64, 20]);
/// assert_eq!(array(joined), vec![1, 2, 3, 10, 20]);
///
/// assert_eq!(array(concat(vec![1_i64], 2_i64)), vec![1, 2]);
/// ```
pub fn concat<T, H, R>(head: H, tail: R) -> Seq<T>
where
    T: 'static,
    H: IntoSeq<T>,
    R: IntoSeq<T>,
{
    head.into_seq().concat(tail)
}
