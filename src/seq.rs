//! The [`Seq`] handle and its constructors.
//!
//! A [`Seq`] is an opaque, reference-counted description of how to start a
//! traversal. Every traversal starts from the sequence's source, so a sequence
//! can be traversed any number of times unless it wraps a stateful source
//! (see [`Seq::from_iterator`] and [`Seq::single_owned`]).
//!
//! Internally a sequence is one of two shapes:
//!
//! - a *pull* source: an initializer producing a fresh [`Pull`] per traversal
//! - a *push* source: a driver that calls an action once per item
//!
//! Combinators and [`Seq::pull`] only ever deal with pull traversals. Push
//! sources are bridged through [`Buffered`](crate::bridge::Buffered) when pulled,
//! and driven directly by the materializers that do not need step control.

use std::{
    cell::RefCell,
    fmt,
    ops::ControlFlow,
    rc::Rc,
    sync::Arc,
};

use either::Either;
use tracing::{debug, trace};

use crate::{
    adapter::IntoSeq,
    bridge::{Buffered, Handoff},
    build::{Cursor, Empty, Range},
    compose::{Concat, Filter, Map, Skip, Take},
    config::{BridgeConfig, ConfigError},
    pull::{from_fn, BoxPull, Fuse, Pull},
    step::Step,
};

/// Driver of a push source: calls the action once per item, in order.
pub type Driver<T> = Rc<dyn Fn(&mut dyn FnMut(T))>;

/// Driver of a push source that may run on the handoff thread.
pub type SendDriver<T> = Arc<dyn Fn(&mut dyn FnMut(T)) + Send + Sync>;

pub(crate) enum Source<T> {
    Pull(Box<dyn Fn() -> BoxPull<T>>),
    Push(Driver<T>),
}

struct Inner<T> {
    source: Source<T>,
    len: Option<usize>,
}

/// Opaque lazy handle over an ordered stream of items.
///
/// Cloning a `Seq` clones the handle, not the items. Combinators return new
/// sequences wrapping the original and never traverse anything; materializers
/// such as [`Seq::array`] and [`Seq::reduce`] do.
///
/// # Examples
///
/// ```
/// use lazyseq::Seq;
///
/// let squares = Seq::range(1, 10).map(|x| x * x).filter(|x| x % 2 == 1);
/// assert_eq!(squares.array(), vec![1, 9, 25, 49, 81]);
/// assert_eq!(squares.reduce(|acc, x| acc + x, 0), 165);
/// ```
pub struct Seq<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner.source {
            Source::Pull(_) => "pull",
            Source::Push(_) => "push",
        };
        f.debug_struct("Seq")
            .field("source", &kind)
            .field("len_hint", &self.inner.len)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Seq<T> {
    pub(crate) fn from_parts(source: Source<T>, len: Option<usize>) -> Self {
        Self {
            inner: Rc::new(Inner { source, len }),
        }
    }

    fn derived<P, I>(init: I, len: Option<usize>) -> Self
    where
        P: Pull<T> + 'static,
        I: Fn() -> P + 'static,
    {
        Self::from_parts(Source::Pull(Box::new(move || init().boxed())), len)
    }

    /// The empty sequence. Its first step is `End`.
    ///
    /// The source captures no state, so every empty sequence behaves the same
    /// no matter how many handles to it exist.
    pub fn empty() -> Self {
        Self::derived(|| Empty, Some(0))
    }

    /// Wrap a caller-supplied initializer and step function as a pull source.
    ///
    /// `init` runs once at the start of every traversal and returns the step
    /// function for that traversal. The step function is fused: after its first
    /// `End` it is never called again.
    ///
    /// ```
    /// use lazyseq::{Seq, Step};
    ///
    /// let countdown = Seq::from_pull(|| {
    ///     let mut n = 3;
    ///     move || {
    ///         if n == 0 {
    ///             return Step::End;
    ///         }
    ///         n -= 1;
    ///         Step::Yielded(n + 1)
    ///     }
    /// });
    /// assert_eq!(countdown.array(), vec![3, 2, 1]);
    /// assert_eq!(countdown.array(), vec![3, 2, 1]);
    /// ```
    pub fn from_pull<I, S>(init: I) -> Self
    where
        I: Fn() -> S + 'static,
        S: FnMut() -> Step<T> + 'static,
    {
        Self::derived(move || Fuse::new(from_fn(init())), None)
    }

    /// Like [`Seq::from_pull`], for initializers returning a [`Pull`] implementation.
    pub fn from_source<I, P>(init: I) -> Self
    where
        I: Fn() -> P + 'static,
        P: Pull<T> + 'static,
    {
        Self::derived(move || Fuse::new(init()), None)
    }

    /// Wrap a driver as a push source.
    ///
    /// The driver runs once per traversal and must call the action once per
    /// item, in order, returning when it has no more items. When the sequence is
    /// pulled step by step, the driver runs to completion into a buffer on the
    /// first pull; [`Seq::each`], [`Seq::all`], [`Seq::any`] and [`Seq::count`]
    /// run it directly without buffering.
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let letters = Seq::from_push(|action| {
    ///     for c in ['a', 'b', 'c'] {
    ///         action(c);
    ///     }
    /// });
    /// assert_eq!(letters.array(), vec!['a', 'b', 'c']);
    /// ```
    pub fn from_push<D>(driver: D) -> Self
    where
        D: Fn(&mut dyn FnMut(T)) + 'static,
    {
        Self::from_parts(Source::Push(Rc::new(driver)), None)
    }

    /// Wrap a `Send` driver as a push source bridged by thread handoff.
    ///
    /// Each traversal runs the driver on a dedicated thread that hands items
    /// over one at a time and parks until the next one is requested, so the
    /// driver never gets ahead of the consumer and infinite drivers work with
    /// [`Seq::take`] or [`Seq::any`]. The thread is not started until the first
    /// pull and is unwound when the traversal is dropped.
    ///
    /// Stopping relies on that unwind passing through the driver. A driver
    /// that catches panics around its action and keeps going is never
    /// stopped, and dropping an unfinished traversal of it blocks forever.
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// let naturals = Seq::from_push_send(|action| {
    ///     let mut n = 0_u64;
    ///     loop {
    ///         n += 1;
    ///         action(n);
    ///     }
    /// });
    /// assert_eq!(naturals.take(4).array(), vec![1, 2, 3, 4]);
    /// ```
    pub fn from_push_send<D>(driver: D) -> Self
    where
        T: Send,
        D: Fn(&mut dyn FnMut(T)) + Send + Sync + 'static,
    {
        Self::handoff(Arc::new(driver), BridgeConfig::default())
    }

    /// Like [`Seq::from_push_send`] with an explicit bridge configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration fails validation.
    pub fn from_push_send_with<D>(config: BridgeConfig, driver: D) -> Result<Self, ConfigError>
    where
        T: Send,
        D: Fn(&mut dyn FnMut(T)) + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self::handoff(Arc::new(driver), config))
    }

    fn handoff(driver: SendDriver<T>, config: BridgeConfig) -> Self
    where
        T: Send,
    {
        Self::derived(
            move || Handoff::new(Arc::clone(&driver), config.clone()),
            None,
        )
    }

    /// A single-item sequence holding `value`, duplicated for every traversal.
    pub fn single(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_items(Rc::from(vec![value]))
    }

    /// A single-item sequence for values that cannot be duplicated.
    ///
    /// The value itself is handed out by the first traversal; later traversals
    /// are empty.
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// struct Token(u32);
    ///
    /// let seq = Seq::single_owned(Token(7));
    /// assert_eq!(seq.array().iter().map(|t| t.0).collect::<Vec<_>>(), vec![7]);
    /// assert!(seq.array().is_empty());
    /// ```
    pub fn single_owned(value: T) -> Self {
        let slot = Rc::new(RefCell::new(Some(value)));
        Self::from_pull(move || {
            let slot = Rc::clone(&slot);
            move || Step::from(slot.borrow_mut().take())
        })
    }

    /// Wrap a live iterator as a pull source.
    ///
    /// All traversals share the iterator, so each one continues where the
    /// previous one stopped, and once the iterator is exhausted every later
    /// traversal is empty.
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let shared = Rc::new(RefCell::new(iter.into_iter().fuse()));
        Self::from_pull(move || {
            let shared = Rc::clone(&shared);
            move || Step::from(Iterator::next(&mut *shared.borrow_mut()))
        })
    }

    /// Wrap a re-iterable value as a pull source.
    ///
    /// Every traversal iterates a fresh clone of `iterable`.
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use lazyseq::Seq;
    ///
    /// let set: BTreeSet<_> = [3, 1, 2].into_iter().collect();
    /// let seq = Seq::from_iterable(set);
    /// assert_eq!(seq.array(), vec![1, 2, 3]);
    /// assert_eq!(seq.array(), vec![1, 2, 3]);
    /// ```
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::from_pull(move || {
            let mut iter = iterable.clone().into_iter();
            move || Step::from(iter.next())
        })
    }

    pub(crate) fn from_items(items: Rc<[T]>) -> Self
    where
        T: Clone,
    {
        let len = items.len();
        Self::derived(move || Cursor::new(Rc::clone(&items)), Some(len))
    }

    /// Start a new traversal.
    pub fn pull(&self) -> BoxPull<T> {
        match &self.inner.source {
            Source::Pull(init) => init(),
            Source::Push(driver) => Buffered::new(Rc::clone(driver)).boxed(),
        }
    }

    /// The number of items, if the sequence knows it without traversing.
    pub fn len_hint(&self) -> Option<usize> {
        self.inner.len
    }

    /// Returns `true` if both handles refer to the same sequence.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    /// Feed items to `f` until it breaks or the source is exhausted.
    ///
    /// Push drivers cannot be stopped early; once `f` has broken, the rest of
    /// the driver's items are dropped without reaching `f`.
    pub(crate) fn drive<F>(&self, mut f: F)
    where
        F: FnMut(T) -> ControlFlow<()>,
    {
        match &self.inner.source {
            Source::Pull(init) => {
                let mut pull = init();
                while let Step::Yielded(item) = pull.next() {
                    if f(item).is_break() {
                        return;
                    }
                }
            }
            Source::Push(driver) => {
                let mut stopped = false;
                let mut ignored = 0_usize;
                driver(&mut |item| {
                    if stopped {
                        ignored += 1;
                    } else if f(item).is_break() {
                        stopped = true;
                    }
                });
                if ignored > 0 {
                    trace!(ignored, "push driver ran past a short-circuit");
                }
            }
        }
    }

    /// Create a sequence that applies `f` to every item, in order, as each
    /// item is pulled.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let src = self.clone();
        let f = Rc::new(f);
        Seq::derived(
            move || {
                let f = Rc::clone(&f);
                Map::new(src.pull(), move |item: T| f(item))
            },
            self.len_hint(),
        )
    }

    /// Create a sequence of the items satisfying `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        let src = self.clone();
        let predicate = Rc::new(predicate);
        Self::derived(
            move || {
                let predicate = Rc::clone(&predicate);
                Filter::new(src.pull(), move |item: &T| predicate(item))
            },
            None,
        )
    }

    /// Create a sequence of every item of `self` followed by every item of `tail`.
    ///
    /// `tail` is converted right away, but no traversal of it starts until
    /// `self` is exhausted.
    pub fn concat<R>(&self, tail: R) -> Self
    where
        R: IntoSeq<T>,
    {
        let head = self.clone();
        let tail = tail.into_seq();
        let len = match (self.len_hint(), tail.len_hint()) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        Self::derived(
            move || Concat::new(head.pull(), Deferred::new(tail.clone())),
            len,
        )
    }

    /// Create a sequence without the first `n` items.
    pub fn skip(&self, n: usize) -> Self {
        let src = self.clone();
        Self::derived(
            move || Skip::new(src.pull(), n),
            self.len_hint().map(|len| len.saturating_sub(n)),
        )
    }

    /// Create a sequence of at most the first `n` items.
    pub fn take(&self, n: usize) -> Self {
        let src = self.clone();
        Self::derived(
            move || Take::new(src.pull(), n),
            self.len_hint().map(|len| len.min(n)),
        )
    }
}

impl Seq<i64> {
    /// The integers from `start` to `end`, both inclusive.
    ///
    /// When `start > end` the sequence is empty, matching `start..=end`.
    ///
    /// ```
    /// use lazyseq::Seq;
    ///
    /// assert_eq!(Seq::range(1, 5).array(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(Seq::range(5, 5).array(), vec![5]);
    /// assert!(Seq::range(5, 1).array().is_empty());
    /// ```
    pub fn range(start: i64, end: i64) -> Self {
        if start > end {
            debug!(start, end, "descending range is empty");
        }
        Self::derived(move || Range::new(start, end), Range::span(start, end))
    }
}

/// A traversal of a sequence that is only started on its first step.
struct Deferred<T> {
    state: Either<Seq<T>, BoxPull<T>>,
}

impl<T> Deferred<T> {
    fn new(seq: Seq<T>) -> Self {
        Self {
            state: Either::Left(seq),
        }
    }
}

impl<T: 'static> Pull<T> for Deferred<T> {
    fn next(&mut self) -> Step<T> {
        if let Either::Left(seq) = &self.state {
            self.state = Either::Right(seq.pull());
        }
        match &mut self.state {
            Either::Right(pull) => pull.next(),
            Either::Left(_) => Step::End,
        }
    }
}
