/// Result of pulling once from a traversal: either the next item or the end marker.
///
/// `Step` is the return type of every [`Pull`](crate::Pull) source, similar to how
/// `Option` is the return type of `Iterator::next`. Once a traversal has returned
/// `End`, every later pull returns `End` as well.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let item: Step<i32> = Step::Yielded(42);
/// let end: Step<i32> = Step::End;
///
/// assert_eq!(item.map(|x| x * 2), Step::Yielded(84));
/// assert_eq!(end.map(|x| x * 2), Step::End);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The traversal produced an item
    Yielded(T),
    /// The traversal is exhausted
    End,
}

impl<T> Step<T> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert!(Step::Yielded(1).is_yielded());
    /// assert!(!Step::<i32>::End.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `End`.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Step::End)
    }

    /// Converts from `Step<T>` to `Option<T>`, mapping `End` to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(42).into_option(), Some(42));
    /// assert_eq!(Step::<i32>::End.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Yielded(item) => Some(item),
            Step::End => None,
        }
    }

    /// Maps a `Step<T>` to `Step<U>` by applying a function to the yielded item.
    ///
    /// `End` passes through untouched and the function is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(item) => Step::Yielded(f(item)),
            Step::End => Step::End,
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(item) => Step::Yielded(item),
            Step::End => Step::End,
        }
    }

    /// Returns the yielded item or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(42).yielded_or(0), 42);
    /// assert_eq!(Step::End.yielded_or(0), 0);
    /// ```
    #[inline]
    pub fn yielded_or(self, default: T) -> T {
        match self {
            Step::Yielded(item) => item,
            Step::End => default,
        }
    }

    /// Returns the yielded item, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `End`.
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// let end: Step<i32> = Step::End;
    /// end.expect_yielded("the traversal ended early"); // panics
    /// ```
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> T {
        match self {
            Step::Yielded(item) => item,
            Step::End => panic!("{}", msg),
        }
    }

    /// Returns the yielded item, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `End`.
    #[inline]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(item) => item,
            Step::End => panic!("called `Step::unwrap_yielded()` on an `End` value"),
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Step::Yielded(item),
            None => Step::End,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yielded_and_is_end() {
        let y: Step<i32> = Step::Yielded(42);
        let e: Step<i32> = Step::End;

        assert!(y.is_yielded());
        assert!(!y.is_end());
        assert!(e.is_end());
        assert!(!e.is_yielded());
    }

    #[test]
    fn test_map_skips_function_on_end() {
        let mut calls = 0;
        let e: Step<i32> = Step::End;
        assert_eq!(
            e.map(|x| {
                calls += 1;
                x + 1
            }),
            Step::End
        );
        assert_eq!(calls, 0);
        assert_eq!(Step::Yielded(1).map(|x| x + 1), Step::Yielded(2));
    }

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Step::from(Some(3)), Step::Yielded(3));
        assert_eq!(Step::<i32>::from(None), Step::End);
        assert_eq!(Option::from(Step::Yielded("a")), Some("a"));
    }

    #[test]
    fn test_as_ref() {
        let y: Step<String> = Step::Yielded("item".to_string());
        assert_eq!(y.as_ref(), Step::Yielded(&"item".to_string()));
        assert_eq!(Step::<String>::End.as_ref(), Step::End);
    }

    #[test]
    fn test_yielded_or() {
        assert_eq!(Step::Yielded(42).yielded_or(0), 42);
        assert_eq!(Step::End.yielded_or(0), 0);
    }

    #[test]
    #[should_panic(expected = "traversal ended")]
    fn test_expect_yielded_panics() {
        let e: Step<i32> = Step::End;
        e.expect_yielded("traversal ended");
    }

    #[test]
    #[should_panic(expected = "called `Step::unwrap_yielded()` on an `End` value")]
    fn test_unwrap_yielded_panics() {
        Step::<i32>::End.unwrap_yielded();
    }
}
