use crate::{pull::Pull, step::Step};

/// A traversal that ends immediately.
///
/// `Empty` is zero-sized, so boxing it does not allocate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<T> Pull<T> for Empty {
    fn next(&mut self) -> Step<T> {
        Step::End
    }
}

/// Steps through the integers from `start` to `end`, both inclusive.
///
/// An empty traversal when `start > end`. The last item is yielded without
/// computing its successor, so `end == i64::MAX` does not overflow.
#[derive(Debug, Clone)]
pub struct Range {
    next: i64,
    end: i64,
    done: bool,
}

impl Range {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            next: start,
            end,
            done: start > end,
        }
    }

    /// Number of items in `start..=end`, or `None` if it does not fit in a `usize`.
    pub fn span(start: i64, end: i64) -> Option<usize> {
        if start > end {
            return Some(0);
        }
        usize::try_from(end.abs_diff(start)).ok()?.checked_add(1)
    }
}

impl Pull<i64> for Range {
    fn next(&mut self) -> Step<i64> {
        if self.done {
            return Step::End;
        }
        let item = self.next;
        if item == self.end {
            self.done = true;
        } else {
            self.next += 1;
        }
        Step::Yielded(item)
    }
}
