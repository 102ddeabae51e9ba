use std::rc::Rc;

use crate::{pull::Pull, step::Step};

/// Walks a shared slice front to back, cloning each element as it is pulled.
///
/// Every traversal of a collection-backed sequence gets its own cursor over the
/// same slice, which is what makes those sequences re-traversable.
pub struct Cursor<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> Cursor<T> {
    pub fn new(items: Rc<[T]>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Pull<T> for Cursor<T> {
    fn next(&mut self) -> Step<T> {
        match self.items.get(self.index) {
            Some(item) => {
                self.index += 1;
                Step::Yielded(item.clone())
            }
            None => Step::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursors_over_the_same_slice_are_independent() {
        let items: Rc<[&str]> = Rc::from(vec!["a", "b"]);
        let mut first = Cursor::new(Rc::clone(&items));
        let mut second = Cursor::new(items);

        assert_eq!(first.next(), Step::Yielded("a"));
        assert_eq!(first.next(), Step::Yielded("b"));
        assert_eq!(second.next(), Step::Yielded("a"));
        assert_eq!(first.next(), Step::End);
        assert_eq!(first.next(), Step::End);
    }
}
