use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::{IntoIter, Iter};
use crate::util::error::EmptyCollection;

/// An unbounded first-in-first-out queue, backed by a [`LinkedList`]. Elements join at the back
/// and leave from the front.
///
/// # Examples
/// ```
/// # use linear_collections::collections::adapters::Queue;
/// let mut queue: Queue<_> = [1, 2, 3].into_iter().collect();
/// assert_eq!(queue.to_string(), "[1, 2, 3]");
/// assert_eq!(queue.peek(), Some(&1));
/// while let Some(value) = queue.dequeue() {
///     assert!(value <= 3);
/// }
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds `value` to the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the element at the front of the queue and returns it, if the queue isn't empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.list.try_pop_front()
    }

    pub const fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.list.try_front()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for Queue<T> {
    fn from(list: LinkedList<T>) -> Self {
        Queue { list }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue::from(LinkedList::from_iter(iter))
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front", &self.peek())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
