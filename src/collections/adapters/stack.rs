use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::LinkedList;
use crate::collections::linked::list::{IntoIter, Iter};
use crate::util::error::EmptyCollection;

/// A last-in-first-out stack, backed by a [`LinkedList`] whose back is the top of the stack.
///
/// # Examples
/// ```
/// # use linear_collections::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Places `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes the top element and returns it, if the stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.list.try_pop_back()
    }

    /// Returns a reference to the top element, if the stack isn't empty.
    pub const fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.list.try_back()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for Stack<T> {
    fn from(list: LinkedList<T>) -> Self {
        Stack { list }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from(LinkedList::from_iter(iter))
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.peek())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
