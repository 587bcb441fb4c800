use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::{DebugEntries, write_seq};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction, where each node owns the next.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(n)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `push_back/pop_back` | `O(n)` |
/// | `get/insert/remove` | `O(i)` |
/// | `index_of/contains/remove_item` | `O(n)` |
///
/// Unlike [`LinkedList`](crate::collections::linked::LinkedList), this type is written entirely
/// with owned [`Box`]es, at the cost of only being able to walk forwards.
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element, walking the whole list to find it.
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().last()
    }

    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.front().ok_or(EmptyCollection)
    }

    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.back().ok_or(EmptyCollection)
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    /// Add the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length of the list.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }
        let new_len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let link = self.link_at_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));

        self.len = new_len;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(value)
    }

    /// Removes the last element of the list, walking the whole list to find it.
    pub fn pop_back(&mut self) -> Option<T> {
        let last_index = self.len.checked_sub(1)?;
        self.try_remove(last_index).ok()
    }

    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the iterator yields at least index + 1 elements.
        Ok(unsafe { self.iter().nth(index).unreachable() })
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the iterator yields at least index + 1 elements.
        Ok(unsafe { self.iter_mut().nth(index).unreachable() })
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        let link = self.link_at_mut(index);
        // SAFETY: index < len, so the link at index holds a node.
        let node = unsafe { link.take().unreachable() };
        let Node { value, next } = *node;
        *link = next;

        self.len -= 1;
        Ok(value)
    }

    /// Removes and drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        // Unlink one node at a time so that dropping a long chain never recurses.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// Returns the link that currently holds the node at `index`, which is the empty link after
    /// the last node when `index == len`. `index` must not exceed the length of the list.
    pub(crate) fn link_at_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            // SAFETY: index <= len, so every link before the target holds a node.
            link = unsafe { &mut link.as_mut().unreachable().next };
        }
        link
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item`, returning whether one was found.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                drop(self.remove(index));
                true
            },
            None => false,
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Find the end once rather than walking the list for every item.
        let mut added = 0_usize;
        let mut link = self.link_at_mut(self.len);

        for value in iter {
            *link = Some(Box::new(Node { value, next: None }));
            // SAFETY: The link has just been filled.
            link = unsafe { &mut link.as_mut().unreachable().next };
            added += 1;
        }

        self.len = self.len.checked_add(added).ok_or(CapacityOverflow).throw();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}
