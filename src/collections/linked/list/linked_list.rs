use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;
use tracing::trace;

use super::iter::NodeWalk;
use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::{DebugEntries, write_seq};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `index_of/contains/remove_item` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Indexed methods walk from whichever end is closer: from the head when `i < n / 2` and from
/// the tail otherwise, so the exact middle is always reached from the tail.
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason, [`Vector`](crate::collections::contiguous::Vector)
/// should be preferred for most applications unless the `O(1)` methods at either end are being
/// heavily utilized.
///
/// # Examples
/// ```
/// # use linear_collections::collections::linked::LinkedList;
/// let mut list = LinkedList::new();
/// list.push_front(10);
/// list.push_back(20);
/// list.push_back(30);
/// list.insert(2, 49);
/// assert_eq!(list.to_string(), "[10, 20, 49, 30]");
///
/// assert_eq!(list.remove(1), 20);
/// assert_eq!(list.to_string(), "[10, 49, 30]");
/// ```
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

#[derive(Clone, Copy)]
pub(crate) enum End {
    Front,
    Back,
}

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Returns a reference to the first element in the list, returning an [`Err`] if the list is
    /// empty.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.front().ok_or(EmptyCollection)
    }

    /// Returns a reference to the last element in the list, returning an [`Err`] if the list is
    /// empty.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.back().ok_or(EmptyCollection)
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_end(End::Front)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop_end(End::Back)
    }

    /// Removes the first element from the list and returns it, returning an [`Err`] if the list
    /// is empty.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.pop_front().ok_or(EmptyCollection)
    }

    /// Removes the last element from the list and returns it, returning an [`Err`] if the list is
    /// empty.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.pop_back().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting every following element back by
    /// one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking if
    /// `index` is greater than the length of the LinkedList. On failure, the list is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else {
            // SAFETY: 0 < index < len, so the list has at least two elements.
            let contents = unsafe { self.contents_mut().unreachable() };
            let prev_node = contents.seek_before(index);

            contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

            // SAFETY: For this branch, we aren't adding at the front or back, so the node before
            // the given index has a next node.
            let next_node = unsafe { prev_node.next().unreachable() };

            let node = NodePtr::from_node(Node {
                value,
                prev: Some(prev_node),
                next: Some(next_node),
            });

            *next_node.prev_mut() = Some(node);
            *prev_node.next_mut() = Some(node);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds. On failure, the list is unchanged.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: The node was just located within this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Replaces the element at `index` with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at `index` with `new_value`, returning an [`Err`] rather than
    /// panicking if `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves every element of `other` onto the back of this list in `O(1)`.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let Full(other_contents) = mem::replace(&mut other.state, Empty) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow).throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Removes and drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        let len = self.len();
        self.free_nodes();
        trace!(len, "cleared linked list");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, scanning from the front.
    ///
    /// Absent values can be stored by using an [`Option`] element type, in which case `None` only
    /// matches `None`.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::linked::LinkedList;
    /// let list: LinkedList<_> = [Some(1), None, Some(3), None].into_iter().collect();
    /// assert_eq!(list.index_of(&None), Some(1));
    /// assert_eq!(list.index_of(&Some(3)), Some(2));
    /// assert_eq!(list.index_of(&Some(4)), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item`, returning whether one was found.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.find_node(item) {
            Some(node) => {
                // SAFETY: The node was just found within this list.
                drop(unsafe { self.unlink(node) });
                true
            },
            None => false,
        }
    }

    pub(crate) fn find_node(&self, item: &T) -> Option<NodePtr<T>> {
        let mut walk = NodeWalk::over(&self.state);
        iter::from_fn(|| walk.take_front()).find(|node| node.value() == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    pub(crate) const fn contents_mut(&mut self) -> Option<&mut ListContents<T>> {
        match &mut self.state {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }

    /// Unlinks `node` from the list and returns its value. Nodes at either end are handed to
    /// [`pop_front`](LinkedList::pop_front) and [`pop_back`](LinkedList::pop_back) so that the
    /// head and tail are only ever updated in one place.
    ///
    /// # Safety
    /// `node` must be a live node of this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        if node.prev().is_none() {
            // SAFETY: A node without a predecessor is the head of a non-empty list.
            return unsafe { self.pop_front().unreachable() };
        }
        if node.next().is_none() {
            // SAFETY: A node without a successor is the tail of a non-empty list.
            return unsafe { self.pop_back().unreachable() };
        }

        // SAFETY: The node has neighbours on both sides, so the list holds at least three nodes and
        // the new length is still non-zero.
        unsafe {
            let contents = self.contents_mut().unreachable();
            contents.len = contents.len.checked_sub(1).unreachable();
        }

        // SAFETY: The caller guarantees the node is live, and both neighbours are relinked to skip
        // over it before anything else can observe the list.
        let removed = unsafe { node.take_node() };
        unsafe {
            *removed.prev.unreachable().next_mut() = removed.next;
            *removed.next.unreachable().prev_mut() = removed.prev;
        }

        removed.value
    }

    fn pop_end(&mut self, end: End) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        let Some(remaining) = contents.len.checked_sub(1) else {
            // SAFETY: With one node, head and tail are the same live node, and resetting the state
            // leaves nothing that refers to it.
            let node = unsafe { contents.head.take_node() };
            self.state = Empty;
            return Some(node.value);
        };
        contents.len = remaining;

        let removed = match end {
            End::Front => {
                let old_head = contents.head;
                // SAFETY: At least two nodes remained, so the head has a successor.
                contents.head = unsafe { old_head.next().unreachable() };
                *contents.head.prev_mut() = None;
                old_head
            },
            End::Back => {
                let old_tail = contents.tail;
                // SAFETY: At least two nodes remained, so the tail has a predecessor.
                contents.tail = unsafe { old_tail.prev().unreachable() };
                *contents.tail.next_mut() = None;
                old_tail
            },
        };

        // SAFETY: The removed node is live and no remaining link refers to it.
        Some(unsafe { removed.take_node() }.value)
    }

    pub(crate) fn free_nodes(&mut self) {
        if let Full(ListContents { head, .. }) = mem::replace(&mut self.state, Empty) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: The state no longer refers to any node, and each node is visited once.
                let node = unsafe { ptr.take_node() };
                curr = node.next;
            }
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, len }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a predecessor.");
                assert!(tail.next().is_none(), "The tail shouldn't have a successor.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr, "Following next links should end at the tail.");
                assert_eq!(count, len.get(), "The length should match the reachable nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from the closer end.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    /// Finds the node before `index` for an insertion with `0 < index < len`. The direction is
    /// chosen from `index` itself, the same as [`seek`](ListContents::seek).
    pub fn seek_before(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index - 1, self.head)
        } else {
            self.seek_bwd(self.len.get() - index, self.tail)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: Callers never walk past the tail.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: Callers never walk past the head.
            node = unsafe { node.prev().unreachable() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.free_nodes();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: LinkedList uniquely owns all of its nodes, so it can be sent across threads when T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to a LinkedList only ever produces shared references to its elements.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}
