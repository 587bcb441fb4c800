use std::fmt::{self, Debug, Display, Formatter};
use std::iter;

use tracing::debug;

use super::Iter;
#[doc(inline)]
pub use crate::util::error::{CollectionFull, EmptyCollection, ZeroCapacity};
use crate::util::fmt::{DebugEntries, write_seq};
use crate::util::result::ResultExtension;

/// A first-in-first-out queue with a capacity fixed at construction, stored in a ring buffer.
///
/// Values are written at `tail` and read from `head`, with both indices wrapping modulo the
/// capacity, so the element at logical position `i` lives in slot `(head + i) % cap`. Dequeued
/// slots are cleared immediately rather than left holding a stale value.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len/cap` | `O(1)` |
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use linear_collections::collections::circ::RingQueue;
/// let mut queue = RingQueue::with_cap(5);
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek(), Some(&1));
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.iter().collect::<Vec<_>>(), [&2, &3]);
/// ```
#[derive(Clone)]
pub struct RingQueue<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty RingQueue that can hold exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub fn with_cap(cap: usize) -> RingQueue<T> {
        RingQueue::try_with_cap(cap).throw()
    }

    /// Creates an empty RingQueue that can hold exactly `cap` elements, returning an [`Err`] if
    /// `cap` is 0.
    pub fn try_with_cap(cap: usize) -> Result<RingQueue<T>, ZeroCapacity> {
        if cap == 0 {
            return Err(ZeroCapacity);
        }

        debug!(cap, "allocating ring queue");
        Ok(RingQueue {
            slots: iter::repeat_with(|| None).take(cap).collect(),
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity of the queue.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if another [`enqueue`](RingQueue::enqueue) would fail.
    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Adds `value` to the back of the queue.
    ///
    /// # Panics
    /// Panics if the queue is full.
    pub fn enqueue(&mut self, value: T) {
        self.try_enqueue(value).throw()
    }

    /// Adds `value` to the back of the queue, returning an [`Err`] and leaving the queue unchanged
    /// if it is full.
    pub fn try_enqueue(&mut self, value: T) -> Result<(), CollectionFull> {
        if self.is_full() {
            return Err(CollectionFull { cap: self.cap() });
        }

        self.slots[self.tail] = Some(value);
        self.tail = self.wrap(self.tail + 1);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at the front of the queue and returns it, if the queue isn't empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.head].take();
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        value
    }

    /// Removes the element at the front of the queue and returns it, returning an [`Err`] if the
    /// queue is empty.
    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.dequeue().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element at the front of the queue, if it exists.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Returns a reference to the element at the front of the queue, returning an [`Err`] if the
    /// queue is empty.
    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    /// Returns a reference to the element `index` places from the front, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical_index(index)].as_ref()
    }

    /// Drops every element and rewinds both indices to the start of the backing store.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.head = 0;
        self.tail = 0;
    }

    /// Returns an iterator over the queue from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Maps a logical position, counted from the front of the queue, to its slot.
    pub(crate) fn physical_index(&self, index: usize) -> usize {
        self.wrap(self.head + index)
    }

    pub(crate) fn wrap(&self, index: usize) -> usize {
        index % self.cap()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}
