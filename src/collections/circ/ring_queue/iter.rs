use std::iter::FusedIterator;

use super::RingQueue;

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

/// An owned iterator that drains a [`RingQueue`] in FIFO order.
pub struct IntoIter<T> {
    pub(crate) queue: RingQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            slots: &self.slots,
            front: self.head,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over a [`RingQueue`] in logical order, independent of where the elements
/// sit in the backing store.
pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
    /// The slot of the next element to yield from the front.
    pub(crate) front: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.slots[self.front].as_ref();
        self.front = (self.front + 1) % self.slots.len();
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        self.slots[(self.front + self.remaining) % self.slots.len()].as_ref()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            front: self.front,
            remaining: self.remaining,
        }
    }
}
