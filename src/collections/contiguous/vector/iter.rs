use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};

use super::Vector;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Take ownership of the buffer and leave an empty Vector behind to be dropped.
        let back = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, Box::new_uninit_slice(0));

        IntoIter {
            buf,
            front: 0,
            back,
        }
    }
}

/// An owned iterator over the elements of a [`Vector`].
pub struct IntoIter<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    /// Elements in `front..back` are initialized and not yet yielded.
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let index = self.front;
        self.front += 1;
        // SAFETY: index was within front..back, so it is initialized, and moving front past it
        // ensures it is never read again.
        Some(unsafe { self.buf[index].assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: back was within front..back before decrementing, so it is initialized and now
        // excluded from the remaining range.
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.front..self.back] {
            // SAFETY: Everything that hasn't been yielded is still initialized.
            unsafe { slot.assume_init_drop(); }
        }
    }
}
