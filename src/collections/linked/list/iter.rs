use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{LinkedList, ListContents, ListState, NodePtr};
use crate::util::option::OptionExtension;

/// A window over the nodes of a list that shrinks from either end. Neither the nodes nor the
/// owning list are modified; the window only tracks which nodes haven't been visited yet.
pub(crate) struct NodeWalk<T> {
    state: ListState<T>,
}

impl<T> NodeWalk<T> {
    pub fn over(state: &ListState<T>) -> NodeWalk<T> {
        NodeWalk {
            state: state.clone(),
        }
    }

    pub fn take_front(&mut self) -> Option<NodePtr<T>> {
        let Full(ListContents { len, head, .. }) = &mut self.state else {
            return None;
        };
        let node = *head;

        match len.checked_sub(1) {
            Some(remaining) => {
                // SAFETY: At least one unvisited node lies after the current head.
                *head = unsafe { head.next().unreachable() };
                *len = remaining;
            },
            None => self.state = Empty,
        }

        Some(node)
    }

    pub fn take_back(&mut self) -> Option<NodePtr<T>> {
        let Full(ListContents { len, tail, .. }) = &mut self.state else {
            return None;
        };
        let node = *tail;

        match len.checked_sub(1) {
            Some(remaining) => {
                // SAFETY: At least one unvisited node lies before the current tail.
                *tail = unsafe { tail.prev().unreachable() };
                *len = remaining;
            },
            None => self.state = Empty,
        }

        Some(node)
    }

    pub const fn remaining(&self) -> usize {
        self.state.len()
    }
}

impl<T> Clone for NodeWalk<T> {
    fn clone(&self) -> Self {
        NodeWalk {
            state: self.state.clone(),
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// An owned iterator over a [`LinkedList`], yielding values from the front. Each value is popped
/// off the list as it is yielded, and whatever remains is dropped with the iterator.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            walk: NodeWalk::over(&self.state),
            _phantom: PhantomData,
        }
    }
}

/// A mutable iterator over a [`LinkedList`]. The list stays mutably borrowed for the lifetime of
/// the iterator, so its structure can't change part way through a traversal.
pub struct IterMut<'a, T> {
    pub(crate) walk: NodeWalk<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.take_front().map(|mut node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining(), Some(self.walk.remaining()))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.take_back().map(|mut node| node.value_mut())
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            walk: NodeWalk::over(&self.state),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over a [`LinkedList`], yielding references from the front.
pub struct Iter<'a, T> {
    pub(crate) walk: NodeWalk<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.take_front().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.walk.remaining(), Some(self.walk.remaining()))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.walk.take_back().map(|node| node.value())
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            walk: self.walk.clone(),
            _phantom: PhantomData,
        }
    }
}
