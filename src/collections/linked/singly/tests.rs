#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_front_and_back() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.to_string(), "[]");

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    assert_eq!(collect(&list), [1, 2, 3]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.len(), 3);

    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(2), "Popping the only element from the back should work.");
    assert!(list.is_empty());
    assert_eq!(list.try_pop_front(), Err(EmptyCollection));
    assert_eq!(list.try_pop_back(), Err(EmptyCollection));
    assert_eq!(list.try_front(), Err(EmptyCollection));
    assert_eq!(list.try_back(), Err(EmptyCollection));
}

#[test]
fn test_indexed_operations() {
    let mut list: SinglyLinkedList<_> = (0..4).collect();
    list.insert(0, 10);
    list.insert(5, 50);
    list.insert(3, 30);
    assert_eq!(collect(&list), [10, 0, 1, 30, 2, 3, 50]);

    assert_eq!(list.remove(3), 30);
    assert_eq!(list.remove(0), 10);
    assert_eq!(list.remove(4), 50);
    assert_eq!(collect(&list), [0, 1, 2, 3]);

    *list.get_mut(2) = 20;
    assert_eq!(*list.get(2), 20);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_out_of_range() {
    let mut list: SinglyLinkedList<_> = (0..3).collect();

    assert_eq!(list.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({ list.remove(3) });
    assert_panics!({ list.insert(4, 0) });
    assert_eq!(collect(&list), [0, 1, 2], "Failed operations shouldn't change the list.");
}

#[test]
fn test_search() {
    let mut list: SinglyLinkedList<_> = [Some('a'), None, Some('b'), None].into_iter().collect();

    assert_eq!(list.index_of(&None), Some(1));
    assert_eq!(list.index_of(&Some('b')), Some(2));
    assert_eq!(list.index_of(&Some('c')), None);
    assert!(list.contains(&Some('a')));

    assert!(list.remove_item(&Some('a')));
    assert!(list.remove_item(&None));
    assert!(!list.remove_item(&Some('a')));
    assert_eq!(collect(&list), [Some('b'), None]);
}

#[test]
fn test_iterators() {
    let mut list: SinglyLinkedList<_> = (1..=4).collect();
    for i in &mut list {
        *i *= 3;
    }
    let iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.copied().collect::<Vec<_>>(), [3, 6, 9, 12]);

    let mut extended = list.clone();
    extended.extend([15, 18]);
    assert_eq!(extended.len(), 6);
    assert_eq!(extended.back(), Some(&18));
    assert_ne!(extended, list);

    assert_eq!(list.into_iter().collect::<Vec<_>>(), [3, 6, 9, 12]);
}

#[test]
fn test_long_list_drop() {
    // Long enough that a recursive drop would overflow the stack.
    let list: SinglyLinkedList<_> = (0..200_000).collect();
    assert_eq!(list.len(), 200_000);
    drop(list);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    drop(list.remove(2));
    drop(list.pop_back());
    assert_eq!(counter.count(), 2);

    list.clear();
    assert_eq!(counter.count(), 6, "Clearing should drop every element.");
    assert!(list.is_empty());
}
