#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ZeroSizedType;

#[test]
fn test_reference_scenario() {
    let mut vec = Vector::new();
    vec.extend([10, 20, 30]);
    assert_eq!(vec.to_string(), "[10, 20, 30]");

    vec.replace(1, 99);
    assert_eq!(vec.to_string(), "[10, 99, 30]");
    assert_eq!(vec[0], 10);
    assert_eq!(vec.len(), 3);

    assert_eq!(vec.remove(1), 99);
    assert_eq!(vec.to_string(), "[10, 30]");
    assert!(!vec.is_empty());
}

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    vec.push(0);
    assert_eq!(vec.cap(), 10, "The first growth should reach the minimum capacity.");

    for i in 1..11 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 20, "Growing past the minimum should double the capacity.");
    assert_eq!(&*vec, (0..11).collect::<Vec<_>>().as_slice());

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 11);
    vec.reserve(4);
    assert_eq!(vec.cap(), 15);
    vec.reserve(2);
    assert_eq!(vec.cap(), 15, "Reserving within capacity shouldn't reallocate.");
    assert_panics!({ vec.reserve(usize::MAX) });
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..25 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 25);
    assert_eq!(vec[24], ZeroSizedType);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.into_iter().count(), 24);
}

#[test]
fn test_out_of_range() {
    let mut vec: Vector<_> = (0..3).collect();

    assert_eq!(vec.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(vec.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_replace(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.get(3), None);
    assert_panics!({ vec.remove(3) }, "Index 3 out of bounds");
    assert_panics!({ vec.insert(4, 0) });
    assert_eq!(&*vec, &[0, 1, 2], "Failed operations shouldn't change the Vector.");

    let mut empty = Vector::<u8>::new();
    assert_eq!(empty.pop(), None);
    assert_eq!(empty.try_insert(0, 7), Ok(()));
}

#[test]
fn test_search() {
    let mut vec: Vector<_> = [Some(1), None, Some(2), None].into_iter().collect();
    assert_eq!(vec.index_of(&None), Some(1));
    assert_eq!(vec.index_of(&Some(3)), None);
    assert!(vec.contains(&Some(2)));

    assert!(vec.remove_item(&None));
    assert!(vec.remove_item(&Some(1)));
    assert!(!vec.remove_item(&Some(1)));
    assert_eq!(&*vec, &[Some(2), None]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(vec.remove(3));
    drop(vec.pop());
    vec.insert(0, counter.clone());
    assert_eq!(counter.count(), 2);

    vec.shrink_to_fit();
    assert_eq!(counter.count(), 2, "Reallocating shouldn't drop any elements.");

    vec.clear();
    assert_eq!(counter.count(), 11, "Clearing should drop every element.");
    assert_eq!(vec.cap(), 9, "Clearing shouldn't change the capacity.");

    vec.extend(iter::repeat_with(|| counter.clone()).take(4));
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.count(), 15, "Dropping an owned iterator should drop the remainder.");
}

#[test]
fn test_equality_and_hash() {
    let vec: Vector<_> = (0_usize..5).collect();

    assert_eq!(vec, vec.clone());
    assert_ne!(vec, [0, 1, 2, 5, 4].into_iter().collect());
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Hashing should match the equivalent slice."
    );
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (0_usize..5).collect();
    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*vec, [0_usize, 2, 4, 6, 8]);

    let mut iter = vec.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_formatting() {
    let vec: Vector<_> = (1..=2).collect();
    assert_eq!(format!("{vec:?}"), "Vector { contents: [1, 2], len: 2, cap: 2 }");
    assert_eq!(Vector::<u8>::new().to_string(), "[]");
}
