#![cfg(test)]

use std::collections::VecDeque;
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn collect<T: Clone>(queue: &RingQueue<T>) -> Vec<T> {
    queue.iter().cloned().collect()
}

#[test]
fn test_reference_scenario() {
    let mut queue = RingQueue::with_cap(5);
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(&1));

    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.len(), 2);
    assert_eq!(collect(&queue), [2, 3]);
    assert_eq!(queue.to_string(), "[2, 3]");
}

#[test]
fn test_full_and_empty() {
    let mut queue = RingQueue::with_cap(4);
    assert!(queue.is_empty());
    assert_eq!(queue.to_string(), "[]");

    for i in 0..4 {
        assert!(!queue.is_full());
        queue.enqueue(i);
    }
    assert!(queue.is_full());
    assert_eq!(
        queue.try_enqueue(4),
        Err(CollectionFull { cap: 4 }),
        "Enqueueing at capacity should fail."
    );
    assert_panics!({ queue.enqueue(4) }, "full at capacity 4");
    assert_eq!(collect(&queue), [0, 1, 2, 3], "A failed enqueue shouldn't change the queue.");

    for i in 0..4 {
        assert_eq!(queue.dequeue(), Some(i), "Elements should leave in FIFO order.");
    }
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.try_dequeue(), Err(EmptyCollection));
    assert_eq!(queue.try_peek(), Err(EmptyCollection));
    assert_eq!((queue.head, queue.tail, queue.len), (0, 0, 0));
}

#[test]
fn test_wraparound() {
    const CAP: usize = 5;

    for k in 1..CAP {
        let mut queue = RingQueue::with_cap(CAP);
        for i in 0..CAP {
            queue.enqueue(i);
        }
        for i in 0..k {
            assert_eq!(queue.dequeue(), Some(i));
        }
        for i in CAP..CAP + k {
            queue.enqueue(i);
        }

        assert!(queue.is_full());
        assert!(queue.head < CAP && queue.tail < CAP);
        assert_eq!(queue.head, k, "The head should have advanced k slots.");
        assert_eq!(queue.tail, k, "The tail should have wrapped back round to k.");
        assert_eq!(
            collect(&queue),
            (k..CAP + k).collect::<Vec<_>>(),
            "Iteration should follow enqueue order, not slot order."
        );
        assert_eq!(
            queue.iter().rev().copied().collect::<Vec<_>>(),
            (k..CAP + k).rev().collect::<Vec<_>>()
        );
        assert_eq!(queue.get(0), Some(&k));
        assert_eq!(queue.get(CAP - 1), Some(&(CAP + k - 1)));
        assert_eq!(queue.get(CAP), None);
    }
}

#[test]
fn test_capacity_one() {
    let mut queue = RingQueue::with_cap(1);
    for i in 0..3 {
        queue.enqueue(i);
        assert!(queue.is_full());
        assert_eq!(queue.try_enqueue(9), Err(CollectionFull { cap: 1 }));
        assert_eq!(queue.dequeue(), Some(i));
        assert!(queue.is_empty());
    }
}

#[test]
fn test_zero_capacity() {
    assert_eq!(RingQueue::<u8>::try_with_cap(0).err(), Some(ZeroCapacity));
    assert_panics!({ RingQueue::<u8>::with_cap(0) }, "capacity 0");
}

#[test]
fn test_dequeued_slots_are_cleared() {
    let mut queue = RingQueue::with_cap(3);
    queue.enqueue(String::from("a"));
    queue.enqueue(String::from("b"));

    let slot = queue.head;
    assert_eq!(queue.dequeue().as_deref(), Some("a"));
    assert!(queue.slots[slot].is_none(), "The dequeued slot shouldn't keep its value.");
    assert_eq!(
        queue.slots.iter().filter(|slot| slot.is_some()).count(),
        queue.len(),
        "Only live elements should occupy slots."
    );
}

#[test]
fn test_peek_and_iter_do_not_mutate() {
    let mut queue = RingQueue::with_cap(3);
    queue.enqueue('x');
    queue.enqueue('y');
    let before = queue.clone();

    assert_eq!(queue.peek(), Some(&'x'));
    assert_eq!(queue.iter().count(), 2);
    assert_eq!(queue, before);
    assert_eq!((queue.head, queue.tail), (before.head, before.tail));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut queue = RingQueue::with_cap(6);
    for item in iter::repeat_with(|| counter.clone()).take(6) {
        queue.enqueue(item);
    }

    drop(queue.dequeue());
    assert_eq!(counter.count(), 1);

    queue.clear();
    assert_eq!(counter.count(), 6, "Clearing should drop every element.");
    assert!(queue.is_empty());

    queue.enqueue(counter.clone());
    queue.enqueue(counter.clone());
    drop(queue.into_iter());
    assert_eq!(counter.count(), 8, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_formatting() {
    let mut queue = RingQueue::with_cap(3);
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(format!("{queue:?}"), "RingQueue { contents: [1, 2], len: 2, cap: 3 }");
}

#[derive(Debug, Clone)]
enum QueueOp {
    Enqueue(u16),
    Dequeue,
    Peek,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        any::<u16>().prop_map(QueueOp::Enqueue),
        Just(QueueOp::Dequeue),
        Just(QueueOp::Peek),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The ring buffer behaves like a bounded VecDeque, whatever the head and tail positions.
    #[test]
    fn prop_matches_bounded_model(
        cap in 1_usize..8,
        ops in prop::collection::vec(queue_op(), 0..64),
    ) {
        let mut queue = RingQueue::with_cap(cap);
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(v) => {
                    let accepted = queue.try_enqueue(v).is_ok();
                    prop_assert_eq!(accepted, model.len() < cap);
                    if accepted { model.push_back(v); }
                },
                QueueOp::Dequeue => prop_assert_eq!(queue.dequeue(), model.pop_front()),
                QueueOp::Peek => prop_assert_eq!(queue.peek(), model.front()),
            }

            prop_assert!(queue.head < cap && queue.tail < cap);
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_full(), model.len() == cap);
            prop_assert_eq!(collect(&queue), model.iter().copied().collect::<Vec<_>>());
        }
    }
}
