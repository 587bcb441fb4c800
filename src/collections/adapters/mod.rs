//! Collection adapters that restrict a [`LinkedList`](crate::collections::linked::LinkedList) to a
//! single access discipline: [`Stack`] for last-in-first-out and [`Queue`] for first-in-first-out.
//!
//! For a queue with a fixed capacity and no per-element allocation, see
//! [`RingQueue`](crate::collections::circ::RingQueue).

mod queue;
mod stack;

pub use queue::*;
pub use stack::*;
