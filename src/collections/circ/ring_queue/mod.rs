//! A module containing [`RingQueue`] and its iterators.
//!
//! [`RingQueue`] is also re-exported under the parent module.

mod iter;
mod ring_queue;
mod tests;

pub use iter::*;
pub use ring_queue::*;
