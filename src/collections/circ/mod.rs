//! Circular collection types, built over a fixed-size backing store whose indices wrap around.
#![warn(missing_docs)]

pub mod ring_queue;

#[doc(inline)]
pub use ring_queue::RingQueue;
