//! Linear collections: linked lists, a ring buffer queue, a growable vector and the stack / queue
//! adapters built over them.
//!
//! # Purpose
//! This crate implements the classic linear data structures from scratch, to understand them
//! properly rather than lean on [`std::collections`]. None of the collections here use [`Vec`]
//! internally; the linked types manage their own node allocations and
//! [`Vector`](collections::contiguous::Vector) manages its own buffer.
//!
//! # Method
//! The core types are the doubly linked [`LinkedList`](collections::linked::LinkedList) and the
//! fixed-capacity [`RingQueue`](collections::circ::RingQueue). Indexed operations on the list walk
//! from whichever end is closer. The ring queue maps logical positions onto a fixed backing store
//! modulo its capacity and never reallocates.
//!
//! [`brackets`] is a small consumer of [`Stack`](collections::adapters::Stack), checking that
//! brackets in a string are balanced.
//!
//! # Error Handling
//! Every fallible operation has a `try_` form returning a [`Result`] with a strongly typed error
//! from [`error`]. The plain form either returns an [`Option`] (for pops and peeks, where emptiness
//! is ordinary) or panics with the error's message (for out of range indices and full queues, which
//! are bugs in the caller). A failed operation never leaves a collection partially modified.
//!
//! # Dependencies
//! - `derive_more` for the error types, which would otherwise be very repetitive.
//! - `tracing` for structural events such as reallocations. The library never installs a
//!   subscriber; the `linear-demo` binary does.
//!
//! # Features
//! Each collection family sits behind a Cargo feature (`linked`, `circ`, `contiguous` and
//! `adapters`, all enabled by `collections-all`). `brackets` pulls in `adapters`, and `demo` builds
//! the binary.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "brackets")]
pub mod brackets;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error;
