//! Linear collection types.
//!
//! # Purpose
//! These types cover the common linear data structures: linked lists in both directions, a fixed
//! capacity ring buffer, a growable contiguous array and the stack / queue adapters built on top of
//! them.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. The linked types can't, so they
//! provide their own indexed access, traversing from whichever end is closer.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
