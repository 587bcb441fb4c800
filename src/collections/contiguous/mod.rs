//! Contiguous collection types. Namely [`Vector`], a growable array that stores its elements in a
//! single allocation.
#![warn(missing_docs)]

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
