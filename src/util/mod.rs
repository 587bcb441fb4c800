//! Crate-internal helpers shared between the collections.
#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod fmt;
pub mod option;
#[cfg(test)]
pub mod panic;
pub mod result;
