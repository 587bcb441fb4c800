//! A module containing the doubly linked [`LinkedList`] and associated types.
//!
//! Other included types provide owned and borrowed iteration from either end of a list.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod length;
mod linked_list;
mod node;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
