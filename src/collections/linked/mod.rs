//! Linked collection types. Primarily revolves around the doubly linked [`LinkedList`], with
//! [`SinglyLinkedList`] as a simpler forward-only counterpart.

pub mod list;
pub mod singly;

#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
