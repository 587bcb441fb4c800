use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated through Box<T> rather than alloc, because moving out of a Box is the
// simplest way to take the value back off the heap once a node has been unlinked.

/// A non-owning handle to a node. The owning [`LinkedList`](super::LinkedList) decides when the
/// underlying allocation is created and freed; a NodePtr never frees anything by itself.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node and returns it by value.
    ///
    /// # Safety
    /// The pointer must refer to a live node created by [`NodePtr::from_node`], and no other copy
    /// of this NodePtr may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The caller guarantees this node is live and uniquely being reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: Nodes are live for as long as the owning list hands out their pointers, and the
        // list's borrow determines the actual lifetime exposed to callers.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: As for value, with mutable access guarded by a mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: Links are only read while the node is live.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only written by the owning list while it is borrowed mutably.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Links are only read while the node is live.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only written by the owning list while it is borrowed mutably.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
