use std::ptr;
use std::fmt;

use crate::slab::{Ptr, Slab};

use super::{leftmost, predecessor, rightmost, successor, InnerNode};

/// A detached node, holding only its key
///
/// Build one of these and hand it to [`Tree::insert`](super::Tree::insert). Ownership comes back
/// as a `Node` again when the node is removed with [`Tree::delete`](super::Tree::delete).
///
/// Nodes compare by their keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node<K> {
    key: K,
}

impl<K> Node<K> {
    /// Creates a new detached node with the given key
    pub fn new(key: K) -> Self {
        Self {key}
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the key of this node, consuming the node in the process
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K> From<K> for Node<K> {
    fn from(key: K) -> Self {
        Self::new(key)
    }
}

/// A handle to a node that is currently attached to a tree
///
/// Handles stay valid until the node they name is deleted. Once the node is deleted, its slot may
/// be reused by a later insertion, at which point the old handle names the new node. Discard the
/// handles of deleted nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) Ptr);

/// A single attached node of the binary search tree
///
/// Gives read-only access to the key and to the relations the tree maintains for this node. Two
/// `NodeRef`s are equal if they refer to the same node of the same tree.
pub struct NodeRef<'a, K> {
    nodes: &'a Slab<InnerNode<K>>,
    ptr: Ptr,
    node: &'a InnerNode<K>,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K: fmt::Debug> fmt::Debug for NodeRef<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the neighbouring keys, so a long chain of nodes can't overflow the stack
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("left", &self.left().map(|node| node.key()))
            .field("right", &self.right().map(|node| node.key()))
            .field("parent", &self.parent().map(|node| node.key()))
            .finish()
    }
}

impl<'a, K> PartialEq for NodeRef<'a, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.ptr == other.ptr
    }
}

impl<'a, K> Eq for NodeRef<'a, K> {}

impl<'a, K> NodeRef<'a, K> {
    /// Creates a new `NodeRef` for a pointer that is known to be attached
    ///
    /// Panics if `ptr` does not refer to a node in `nodes`.
    pub(super) fn new(nodes: &'a Slab<InnerNode<K>>, ptr: Ptr) -> Self {
        Self {nodes, ptr, node: &nodes[ptr]}
    }

    /// Creates a new `NodeRef`, or returns `None` if `ptr` is null or not attached
    pub(super) fn at(nodes: &'a Slab<InnerNode<K>>, ptr: Ptr) -> Option<Self> {
        let node = nodes.get(ptr)?;
        Some(Self {nodes, ptr, node})
    }

    /// Returns the handle of this node
    pub fn id(&self) -> NodeId {
        NodeId(self.ptr)
    }

    /// Returns the key of this node
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        !self.node.left.is_null()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        !self.node.right.is_null()
    }

    /// Returns true if this node is the root of its tree
    pub fn is_root(&self) -> bool {
        self.node.parent.is_null()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        Self::at(self.nodes, self.node.left)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        Self::at(self.nodes, self.node.right)
    }

    /// Returns the parent of this node, or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        Self::at(self.nodes, self.node.parent)
    }

    /// Returns the node with the smallest key in the subtree rooted at this node
    pub fn minimum(&self) -> Self {
        Self::new(self.nodes, leftmost(self.nodes, self.ptr))
    }

    /// Returns the node with the largest key in the subtree rooted at this node
    pub fn maximum(&self) -> Self {
        Self::new(self.nodes, rightmost(self.nodes, self.ptr))
    }

    /// Returns the in-order successor of this node, or `None` if this is the last node
    pub fn next(&self) -> Option<Self> {
        Self::at(self.nodes, successor(self.nodes, self.ptr))
    }

    /// Returns the in-order predecessor of this node, or `None` if this is the first node
    pub fn previous(&self) -> Option<Self> {
        Self::at(self.nodes, predecessor(self.nodes, self.ptr))
    }
}
