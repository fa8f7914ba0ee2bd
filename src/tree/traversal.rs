use std::iter::FusedIterator;

use super::{IterInorder, IterPostorder, IterPreorder, NodeRef};

/// The order in which a traversal visits each node relative to its subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left subtree, then the node, then the right subtree (sorted order)
    InOrder,
    /// The node, then its left subtree, then its right subtree
    PreOrder,
    /// Left subtree, then right subtree, then the node
    PostOrder,
}

/// A traversal in any of the supported orders
///
/// Returned by [`Tree::iter`](super::Tree::iter).
pub enum Traversal<'a, K> {
    InOrder(IterInorder<'a, K>),
    PreOrder(IterPreorder<'a, K>),
    PostOrder(IterPostorder<'a, K>),
}

impl<'a, K> Traversal<'a, K> {
    /// Returns the order of this traversal
    pub fn order(&self) -> TraversalOrder {
        match self {
            Traversal::InOrder(_) => TraversalOrder::InOrder,
            Traversal::PreOrder(_) => TraversalOrder::PreOrder,
            Traversal::PostOrder(_) => TraversalOrder::PostOrder,
        }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::InOrder(iter) => iter.next(),
            Traversal::PreOrder(iter) => iter.next(),
            Traversal::PostOrder(iter) => iter.next(),
        }
    }
}

impl<'a, K> FusedIterator for Traversal<'a, K> {}
