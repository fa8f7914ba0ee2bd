use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::{InnerNode, NodeRef};

pub struct IterPreorder<'a, K> {
    nodes: &'a Slab<InnerNode<K>>,
    stack: Vec<Ptr>,
}

impl<'a, K> IterPreorder<'a, K> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<K>>, root: Ptr) -> Self {
        let stack = if root.is_null() { Vec::new() } else { vec![root] };
        Self {nodes, stack}
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, K> Iterator for IterPreorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let top_ptr = self.stack.pop()?;
        let node = &self.nodes[top_ptr];

        // Right goes on first so that the left subtree is visited first
        if !node.right.is_null() {
            self.stack.push(node.right);
        }
        if !node.left.is_null() {
            self.stack.push(node.left);
        }

        Some(NodeRef::new(self.nodes, top_ptr))
    }
}

impl<'a, K> FusedIterator for IterPreorder<'a, K> {}
