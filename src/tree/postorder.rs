use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::{InnerNode, NodeRef};

pub struct IterPostorder<'a, K> {
    nodes: &'a Slab<InnerNode<K>>,
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, K> IterPostorder<'a, K> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<K>>, root: Ptr) -> Self {
        let mut iter = Self {nodes, stack: Vec::new()};
        iter.descend(root);
        iter
    }

    /// Walks down the left edge from `current`, pushing each node's right child (if any) and then
    /// the node itself
    fn descend(&mut self, mut current: Ptr) {
        let nodes = self.nodes;
        while !current.is_null() {
            let node = &nodes[current];

            if !node.right.is_null() {
                self.stack.push(node.right);
            }
            self.stack.push(current);

            current = node.left;
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, K> Iterator for IterPostorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_ptr) = self.stack.pop() {
            let right = self.nodes[current_ptr].right;

            // If the top of the stack is the current node's right child, the right subtree has
            // not been visited yet
            if !right.is_null() && self.stack.last() == Some(&right) {
                // Swap the right child for the current node and walk the right subtree
                self.stack.pop();
                self.stack.push(current_ptr);
                self.descend(right);
            } else {
                return Some(NodeRef::new(self.nodes, current_ptr));
            }
        }

        None
    }
}

impl<'a, K> FusedIterator for IterPostorder<'a, K> {}
