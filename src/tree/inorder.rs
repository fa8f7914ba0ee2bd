use std::iter::FusedIterator;

use crate::slab::{Ptr, Slab};

use super::{InnerNode, NodeRef};

pub struct IterInorder<'a, K> {
    nodes: &'a Slab<InnerNode<K>>,
    stack: Vec<Ptr>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K> IterInorder<'a, K> {
    pub(super) fn new(nodes: &'a Slab<InnerNode<K>>, root: Ptr) -> Self {
        let mut iter = Self {nodes, stack: Vec::new()};
        iter.push_left_edge(root);
        iter
    }

    /// Pushes `current` and every left descendant below it
    fn push_left_edge(&mut self, mut current: Ptr) {
        let nodes = self.nodes;
        while !current.is_null() {
            self.stack.push(current);
            current = nodes[current].left;
        }
    }
}

impl<'a, K> Iterator for IterInorder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let top_ptr = self.stack.pop()?;
        let node = NodeRef::new(self.nodes, top_ptr);

        let right = self.nodes[top_ptr].right;
        self.push_left_edge(right);

        Some(node)
    }
}

impl<'a, K> FusedIterator for IterInorder<'a, K> {}
