mod node;
mod preorder;
mod inorder;
mod postorder;
mod traversal;

pub use node::*;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use traversal::*;

use std::fmt;
use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

use log::trace;

use crate::error::TreeError;
use crate::slab::{Ptr, Slab};

#[derive(Debug, Clone)]
struct InnerNode<K> {
    key: K,
    left: Ptr,
    right: Ptr,
    /// Back reference only. Null iff this node is the root.
    parent: Ptr,
}

impl<K> InnerNode<K> {
    fn new(key: K, parent: Ptr) -> Self {
        Self {
            key,
            left: Ptr::null(),
            right: Ptr::null(),
            parent,
        }
    }
}

/// Returns the leftmost node of the subtree rooted at `ptr`
fn leftmost<K>(nodes: &Slab<InnerNode<K>>, mut ptr: Ptr) -> Ptr {
    while !nodes[ptr].left.is_null() {
        ptr = nodes[ptr].left;
    }
    ptr
}

/// Returns the rightmost node of the subtree rooted at `ptr`
fn rightmost<K>(nodes: &Slab<InnerNode<K>>, mut ptr: Ptr) -> Ptr {
    while !nodes[ptr].right.is_null() {
        ptr = nodes[ptr].right;
    }
    ptr
}

/// Returns the in-order successor of `ptr`, or null if `ptr` is the last node
fn successor<K>(nodes: &Slab<InnerNode<K>>, ptr: Ptr) -> Ptr {
    let right = nodes[ptr].right;
    if !right.is_null() {
        return leftmost(nodes, right);
    }

    // Climb until we leave a left subtree
    let mut current = ptr;
    let mut parent = nodes[ptr].parent;
    while !parent.is_null() && nodes[parent].right == current {
        current = parent;
        parent = nodes[parent].parent;
    }
    parent
}

/// Returns the in-order predecessor of `ptr`, or null if `ptr` is the first node
fn predecessor<K>(nodes: &Slab<InnerNode<K>>, ptr: Ptr) -> Ptr {
    let left = nodes[ptr].left;
    if !left.is_null() {
        return rightmost(nodes, left);
    }

    let mut current = ptr;
    let mut parent = nodes[ptr].parent;
    while !parent.is_null() && nodes[parent].left == current {
        current = parent;
        parent = nodes[parent].parent;
    }
    parent
}

/// A binary search tree (BST) with parent links
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than or equal to `k`
///
/// Duplicate keys are allowed. A duplicate is always placed in the right subtree of the equal key
/// already in the tree, so duplicates come out of an in-order traversal in insertion order.
///
/// The tree is not balanced. Inserting keys in sorted order produces a tree as tall as it has
/// nodes. None of the operations recurse, so such trees are slow but never overflow the stack.
#[derive(Clone)]
pub struct Tree<K> {
    nodes: Slab<InnerNode<K>>,
    root: Ptr,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self {
            nodes: Slab::new(),
            root: Ptr::null(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_inorder().map(|node| node.key())).finish()
    }
}

impl<K: PartialEq> PartialEq for Tree<K> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may be shaped differently (e.g. if insertion order is
        // different). In-order traversal is guaranteed to produce the keys in sorted order, so
        // compare that instead of the structure.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|(a, b)| a.key().eq(b.key()))
    }
}

impl<K: Eq> Eq for Tree<K> {}

impl<K> Tree<K> {
    /// Creates an empty `Tree`
    ///
    /// The tree is initially created with a capacity of 0, so it will not allocate until it is
    /// first inserted into.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    /// let tree: Tree<i32> = Tree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree with the specified capacity.
    ///
    /// The tree will be able to hold at least `capacity` nodes without reallocating. If `capacity`
    /// is 0, the tree will not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: Ptr::null(),
        }
    }

    /// Returns the number of nodes in the tree
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.nodes.is_empty(), self.root.is_null());
        self.nodes.is_empty()
    }

    /// Returns the number of nodes the tree can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves capacity for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Shrinks the capacity of the tree as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit()
    }

    /// Removes every node from the tree
    ///
    /// All previously returned [`NodeId`]s are invalidated.
    pub fn clear(&mut self) {
        trace!("clearing {} nodes", self.len());
        self.nodes.clear();
        self.root = Ptr::null();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. For a
    /// guaranteed ordering, use the various iteration methods.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        NodeRef::at(&self.nodes, self.root)
    }

    /// Returns the node named by `id`, or `None` if it is no longer attached
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        NodeRef::at(&self.nodes, id.0)
    }

    /// Removes the node named by `id` from the tree and returns it
    ///
    /// The node is unlinked with the classic transplant algorithm. A node with two children is
    /// replaced in its position by its in-order successor (the successor node is moved, its key
    /// is never copied). Every other node keeps its `NodeId`.
    ///
    /// Returns [`TreeError::NotAttached`] if `id` does not name a node in this tree. Note that a
    /// slot freed by a delete may be reused by a later insert, in which case a stale `id` names
    /// that new node instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Node, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let id = tree.insert(Node::new(3));
    /// tree.insert(Node::new(1));
    ///
    /// assert_eq!(tree.delete(id).map(Node::into_key), Ok(3));
    /// assert!(tree.delete(id).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete(&mut self, id: NodeId) -> Result<Node<K>, TreeError> {
        let element = id.0;
        let (left, right) = match self.nodes.get(element) {
            Some(node) => (node.left, node.right),
            None => return Err(TreeError::NotAttached(id)),
        };

        if left.is_null() {
            trace!("delete {:?}: replacing with right subtree", id);
            self.shift(element, right);
        } else if right.is_null() {
            trace!("delete {:?}: replacing with left subtree", id);
            self.shift(element, left);
        } else {
            let next = leftmost(&self.nodes, right);
            trace!("delete {:?}: replacing with successor {:?}", id, NodeId(next));

            if self.nodes[next].parent != element {
                let next_right = self.nodes[next].right;
                self.shift(next, next_right);
                self.nodes[next].right = right;
                self.nodes[right].parent = next;
            }

            self.shift(element, next);
            self.nodes[next].left = left;
            self.nodes[left].parent = next;
        }

        self.nodes.remove(element)
            .map(|node| Node::new(node.key))
            .ok_or(TreeError::NotAttached(id))
    }

    /// Puts `y` in the place `x` occupies under its parent (or at the root)
    ///
    /// `x`'s own links are left untouched.
    fn shift(&mut self, x: Ptr, y: Ptr) {
        let parent = self.nodes[x].parent;
        if parent.is_null() {
            self.root = y;
        } else if self.nodes[parent].left == x {
            self.nodes[parent].left = y;
        } else {
            self.nodes[parent].right = y;
        }

        if let Some(node) = self.nodes.get_mut(y) {
            node.parent = parent;
        }
    }

    /// Returns the node with the smallest key
    ///
    /// Returns [`TreeError::EmptyTree`] if there are no nodes.
    pub fn minimum(&self) -> Result<NodeRef<'_, K>, TreeError> {
        self.root().map(|root| root.minimum()).ok_or(TreeError::EmptyTree)
    }

    /// Returns the node with the largest key
    ///
    /// Returns [`TreeError::EmptyTree`] if there are no nodes.
    pub fn maximum(&self) -> Result<NodeRef<'_, K>, TreeError> {
        self.root().map(|root| root.maximum()).ok_or(TreeError::EmptyTree)
    }

    /// Returns the in-order successor of the node named by `id`
    ///
    /// Returns `None` if that node holds the largest key or is not attached.
    pub fn next(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.get(id)?.next()
    }

    /// Returns the in-order predecessor of the node named by `id`
    ///
    /// Returns `None` if that node holds the smallest key or is not attached.
    pub fn previous(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.get(id)?.previous()
    }

    /// Performs an in-order traversal of the tree (sorted by key)
    pub fn iter(&self) -> IterInorder<'_, K> {
        self.iter_inorder()
    }

    /// Performs a traversal of the tree in the given order
    pub fn iter_order(&self, order: TraversalOrder) -> Traversal<'_, K> {
        match order {
            TraversalOrder::InOrder => Traversal::InOrder(self.iter_inorder()),
            TraversalOrder::PreOrder => Traversal::PreOrder(self.iter_preorder()),
            TraversalOrder::PostOrder => Traversal::PostOrder(self.iter_postorder()),
        }
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<'_, K> {
        IterPreorder::new(&self.nodes, self.root)
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<'_, K> {
        IterInorder::new(&self.nodes, self.root)
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, K> {
        IterPostorder::new(&self.nodes, self.root)
    }

    /// Calls `visitor` once for each node, in the given order
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{linked_bst, TraversalOrder};
    ///
    /// let tree = linked_bst![5, 3, 8];
    /// let mut keys = Vec::new();
    /// tree.traverse(TraversalOrder::PostOrder, |node| keys.push(*node.key()));
    /// assert_eq!(keys, &[3, 8, 5]);
    /// ```
    pub fn traverse<'a, F>(&'a self, order: TraversalOrder, visitor: F)
        where F: FnMut(NodeRef<'a, K>),
    {
        self.iter_order(order).for_each(visitor)
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts a detached node into the binary search tree and returns its handle
    ///
    /// The node is placed at the bottom of the search path for its key. Equal keys go to the
    /// right, so a duplicate is visited after the existing ones by an in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Node, Tree};
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.insert(Node::new(5));
    /// let left = tree.insert(Node::new(2));
    ///
    /// assert_eq!(tree.root().map(|node| node.id()), Some(root));
    /// assert_eq!(tree.get(left).and_then(|node| node.parent()).map(|node| node.id()), Some(root));
    /// ```
    pub fn insert(&mut self, element: Node<K>) -> NodeId {
        let key = element.into_key();

        let mut parent = Ptr::null();
        let mut goes_left = false;
        let mut current = self.root;
        while !current.is_null() {
            parent = current;
            let node = &self.nodes[current];
            goes_left = key < node.key;
            current = if goes_left { node.left } else { node.right };
        }

        let ptr = self.nodes.push(InnerNode::new(key, parent));
        if parent.is_null() {
            trace!("insert: {:?} is the new root", NodeId(ptr));
            self.root = ptr;
        } else if goes_left {
            trace!("insert: {:?} attached left of {:?}", NodeId(ptr), NodeId(parent));
            self.nodes[parent].left = ptr;
        } else {
            trace!("insert: {:?} attached right of {:?}", NodeId(ptr), NodeId(parent));
            self.nodes[parent].right = ptr;
        }

        NodeId(ptr)
    }

    /// Returns the node with the given key, or `None` if no such key exists in the tree
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type. If the key was inserted more than once, the
    /// match closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let tree = linked_bst![String::from("b"), String::from("a")];
    /// assert_eq!(tree.search("a").map(|node| node.key().as_str()), Some("a"));
    /// assert!(tree.search("c").is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(node.key().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node),
            }
        }

        None
    }

    /// Returns `true` if the tree contains a node with the given key
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Removes a node with the given key and returns it, or `None` if the key is not present
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked_bst;
    ///
    /// let mut tree = linked_bst![2, 1, 3];
    /// assert_eq!(tree.remove(&1).map(|node| node.into_key()), Some(1));
    /// assert!(tree.remove(&1).is_none());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Node<K>>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let id = self.search(key)?.id();
        self.delete(id).ok()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = NodeRef<'a, K>;
    type IntoIter = IterInorder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}

impl<K: Ord> Extend<Node<K>> for Tree<K> {
    fn extend<T: IntoIterator<Item = Node<K>>>(&mut self, iter: T) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(Node::new));
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
