//! An unbalanced binary search tree whose nodes know their parents.
//!
//! Callers build detached [`Node`]s and hand them to a [`Tree`], which links them into place and
//! returns a [`NodeId`] for each. Queries hand back [`NodeRef`]s, read-only views that can walk to
//! the left child, right child, parent, in-order successor and predecessor of a node.
//!
//! ```
//! use linked_bst::{Node, Tree, TraversalOrder};
//!
//! let mut tree = Tree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9].iter().copied() {
//!     tree.insert(Node::new(key));
//! }
//!
//! let sorted: Vec<_> = tree.iter().map(|node| *node.key()).collect();
//! assert_eq!(sorted, &[1, 3, 4, 5, 7, 8, 9]);
//!
//! let five = tree.search(&5).unwrap();
//! assert_eq!(five.next().map(|node| *node.key()), Some(7));
//!
//! let mut preorder = Vec::new();
//! tree.traverse(TraversalOrder::PreOrder, |node| preorder.push(*node.key()));
//! assert_eq!(preorder, &[5, 3, 1, 4, 8, 7, 9]);
//! ```

mod error;
mod slab;
pub mod tree;

pub use error::TreeError;
pub use tree::{Node, NodeId, NodeRef, Traversal, TraversalOrder, Tree};

/// Creates a [`Tree`] containing the given keys, inserted from left to right
#[macro_export(local_inner_macros)]
macro_rules! linked_bst {
    (@single $($x:tt)*) => (());
    (@count $($rest:expr),*) => (<[()]>::len(&[$(linked_bst!(@single $rest)),*]));

    ($($key:expr,)+) => { linked_bst!($($key),+) };
    ($($key:expr),*) => {
        {
            let _cap = linked_bst!(@count $($key),*);
            let mut _tree = $crate::Tree::with_capacity(_cap);
            $(
                let _ = _tree.insert($crate::Node::new($key));
            )*
            _tree
        }
    };
}
