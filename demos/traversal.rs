//! Builds a tree from the keys given on the command line and logs each traversal order.
//!
//! ```text
//! RUST_LOG=info cargo run --example traversal -- 5 3 8 1 4 7 9
//! ```

use std::env;
use std::error::Error;

use flexi_logger::Logger;
use log::info;

use linked_bst::{Node, TraversalOrder, Tree};

const DEFAULT_KEYS: &[i32] = &[5, 3, 8, 1, 4, 7, 9];

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut keys = env::args().skip(1)
        .map(|arg| arg.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()?;
    if keys.is_empty() {
        keys = DEFAULT_KEYS.to_vec();
    }

    let mut tree = Tree::with_capacity(keys.len());
    for key in keys {
        tree.insert(Node::new(key));
    }

    let orders = [
        ("in order", TraversalOrder::InOrder),
        ("preorder", TraversalOrder::PreOrder),
        ("postorder", TraversalOrder::PostOrder),
    ];
    for &(name, order) in &orders {
        info!("Traversing BST - {}", name);
        tree.traverse(order, |node| info!("{} -> current node: {}", name, node.key()));
    }

    info!("smallest key {}, largest key {}", tree.minimum()?.key(), tree.maximum()?.key());

    Ok(())
}
