use crate::tree::NodeId;

/// Errors returned by [`Tree`](crate::Tree) operations whose preconditions were not met
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The tree has no nodes, so there is no minimum or maximum
    #[error("the tree is empty")]
    EmptyTree,

    /// The handle does not name a node that is currently attached to the tree
    #[error("{0:?} is not attached to this tree")]
    NotAttached(NodeId),
}
