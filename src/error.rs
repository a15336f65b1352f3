use thiserror::Error;

/// Errors returned by fallible [`RedBlackTree`](crate::RedBlackTree) queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A [`select()`](crate::RedBlackTree::select) call asked for a rank that
    /// does not exist in the tree.
    #[error("rank {index} is out of bounds for a tree of {len} entries")]
    RankOutOfBounds {
        /// The requested zero-based rank.
        index: usize,
        /// The number of entries in the tree at the time of the call.
        len: usize,
    },
}

/// A structural invariant violation reported by
/// [`validate()`](crate::RedBlackTree::validate).
///
/// A tree only ever mutated through the public API never produces one of
/// these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is coloured red.
    #[error("root node is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("red node at depth {depth} has a red child")]
    ConsecutiveReds {
        /// Depth of the parent node (the root is at depth 0).
        depth: usize,
    },

    /// A red node is linked as the right child of its parent.
    #[error("right-leaning red link at depth {depth}")]
    RightLeaningRed {
        /// Depth of the red right child.
        depth: usize,
    },

    /// The two subtrees of a node carry a different number of black nodes.
    #[error("unbalanced black height: left {left}, right {right}")]
    UnbalancedBlacks {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// An in-order walk yielded a key that is not strictly greater than the
    /// key before it.
    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// Zero-based position of the misplaced key in the in-order walk.
        position: usize,
    },

    /// A cached subtree size does not match the number of nodes beneath it.
    #[error("cached subtree size {cached} does not match actual size {actual}")]
    SizeMismatch {
        /// The size stored in the node.
        cached: usize,
        /// The number of nodes actually in the subtree.
        actual: usize,
    },
}
