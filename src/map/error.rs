//! Error types reported by [`TreeMap::validate`](super::TreeMap::validate).
//!
//! Ordinary map operations never fail; these errors only describe a tree
//! that breaks one of the left-leaning red-black invariants, which can
//! happen when the key type's `Ord` implementation is not a total order.

use thiserror::Error;

/// A broken left-leaning red-black invariant.
///
/// `depth` counts links from the root, so the root itself is at depth 0.
///
/// # Examples
///
/// ```rust
/// use llrb_map::map::InvariantViolation;
///
/// let error = InvariantViolation::RedRightLink { depth: 2 };
/// assert_eq!(format!("{error}"), "red right link at depth 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root is attached through a red link.
    #[error("root link is red")]
    RedRoot,

    /// A right child is attached through a red link.
    #[error("red right link at depth {depth}")]
    RedRightLink {
        /// Depth of the red right child.
        depth: usize,
    },

    /// A red node has a red child.
    #[error("two consecutive red links ending at depth {depth}")]
    ConsecutiveRedLinks {
        /// Depth of the lower of the two red nodes.
        depth: usize,
    },

    /// A node has both children attached through red links.
    #[error("node at depth {depth} has two red children")]
    TwoRedChildren {
        /// Depth of the parent node.
        depth: usize,
    },

    /// The two subtrees of a node cross different numbers of black links.
    #[error("unbalanced black height at depth {depth}: left {left}, right {right}")]
    UnbalancedBlackHeight {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
        /// Depth of the node whose subtrees disagree.
        depth: usize,
    },

    /// A key is outside the range allowed by its ancestors.
    #[error("key out of symmetric order at depth {depth}")]
    OutOfOrder {
        /// Depth of the misplaced node.
        depth: usize,
    },

    /// The entry counter disagrees with the number of reachable nodes.
    #[error("length mismatch: recorded {recorded}, reachable {reachable}")]
    LengthMismatch {
        /// The value reported by `len()`.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
}
