//! Whole-tree invariant checking for [`TreeMap`].

use super::error::InvariantViolation;
use super::node::{Node, is_red};
use super::tree_map::TreeMap;

/// Shape statistics of a tree that passed [`TreeMap::validate`].
///
/// # Examples
///
/// ```rust
/// use llrb_map::map::TreeMap;
///
/// let mut map = TreeMap::new();
/// for key in 1..=7 {
///     map.put(key, ());
/// }
///
/// let stats = map.validate().unwrap();
/// assert_eq!(stats.entries(), 7);
/// assert_eq!(stats.black_height(), 3);
/// assert_eq!(stats.height(), 3);
/// assert_eq!(stats.red_links(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    entries: usize,
    black_height: usize,
    height: usize,
    red_links: usize,
}

impl TreeStats {
    /// Number of nodes reachable from the root.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }

    /// Number of black nodes on every path from the root to an empty link,
    /// the root included.
    #[must_use]
    pub const fn black_height(&self) -> usize {
        self.black_height
    }

    /// Number of levels of the tree.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes attached to their parent through a red link.
    #[must_use]
    pub const fn red_links(&self) -> usize {
        self.red_links
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Walks the whole tree and checks every left-leaning red-black
    /// invariant:
    ///
    /// - keys are in symmetric order
    /// - the root link is black
    /// - no right link is red
    /// - no node has two red children
    /// - no two red links are consecutive
    /// - every root-to-leaf path has the same number of black links
    /// - `len()` matches the number of reachable nodes
    ///
    /// The first violation found is returned.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Errors
    ///
    /// Returns the [`InvariantViolation`] describing the first broken rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// for key in (0..100).rev() {
    ///     map.put(key, key);
    /// }
    /// map.remove(&42);
    ///
    /// let stats = map.validate().unwrap();
    /// assert_eq!(stats.entries(), 99);
    /// ```
    pub fn validate(&self) -> Result<TreeStats, InvariantViolation> {
        self.validate_tree().inspect_err(|violation| {
            tracing::debug!(%violation, length = self.len(), "tree failed invariant validation");
        })
    }

    fn validate_tree(&self) -> Result<TreeStats, InvariantViolation> {
        let root = self.root_node();
        if is_red(root) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut stats = TreeStats::default();
        stats.black_height = Self::validate_node(root, None, None, 0, &mut stats)?;

        if stats.entries != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len(),
                reachable: stats.entries,
            });
        }
        Ok(stats)
    }

    /// Checks the subtree rooted at `node`, whose keys must lie strictly
    /// between `lower` and `upper`. Returns its black height.
    fn validate_node<'a>(
        node: Option<&'a Node<K, V>>,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
        depth: usize,
        stats: &mut TreeStats,
    ) -> Result<usize, InvariantViolation> {
        let Some(node_ref) = node else {
            stats.height = stats.height.max(depth);
            return Ok(0);
        };

        let above_lower = lower.is_none_or(|lower| node_ref.key > *lower);
        let below_upper = upper.is_none_or(|upper| node_ref.key < *upper);
        if !(above_lower && below_upper) {
            return Err(InvariantViolation::OutOfOrder { depth });
        }

        let left = node_ref.left.as_deref();
        let right = node_ref.right.as_deref();
        if is_red(left) && is_red(right) {
            return Err(InvariantViolation::TwoRedChildren { depth });
        }
        if is_red(right) {
            return Err(InvariantViolation::RedRightLink { depth: depth + 1 });
        }
        if node_ref.is_red() && is_red(left) {
            return Err(InvariantViolation::ConsecutiveRedLinks { depth: depth + 1 });
        }

        stats.entries += 1;
        if node_ref.is_red() {
            stats.red_links += 1;
        }

        let left_black_height =
            Self::validate_node(left, lower, Some(&node_ref.key), depth + 1, stats)?;
        let right_black_height =
            Self::validate_node(right, Some(&node_ref.key), upper, depth + 1, stats)?;
        if left_black_height != right_black_height {
            return Err(InvariantViolation::UnbalancedBlackHeight {
                left: left_black_height,
                right: right_black_height,
                depth,
            });
        }

        Ok(left_black_height + usize::from(!node_ref.is_red()))
    }
}
