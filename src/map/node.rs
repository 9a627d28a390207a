//! Tree nodes and the rebalancing primitives shared by insertion and deletion.
//!
//! Every primitive that may change which node sits at the top of a subtree
//! consumes the subtree and returns its new root, so the caller simply
//! stores the result back into the link it took the subtree from.

// =============================================================================
// Color Definition
// =============================================================================

/// The color of the link from a node's parent to the node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub(super) const fn toggled(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// An owned, possibly empty, subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Internal node structure for the left-leaning red-black tree.
#[derive(Clone)]
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) color: Color,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new red node with no children.
    pub(super) const fn new_red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Checks if the link into this node is red.
    pub(super) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }
}

/// Checks if an optional node is red. Empty links are black.
pub(super) fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(Node::is_red)
}

/// Checks if `node` is present and is a 2-node: neither the link into it
/// nor its left link is red.
pub(super) fn is_two_node<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_some_and(|node| !node.is_red() && !is_red(node.left.as_deref()))
}

/// Checks if the left child of `node` has a red left link.
fn has_red_left_grandchild<K, V>(node: &Node<K, V>) -> bool {
    node.left
        .as_deref()
        .is_some_and(|left| is_red(left.left.as_deref()))
}

// =============================================================================
// Rotations and Color Flips
// =============================================================================

//        node                 pivot
//        /  \                 /   \
//       a   (pivot)  ==>  (node)   c
//            /  \          /  \
//           b    c        a    b
//
/// Rotates the subtree left around `node`.
///
/// The pivot inherits the color of `node`, and `node` hangs off the pivot
/// through a red link. A node without a right child is returned unchanged.
pub(super) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    pivot.color = node.color;
    node.color = Color::Red;
    pivot.left = Some(node);
    pivot
}

//          node             pivot
//          /  \             /   \
//     (pivot)  c   ==>     a   (node)
//       /  \                    /  \
//      a    b                  b    c
//
/// Rotates the subtree right around `node`.
///
/// Mirror image of [`rotate_left`].
pub(super) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    pivot.color = node.color;
    node.color = Color::Red;
    pivot.right = Some(node);
    pivot
}

/// Toggles the color of `node` and of both of its children.
pub(super) fn flip_colors<K, V>(node: &mut Node<K, V>) {
    node.color = node.color.toggled();
    if let Some(left) = node.left.as_deref_mut() {
        left.color = left.color.toggled();
    }
    if let Some(right) = node.right.as_deref_mut() {
        right.color = right.color.toggled();
    }
}

// =============================================================================
// Rebalancing
// =============================================================================

/// Restores the local LLRB shape on the way back up from a recursive call.
///
/// Each step looks at the subtree as left by the previous one:
/// 1. a red right link next to a black left link is rotated left,
/// 2. two red left links in a row are rotated right,
/// 3. two red children are split by a color flip.
pub(super) fn fix_up<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(node.right.as_deref()) && !is_red(node.left.as_deref()) {
        node = rotate_left(node);
    }
    if is_red(node.left.as_deref()) && has_red_left_grandchild(&node) {
        node = rotate_right(node);
    }
    if is_red(node.left.as_deref()) && is_red(node.right.as_deref()) {
        flip_colors(&mut node);
    }
    node
}

/// Makes the left child of `node` (or one of its children) red before the
/// deletion descends into it.
///
/// Borrows from a 3-node sibling on the right when there is one; otherwise
/// merges `node` with both children into a temporary 4-node.
pub(super) fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);
    if node
        .right
        .as_deref()
        .is_some_and(|right| is_red(right.left.as_deref()))
    {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        flip_colors(&mut node);
    }
    node
}

/// Makes the right child of `node` (or one of its children) red before the
/// deletion descends into it.
pub(super) fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);
    if has_red_left_grandchild(&node) {
        node = rotate_right(node);
    }
    node
}

// =============================================================================
// Tests
// =============================================================================
