//! Ordered map based on a left-leaning red-black tree.
//!
//! This module provides [`TreeMap`], a mutable ordered map whose nodes own
//! their children outright.
//!
//! # Overview
//!
//! - O(log N) `put`, `get`, `get_mut`, `contains_key`
//! - O(log N) `remove`
//! - O(log N) `min`/`max`, `min_value`/`max_value`
//! - O(log N) `floor`/`ceil`
//! - O(1) `len` and `is_empty`
//!
//! # Internal Structure
//!
//! Every mutating step takes a subtree by value and hands back its new root.
//! Insertion descends to an empty link, creates a red leaf there and repairs
//! the shape with `fix_up` on the way back. Deletion first forces the root
//! link red, then pushes red links down the search path with
//! `move_red_left` and `move_red_right` so the node finally unlinked is
//! never a lone 2-node, and repairs the shape on the way back as well.

use super::node::{
    Color, Link, Node, fix_up, is_red, is_two_node, move_red_left, move_red_right, rotate_right,
};
use super::ordered_map::OrderedMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map backed by a left-leaning red-black tree.
///
/// Keys must implement `Ord`. Putting an existing key replaces its value;
/// every lookup reports a missing key with `None`.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `put`              | O(log N)   |
/// | `get`/`get_mut`    | O(log N)   |
/// | `contains_key`     | O(log N)   |
/// | `remove`           | O(log N)   |
/// | `min`/`max`        | O(log N)   |
/// | `floor`/`ceil`     | O(log N)   |
/// | `len`/`is_empty`   | O(1)       |
/// | `height`           | O(N)       |
///
/// # Examples
///
/// ```rust
/// use llrb_map::map::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.put("b", 2);
/// map.put("a", 1);
/// map.put("c", 3);
///
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.min(), Some(&"a"));
/// assert_eq!(map.max_value(), Some(&3));
/// assert_eq!(map.remove("b"), Some(2));
/// assert_eq!(map.to_string(), "{a: 1, c: 3}");
/// ```
#[derive(Clone)]
pub struct TreeMap<K, V> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
}

static_assertions::assert_impl_all!(TreeMap<i32, String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(TreeMap<std::rc::Rc<i32>, i32>: Send, Sync);

impl<K, V> TreeMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "one");
    /// map.put(2, "two");
    /// map.put(1, "uno");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[doc(alias = "size")]
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every entry from the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "one");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.min(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
        tracing::trace!("cleared map");
    }

    /// Returns the number of levels of the tree, `0` for an empty map.
    ///
    /// The left-leaning red-black invariants keep this at or below
    /// `2 * log2(len + 1)`.
    ///
    /// # Complexity
    ///
    /// O(N)
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
    /// assert_eq!(map.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_deref())
    }

    fn height_of(node: Option<&Node<K, V>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::height_of(node_ref.left.as_deref())
                .max(Self::height_of(node_ref.right.as_deref()))
        })
    }

    /// Returns the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.min(), None);
    ///
    /// map.put(3, "three");
    /// map.put(1, "one");
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        Self::min_from_node(self.root.as_deref()).map(|node| &node.key)
    }

    /// Returns the value stored under the smallest key.
    #[must_use]
    pub fn min_value(&self) -> Option<&V> {
        Self::min_from_node(self.root.as_deref()).map(|node| &node.value)
    }

    /// Recursive helper for min.
    fn min_from_node(node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
        node.and_then(|node_ref| {
            node_ref.left.as_deref().map_or_else(
                || Some(node_ref),
                |left| Self::min_from_node(Some(left)),
            )
        })
    }

    /// Returns the largest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(3, "three");
    /// map.put(1, "one");
    /// assert_eq!(map.max(), Some(&3));
    /// assert_eq!(map.max_value(), Some(&"three"));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        Self::max_from_node(self.root.as_deref()).map(|node| &node.key)
    }

    /// Returns the value stored under the largest key.
    #[must_use]
    pub fn max_value(&self) -> Option<&V> {
        Self::max_from_node(self.root.as_deref()).map(|node| &node.value)
    }

    /// Recursive helper for max.
    fn max_from_node(node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
        node.and_then(|node_ref| {
            node_ref.right.as_deref().map_or_else(
                || Some(node_ref),
                |right| Self::max_from_node(Some(right)),
            )
        })
    }

    /// Returns the root node, for the validator.
    pub(super) fn root_node(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Collects references to all entries in key order.
    fn sorted_entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        Self::collect_entries_in_order(self.root.as_deref(), &mut entries);
        entries
    }

    fn collect_entries_in_order<'a>(
        node: Option<&'a Node<K, V>>,
        entries: &mut Vec<(&'a K, &'a V)>,
    ) {
        if let Some(node_ref) = node {
            Self::collect_entries_in_order(node_ref.left.as_deref(), entries);
            entries.push((&node_ref.key, &node_ref.value));
            Self::collect_entries_in_order(node_ref.right.as_deref(), entries);
        }
    }

    /// Builds a map from a hand-made tree, which may break the invariants.
    #[cfg(test)]
    pub(super) const fn from_raw_parts(root: Link<K, V>, length: usize) -> Self {
        Self { root, length }
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_from_node(self.root.as_deref(), key)
    }

    /// Recursive helper for get.
    fn get_from_node<'a, Q>(node: Option<&'a Node<K, V>>, key: &Q) -> Option<&'a V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match key.cmp(node_ref.key.borrow()) {
            Ordering::Less => Self::get_from_node(node_ref.left.as_deref(), key),
            Ordering::Greater => Self::get_from_node(node_ref.right.as_deref(), key),
            Ordering::Equal => Some(&node_ref.value),
        })
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.get(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_mut_from_node(self.root.as_deref_mut(), key)
    }

    fn get_mut_from_node<'a, Q>(node: Option<&'a mut Node<K, V>>, key: &Q) -> Option<&'a mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match key.cmp(node_ref.key.borrow()) {
            Ordering::Less => Self::get_mut_from_node(node_ref.left.as_deref_mut(), key),
            Ordering::Greater => Self::get_mut_from_node(node_ref.right.as_deref_mut(), key),
            Ordering::Equal => Some(&mut node_ref.value),
        })
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put("key".to_string(), 42);
    ///
    /// assert!(map.contains_key("key"));
    /// assert!(!map.contains_key("other"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contains the key, only the value is replaced and
    /// the length is unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "one");
    /// map.put(1, "ONE");
    ///
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) {
        let (mut root, added) = Self::put_into_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);

        if added {
            self.length += 1;
            tracing::trace!(length = self.length, "inserted new key");
        }

        #[cfg(feature = "strict-invariants")]
        self.debug_validate();
    }

    /// Recursive helper for put.
    /// Returns (`new_subtree`, `was_added`) where `was_added` is true if a new entry was added.
    fn put_into_node(node: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, bool) {
        let Some(mut node) = node else {
            return (Box::new(Node::new_red(key, value)), true);
        };

        let added = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, added) = Self::put_into_node(node.left.take(), key, value);
                node.left = Some(left);
                added
            }
            Ordering::Greater => {
                let (right, added) = Self::put_into_node(node.right.take(), key, value);
                node.right = Some(right);
                added
            }
            Ordering::Equal => {
                node.value = value;
                false
            }
        };

        (fix_up(node), added)
    }

    /// Removes a key from the map, returning its value.
    ///
    /// A missing key leaves the tree untouched.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "one");
    /// map.put(2, "two");
    ///
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            return None;
        }

        let mut root = self.root.take()?;
        root.color = Color::Red;
        let (new_root, removed) = Self::remove_from_node(root, key);

        // Make root black if it exists
        self.root = new_root.map(|mut node| {
            node.color = Color::Black;
            node
        });

        if removed.is_some() {
            self.length -= 1;
            tracing::trace!(length = self.length, "removed key");
        }

        #[cfg(feature = "strict-invariants")]
        self.debug_validate();

        removed
    }

    /// Recursive helper for remove.
    ///
    /// The target key is known to be present in the subtree.
    fn remove_from_node<Q>(mut node: Box<Node<K, V>>, key: &Q) -> (Link<K, V>, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = if key.cmp(node.key.borrow()) == Ordering::Less {
            if is_two_node(node.left.as_deref()) {
                node = move_red_left(node);
            }
            match node.left.take() {
                Some(left) => {
                    let (left, removed) = Self::remove_from_node(left, key);
                    node.left = left;
                    removed
                }
                None => None,
            }
        } else {
            if is_red(node.left.as_deref()) {
                node = rotate_right(node);
            }

            if key.cmp(node.key.borrow()) == Ordering::Equal && node.right.is_none() {
                let Node { value, .. } = *node;
                return (None, Some(value));
            }

            if is_two_node(node.right.as_deref()) {
                node = move_red_right(node);
            }

            match node.right.take() {
                Some(right) if key.cmp(node.key.borrow()) == Ordering::Equal => {
                    // Replace this entry with its in-order successor
                    let (right, successor) = Self::remove_min(right);
                    node.right = right;
                    let Node {
                        key: successor_key,
                        value: successor_value,
                        ..
                    } = *successor;
                    node.key = successor_key;
                    Some(mem::replace(&mut node.value, successor_value))
                }
                Some(right) => {
                    let (right, removed) = Self::remove_from_node(right, key);
                    node.right = right;
                    removed
                }
                None => None,
            }
        };

        (Some(fix_up(node)), removed)
    }

    /// Detaches the leftmost node of the subtree.
    /// Returns (`new_subtree`, `detached_minimum`).
    fn remove_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, Box<Node<K, V>>) {
        if is_two_node(node.left.as_deref()) {
            node = move_red_left(node);
        }

        match node.left.take() {
            None => (node.right.take(), node),
            Some(left) => {
                let (left, minimum) = Self::remove_min(left);
                node.left = left;
                (Some(fix_up(node)), minimum)
            }
        }
    }

    /// Returns the largest key less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// for key in [10, 20, 30] {
    ///     map.put(key, ());
    /// }
    ///
    /// assert_eq!(map.floor(&25), Some(&20));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::floor_from_node(self.root.as_deref(), key, None)
    }

    /// Recursive helper for floor; `candidate` is the best key seen so far.
    fn floor_from_node<'a, Q>(
        node: Option<&'a Node<K, V>>,
        key: &Q,
        candidate: Option<&'a K>,
    ) -> Option<&'a K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node_ref) = node else {
            return candidate;
        };
        match key.cmp(node_ref.key.borrow()) {
            Ordering::Less => Self::floor_from_node(node_ref.left.as_deref(), key, candidate),
            Ordering::Greater => {
                Self::floor_from_node(node_ref.right.as_deref(), key, Some(&node_ref.key))
            }
            Ordering::Equal => Some(&node_ref.key),
        }
    }

    /// Returns the smallest key greater than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb_map::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// for key in [10, 20, 30] {
    ///     map.put(key, ());
    /// }
    ///
    /// assert_eq!(map.ceil(&15), Some(&20));
    /// assert_eq!(map.ceil(&30), Some(&30));
    /// assert_eq!(map.ceil(&35), None);
    /// ```
    #[must_use]
    pub fn ceil<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::ceil_from_node(self.root.as_deref(), key, None)
    }

    /// Recursive helper for ceil; `candidate` is the best key seen so far.
    fn ceil_from_node<'a, Q>(
        node: Option<&'a Node<K, V>>,
        key: &Q,
        candidate: Option<&'a K>,
    ) -> Option<&'a K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node_ref) = node else {
            return candidate;
        };
        match key.cmp(node_ref.key.borrow()) {
            Ordering::Greater => Self::ceil_from_node(node_ref.right.as_deref(), key, candidate),
            Ordering::Less => {
                Self::ceil_from_node(node_ref.left.as_deref(), key, Some(&node_ref.key))
            }
            Ordering::Equal => Some(&node_ref.key),
        }
    }

    #[cfg(feature = "strict-invariants")]
    fn debug_validate(&self) {
        let result = self.validate();
        debug_assert!(
            result.is_ok(),
            "LLRB invariants violated after mutation: {result:?}"
        );
    }
}

// =============================================================================
// OrderedMap Implementation
// =============================================================================

impl<K: Ord, V> OrderedMap<K, V> for TreeMap<K, V> {
    fn put(&mut self, key: K, value: V) {
        self.put(key, value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn min(&self) -> Option<&K> {
        self.min()
    }

    fn min_value(&self) -> Option<&V> {
        self.min_value()
    }

    fn max(&self) -> Option<&K> {
        self.max()
    }

    fn max_value(&self) -> Option<&V> {
        self.max_value()
    }

    fn floor(&self, key: &K) -> Option<&K> {
        self.floor(key)
    }

    fn ceil(&self, key: &K) -> Option<&K> {
        self.ceil(key)
    }

    fn len(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for TreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.sorted_entries() == other.sorted_entries()
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.sorted_entries()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self.sorted_entries() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
