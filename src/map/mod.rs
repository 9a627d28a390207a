//! Ordered map backed by a left-leaning red-black tree.
//!
//! This module provides:
//!
//! - [`TreeMap`]: the balanced ordered map
//! - [`OrderedMap`]: the operation contract the map fulfils
//! - [`TreeStats`] and [`InvariantViolation`]: the result of
//!   [`TreeMap::validate`]
//!
//! # Left-Leaning Red-Black Trees
//!
//! A left-leaning red-black tree (LLRB) is a binary search tree whose links
//! are colored red or black. A red link glues a node to its parent so that
//! the pair forms a single 3-node of the corresponding 2-3 tree. The tree
//! keeps the following invariants after every mutation:
//!
//! 1. Keys are in symmetric (BST) order
//! 2. Red links lean left; a right child is never red
//! 3. No node has two red children
//! 4. Every path from the root to an empty link crosses the same number of
//!    black links
//! 5. No path contains two consecutive red links
//!
//! # Examples
//!
//! ```rust
//! use llrb_map::map::{OrderedMap, TreeMap};
//!
//! fn smallest_above<M: OrderedMap<i32, &'static str>>(map: &M, key: i32) -> Option<i32> {
//!     map.ceil(&key).copied()
//! }
//!
//! let mut map = TreeMap::new();
//! map.put(10, "ten");
//! map.put(20, "twenty");
//!
//! assert_eq!(smallest_above(&map, 11), Some(20));
//! assert!(map.validate().is_ok());
//! ```

mod error;
mod node;
mod ordered_map;
mod tree_map;
mod validation;

pub use error::InvariantViolation;
pub use ordered_map::OrderedMap;
pub use tree_map::TreeMap;
pub use validation::TreeStats;
