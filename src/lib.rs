//! # llrb-map
//!
//! An ordered key-value map backed by a left-leaning red-black tree.
//!
//! ## Overview
//!
//! [`TreeMap`](map::TreeMap) keeps its entries in key order and answers
//! every query in time proportional to the tree height, which the
//! left-leaning red-black invariants bound by `2 * log2(n + 1)`:
//!
//! - **Insertion**: `put` overwrites an existing key or inserts a red leaf
//! - **Lookup**: `get`, `get_mut`, `contains_key`
//! - **Deletion**: `remove` hands back the previous value
//! - **Navigation**: `min`, `max`, `min_value`, `max_value`, `floor`, `ceil`
//!
//! Absence is always reported with `None`; no operation on the map panics.
//!
//! ## Feature Flags
//!
//! - `strict-invariants`: re-validate the whole tree after every mutation
//!   in builds with debug assertions
//!
//! ## Example
//!
//! ```rust
//! use llrb_map::prelude::*;
//!
//! let mut map = TreeMap::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     map.put(key, key * 10);
//! }
//!
//! assert_eq!(map.min(), Some(&1));
//! assert_eq!(map.floor(&6), Some(&5));
//! assert_eq!(map.ceil(&6), Some(&7));
//! assert_eq!(map.remove(&5), Some(50));
//! assert_eq!(map.len(), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the map, its contract trait and the validation types.
///
/// # Usage
///
/// ```rust
/// use llrb_map::prelude::*;
/// ```
pub mod prelude {
    pub use crate::map::*;
}

pub mod map;
