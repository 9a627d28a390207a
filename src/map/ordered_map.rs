//! The operation contract of an ordered map.

/// An ordered key-value map with overwrite-on-put semantics.
///
/// Every lookup reports absence with `None`. Implementors keep their keys
/// in the order given by `Ord`, so the navigation queries (`min`, `max`,
/// `floor`, `ceil`) are answered without scanning.
///
/// # Laws
///
/// For any map `m`, key `k` and values `v`, `w`:
///
/// - `m.put(k, v); m.get(&k) == Some(&v)`
/// - `m.put(k, v); m.put(k, w); m.get(&k) == Some(&w)` and the second
///   `put` leaves `len()` unchanged
/// - `m.remove(&k); m.get(&k) == None`
/// - `m.floor(&k)` is the largest key `<= k`, `m.ceil(&k)` the smallest
///   key `>= k`
///
/// # Examples
///
/// ```rust
/// use llrb_map::map::{OrderedMap, TreeMap};
///
/// fn describe<M: OrderedMap<u32, char>>(map: &M) -> String {
///     match (map.min(), map.max()) {
///         (Some(low), Some(high)) => format!("{} entries in {low}..={high}", map.len()),
///         _ => "empty".to_string(),
///     }
/// }
///
/// let mut map = TreeMap::new();
/// assert_eq!(describe(&map), "empty");
///
/// map.put(7, 'g');
/// map.put(2, 'b');
/// assert_eq!(describe(&map), "2 entries in 2..=7");
/// ```
pub trait OrderedMap<K: Ord, V> {
    /// Inserts `value` under `key`, replacing the value of an existing key.
    fn put(&mut self, key: K, value: V);

    /// Returns the value stored under `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Removes `key` and returns its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the smallest key.
    fn min(&self) -> Option<&K>;

    /// Returns the value stored under the smallest key.
    fn min_value(&self) -> Option<&V>;

    /// Returns the largest key.
    fn max(&self) -> Option<&K>;

    /// Returns the value stored under the largest key.
    fn max_value(&self) -> Option<&V>;

    /// Returns the largest key less than or equal to `key`.
    fn floor(&self, key: &K) -> Option<&K>;

    /// Returns the smallest key greater than or equal to `key`.
    fn ceil(&self, key: &K) -> Option<&K>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map holds a value for `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the map contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
