use super::RBTreeMap;
use crate::raw::RawRBTreeMap;

impl<K, V> RBTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node arena reallocates.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use frbtree::RBTreeMap;
    ///
    /// let map: RBTreeMap<&str, i32> = RBTreeMap::with_capacity(64);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 64);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RBTreeMap {
            raw: RawRBTreeMap::with_capacity(capacity),
        }
    }

    /// Returns how many entries the map can hold without reallocating.
    ///
    /// Slots freed by removals are reused, so this never shrinks.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
