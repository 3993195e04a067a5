//! Sorted entry storage backing one sparse vector
//!
//! The store keeps `(index, value)` pairs in strictly increasing index
//! order and never holds a default-valued entry. The one documented
//! exception is [`EntryStore::slot`], which may materialize a default
//! entry that stays until the next [`EntryStore::compact`].

use smx_core::Element;

/// A stored (index, value) pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    /// Position of the value within the owning vector
    pub index: usize,
    /// The stored value
    pub value: T,
}

/// Ordered collection of the non-default entries of one vector
///
/// Lookup is a binary search over the index sequence, O(log n). Insert and
/// remove shift subsequent entries, O(n) worst case - sparse structures
/// assume point mutation is rarer than lookup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryStore<T> {
    entries: Vec<Entry<T>>,
}

impl<T: Element> EntryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty store with space reserved for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Locate an index in the store
    ///
    /// Returns `Ok(position)` when an entry is stored at `index`, and
    /// `Err(position)` with the insertion point that keeps the sequence
    /// sorted otherwise.
    pub fn find(&self, index: usize) -> core::result::Result<usize, usize> {
        self.entries.binary_search_by_key(&index, |e| e.index)
    }

    /// Get the value at `index`, or the default value when absent
    pub fn get(&self, index: usize) -> T {
        match self.find(index) {
            Ok(pos) => self.entries[pos].value,
            Err(_) => T::default_value(),
        }
    }

    /// Store a value at `index`
    ///
    /// A default value removes the entry (or is a no-op when none is
    /// stored); a non-default value overwrites in place or inserts at the
    /// position that keeps indices strictly increasing.
    pub fn set(&mut self, index: usize, value: T) {
        match self.find(index) {
            Ok(pos) => {
                if value.is_default() {
                    self.entries.remove(pos);
                } else {
                    self.entries[pos].value = value;
                }
            }
            Err(pos) => {
                if !value.is_default() {
                    self.entries.insert(pos, Entry { index, value });
                }
            }
        }
    }

    /// Get a mutable slot at `index`, inserting a default-valued entry
    /// when none is stored
    ///
    /// This is the accessor path for slot-mode scalar kinds. A caller that
    /// leaves the default value in the slot must follow up with
    /// [`compact`](Self::compact) before the no-default-entry invariant is
    /// asserted again.
    pub fn slot(&mut self, index: usize) -> &mut T {
        let pos = match self.find(index) {
            Ok(pos) => pos,
            Err(pos) => {
                self.entries.insert(
                    pos,
                    Entry {
                        index,
                        value: T::default_value(),
                    },
                );
                pos
            }
        };
        &mut self.entries[pos].value
    }

    /// Remove every entry holding the default value
    pub fn compact(&mut self) {
        self.entries.retain(|e| !e.value.is_default());
    }

    /// Iterate stored entries in increasing index order
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an entry known to sort after every stored index
    ///
    /// Used by in-order construction paths (dense scans), which produce
    /// entries already sorted.
    pub(crate) fn push_sorted(&mut self, index: usize, value: T) {
        debug_assert!(self.entries.last().map_or(true, |e| e.index < index));
        self.entries.push(Entry { index, value });
    }
}

impl<T: Element> Default for EntryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices<T: Element>(store: &EntryStore<T>) -> Vec<usize> {
        store.iter().map(|e| e.index).collect()
    }

    #[test]
    fn test_set_then_get() {
        let mut store = EntryStore::new();
        store.set(3, 9i64);
        store.set(1, 7);
        assert_eq!(store.get(1), 7);
        assert_eq!(store.get(3), 9);
        assert_eq!(store.get(2), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_indices_stay_sorted() {
        let mut store = EntryStore::new();
        for index in [5, 1, 9, 3, 7] {
            store.set(index, index as i64);
        }
        assert_eq!(indices(&store), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_set_default_removes_entry() {
        let mut store = EntryStore::new();
        store.set(4, 2.5f32);
        store.set(4, 0.0);
        assert!(store.is_empty());
        assert_eq!(store.get(4), 0.0);

        // no-op when nothing is stored
        store.set(6, 0.0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut store = EntryStore::new();
        store.set(2, 8i8);
        let once = store.clone();
        store.set(2, 8);
        assert_eq!(store, once);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut store = EntryStore::new();
        store.set(2, 8i64);
        store.set(2, 5);
        assert_eq!(store.get(2), 5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_slot_materializes_then_compacts() {
        use smx_core::Real32;

        let mut store = EntryStore::new();
        *store.slot(3) += Real32(1.5);
        assert_eq!(store.get(3), Real32(1.5));

        // writing the default back leaves the entry until compaction
        *store.slot(3) = Real32(0.0);
        assert_eq!(store.len(), 1);
        store.compact();
        assert!(store.is_empty());
    }

    #[test]
    fn test_slot_keeps_order() {
        let mut store = EntryStore::new();
        store.set(6, 1i64);
        *store.slot(2) = 4;
        assert_eq!(indices(&store), vec![2, 6]);
    }

    #[test]
    fn test_iter_restarts_from_the_beginning() {
        let mut store = EntryStore::new();
        store.set(0, 1i64);
        store.set(2, 3);
        let first: Vec<_> = store.iter().map(|e| (e.index, e.value)).collect();
        let second: Vec<_> = store.iter().map(|e| (e.index, e.value)).collect();
        assert_eq!(first, vec![(0, 1), (2, 3)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_reports_insertion_point() {
        let mut store = EntryStore::new();
        store.set(1, 7i64);
        store.set(3, 9);
        assert_eq!(store.find(1), Ok(0));
        assert_eq!(store.find(3), Ok(1));
        assert_eq!(store.find(0), Err(0));
        assert_eq!(store.find(2), Err(1));
        assert_eq!(store.find(4), Err(2));
    }
}
