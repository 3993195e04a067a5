//! Sparse vector with a declared logical length
//!
//! A `SparseVector` wraps an [`EntryStore`] with a fixed length. Reads of
//! absent indices yield the element's default value; only indices at or
//! beyond the declared length are errors.

use smx_core::{check_index, validate_length, ConstVector, Element, Result, SmxError, VectorOps};

use crate::dense_vector::DenseVector;
use crate::entry_store::{Entry, EntryStore};
use crate::view::VectorView;

/// Sparse vector storing only non-default entries
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseVector<T> {
    len: usize,
    store: EntryStore<T>,
}

impl<T: Element> SparseVector<T> {
    /// Create an empty vector of the given logical length
    pub fn new(len: usize) -> Result<Self> {
        let len = validate_length(len)?;
        Ok(Self {
            len,
            store: EntryStore::new(),
        })
    }

    /// Create a vector from paired index and value slices
    ///
    /// Default values are elided. Fails with `LengthMismatch` when the
    /// slices disagree on length, `IndexOutOfRange` for an index at or
    /// beyond `len`, and `DuplicateIndex` when an index appears twice.
    pub fn from_pairs(indices: &[usize], values: &[T], len: usize) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(SmxError::LengthMismatch);
        }
        let mut vector = Self::new(len)?;
        for (&index, &value) in indices.iter().zip(values) {
            check_index(index, len)?;
            if vector.store.find(index).is_ok() {
                return Err(SmxError::DuplicateIndex);
            }
            // keep default-valued entries around so later duplicates of the
            // same index are still caught; compaction drops them below
            *vector.store.slot(index) = value;
        }
        vector.store.compact();
        Ok(vector)
    }

    /// Create a vector holding the non-default entries of a dense vector
    ///
    /// The dense array is scanned once in increasing index order, so the
    /// store comes out sorted without a separate sort pass.
    pub fn from_dense(dense: &DenseVector<T>) -> Self {
        let mut vector = Self {
            len: dense.len(),
            store: EntryStore::new(),
        };
        for (index, &value) in dense.as_slice().iter().enumerate() {
            if !value.is_default() {
                vector.store.push_sorted(index, value);
            }
        }
        vector
    }

    /// Get the declared length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the declared length is zero
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the value at `index`, or the default value when absent
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        Ok(self.store.get(index))
    }

    /// Store a value at `index`, eliding the default value
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.len)?;
        self.store.set(index, value);
        Ok(())
    }

    /// Get a mutable slot at `index`
    ///
    /// This is the accessor shape of slot-mode scalar kinds: an absent
    /// index materializes as a default-valued entry first. Callers that
    /// leave the default behind should [`compact`](Self::compact).
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len)?;
        Ok(self.store.slot(index))
    }

    /// Remove entries left holding the default value by slot access
    pub fn compact(&mut self) {
        self.store.compact();
    }

    /// Get the number of stored entries
    pub fn nonzero_count(&self) -> usize {
        self.store.len()
    }

    /// Iterate stored `(index, value)` pairs in increasing index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.store.iter().map(|e| (e.index, e.value))
    }

    /// Borrow as a read-only view
    pub fn view(&self) -> VectorView<'_, T> {
        VectorView::Sparse(self)
    }

    /// Materialize every index in `[0, len)` as a dense vector
    pub fn to_dense(&self) -> DenseVector<T> {
        let mut values = vec![T::default_value(); self.len];
        for e in self.store.iter() {
            values[e.index] = e.value;
        }
        DenseVector::from_values(values)
    }

    pub(crate) fn store(&self) -> &EntryStore<T> {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntryStore<T> {
        &mut self.store
    }

    pub(crate) fn entries(&self) -> core::slice::Iter<'_, Entry<T>> {
        self.store.iter()
    }
}

impl<T: Element> ConstVector for SparseVector<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<T> {
        SparseVector::get(self, index)
    }
}

impl<T: Element> VectorOps for SparseVector<T> {
    fn to_values(&self) -> Vec<T> {
        self.to_dense().into_values()
    }
}
