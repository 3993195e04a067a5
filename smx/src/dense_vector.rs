//! Fully materialized fixed-length vector
//!
//! The dense companion to [`SparseVector`](crate::SparseVector): a
//! contiguous array holding every index, used as a conversion source and
//! target and as backing storage for read-only views.

use smx_core::{check_index, validate_length, ConstVector, Element, Result, VectorOps};

use crate::sparse_vector::SparseVector;
use crate::view::VectorView;

/// Dense vector owning a contiguous array of elements
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseVector<T> {
    values: Vec<T>,
}

impl<T: Element> DenseVector<T> {
    /// Create a default-filled vector of the given length
    pub fn new(len: usize) -> Result<Self> {
        let len = validate_length(len)?;
        Ok(Self {
            values: vec![T::default_value(); len],
        })
    }

    /// Create a vector taking ownership of existing values
    pub fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the length is zero
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at `index`
    pub fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.values.len())?;
        Ok(self.values[index])
    }

    /// Store a value at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        check_index(index, self.values.len())?;
        self.values[index] = value;
        Ok(())
    }

    /// Borrow the backing array
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Take ownership of the backing array
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Iterate `(index, value)` pairs over every index
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.values.iter().copied().enumerate()
    }

    /// Borrow as a read-only view
    pub fn view(&self) -> VectorView<'_, T> {
        VectorView::Dense(self)
    }

    /// Convert to a sparse vector holding only the non-default entries
    pub fn to_sparse(&self) -> SparseVector<T> {
        SparseVector::from_dense(self)
    }
}

impl<T: Element + bytemuck::Pod> DenseVector<T> {
    /// View the backing array as raw bytes, zero-copy
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}

impl<T: Element> ConstVector for DenseVector<T> {
    type Element = T;

    fn len(&self) -> usize {
        self.values.len()
    }

    fn get(&self, index: usize) -> Result<T> {
        DenseVector::get(self, index)
    }
}

impl<T: Element> VectorOps for DenseVector<T> {
    fn to_values(&self) -> Vec<T> {
        self.values.clone()
    }
}
