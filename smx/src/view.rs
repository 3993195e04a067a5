//! Non-owning read-only vector views
//!
//! A [`VectorView`] borrows either a dense or a sparse vector and presents
//! read-only access over it. Views carry only a reference and copy by
//! value; they never allocate, and they always resolve to the source's
//! read-only accessor - never the mutable slot path.

use core::ops::{Add, Mul};

use smx_core::{ConstVector, Element, Result, SmxError, VectorOps};

use crate::dense_vector::DenseVector;
use crate::entry_store::Entry;
use crate::sparse_vector::SparseVector;

/// Read-only view over a dense or sparse vector
#[derive(Debug, Clone, Copy)]
pub enum VectorView<'a, T> {
    /// Borrowed dense source
    Dense(&'a DenseVector<T>),
    /// Borrowed sparse source
    Sparse(&'a SparseVector<T>),
}

impl<'a, T: Element> VectorView<'a, T> {
    /// Get the length of the referenced source
    pub fn len(&self) -> usize {
        match *self {
            VectorView::Dense(d) => d.len(),
            VectorView::Sparse(s) => s.len(),
        }
    }

    /// Check whether the referenced source has length zero
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value at `index` from the referenced source
    ///
    /// Reads current source state; a view created before a mutation
    /// observes the mutated value.
    pub fn get(&self, index: usize) -> Result<T> {
        match *self {
            VectorView::Dense(d) => d.get(index),
            VectorView::Sparse(s) => s.get(index),
        }
    }

    /// Iterate `(index, value)` pairs in increasing index order
    ///
    /// A dense source yields every index; a sparse source yields only the
    /// stored entries.
    pub fn iter(&self) -> ViewIter<'a, T> {
        match *self {
            VectorView::Dense(d) => ViewIter {
                inner: IterInner::Dense(d.as_slice().iter().enumerate()),
            },
            VectorView::Sparse(s) => ViewIter {
                inner: IterInner::Sparse(s.entries()),
            },
        }
    }
}

impl<'a, T> VectorView<'a, T>
where
    T: Element + Add<Output = T> + Mul<Output = T>,
{
    /// Dot product with another view of the same length
    ///
    /// Iterates the stored entries of a sparse operand and looks the other
    /// side up per index; two dense operands multiply elementwise. Assumes
    /// the element default is the additive identity.
    pub fn dot(&self, other: &VectorView<'_, T>) -> Result<T> {
        if self.len() != other.len() {
            return Err(SmxError::LengthMismatch);
        }
        let mut acc = T::default_value();
        match (*self, *other) {
            (VectorView::Sparse(s), _) => {
                for e in s.entries() {
                    acc = acc + e.value * other.get(e.index)?;
                }
            }
            (_, VectorView::Sparse(s)) => {
                for e in s.entries() {
                    acc = acc + self.get(e.index)? * e.value;
                }
            }
            (VectorView::Dense(a), VectorView::Dense(b)) => {
                for (&x, &y) in a.as_slice().iter().zip(b.as_slice()) {
                    acc = acc + x * y;
                }
            }
        }
        Ok(acc)
    }
}

impl<'a, T: Element> ConstVector for VectorView<'a, T> {
    type Element = T;

    fn len(&self) -> usize {
        VectorView::len(self)
    }

    fn get(&self, index: usize) -> Result<T> {
        VectorView::get(self, index)
    }
}

impl<'a, T: Element> VectorOps for VectorView<'a, T> {
    fn to_values(&self) -> Vec<T> {
        match *self {
            VectorView::Dense(d) => d.as_slice().to_vec(),
            VectorView::Sparse(s) => s.to_dense().into_values(),
        }
    }
}

/// Iterator over the `(index, value)` pairs of a view
pub struct ViewIter<'a, T> {
    inner: IterInner<'a, T>,
}

enum IterInner<'a, T> {
    Dense(core::iter::Enumerate<core::slice::Iter<'a, T>>),
    Sparse(core::slice::Iter<'a, Entry<T>>),
}

impl<'a, T: Element> Iterator for ViewIter<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        match &mut self.inner {
            IterInner::Dense(it) => it.next().map(|(index, &value)| (index, value)),
            IterInner::Sparse(it) => it.next().map(|e| (e.index, e.value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Dense(it) => it.size_hint(),
            IterInner::Sparse(it) => it.size_hint(),
        }
    }
}
