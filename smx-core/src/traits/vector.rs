//! Core vector abstraction traits
//!
//! This module defines the read-only interface that all vector-like types
//! satisfy: owned sparse vectors, owned dense vectors, and borrowed views.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::Element;
use crate::error::Result;

/// Read-only access to a fixed-length vector
///
/// Absent entries read back as the element's default value; only an index
/// at or beyond the declared length is an error.
pub trait ConstVector {
    /// The element type stored in this vector
    type Element: Element;

    /// Get the declared length of the vector
    fn len(&self) -> usize;

    /// Check whether the declared length is zero
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value at the specified index
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Self::Element>;
}

/// Extension trait for materializing operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait VectorOps: ConstVector {
    /// Materialize every index in `[0, len)` as a contiguous vector
    ///
    /// Absent entries materialize as the default value.
    fn to_values(&self) -> Vec<Self::Element>;
}
