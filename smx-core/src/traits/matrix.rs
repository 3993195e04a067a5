//! Core matrix abstraction traits
//!
//! This module defines the fundamental traits that all matrix
//! implementations must satisfy. These are pure interfaces with no
//! concrete implementations.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::Element;
use crate::error::Result;

/// Read-only access to a two-dimensional sparse container
pub trait ConstMatrix {
    /// The element type stored in this matrix
    type Element: Element;

    /// Get matrix dimensions as (rows, cols)
    fn dims(&self) -> (usize, usize);

    /// Get the value at the specified position
    ///
    /// Absent entries read back as the default value. Returns
    /// `RowOutOfRange` or `ColumnOutOfRange` for positions beyond the
    /// declared dimensions.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get the number of stored entries
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column materialization (requires alloc feature)
///
/// These operations allocate; zero-copy row access goes through the
/// implementation's own view accessor instead.
#[cfg(feature = "alloc")]
pub trait MatrixOperations: ConstMatrix {
    /// Materialize all values of a row, defaults included
    ///
    /// Values are returned in column order.
    fn row_values(&self, row: usize) -> Result<Vec<Self::Element>>;

    /// Materialize all values of a column, defaults included
    ///
    /// Values are returned in row order.
    fn col_values(&self, col: usize) -> Result<Vec<Self::Element>>;
}
