//! Sparse matrix built from per-row sparse vectors
//!
//! Row-major layout: one [`SparseVector`] per row, each with length equal
//! to the column count. Row extraction is therefore zero-copy; column
//! extraction materializes through
//! [`MatrixOperations::col_values`](smx_core::MatrixOperations).

use smx_core::{
    check_col, check_row, validate_length, ConstMatrix, Element, MatrixOperations, Result,
};

use crate::sparse_vector::SparseVector;
use crate::view::VectorView;

/// Sparse matrix storing only non-default entries
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    rows: Vec<SparseVector<T>>,
}

impl<T: Element> SparseMatrix<T> {
    /// Create an empty matrix of the given dimensions
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        validate_length(nrows)?;
        validate_length(ncols)?;
        let mut rows = Vec::with_capacity(nrows);
        for _ in 0..nrows {
            rows.push(SparseVector::new(ncols)?);
        }
        Ok(Self { nrows, ncols, rows })
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Get the number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Get the number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get the value at `(row, col)`, or the default value when absent
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        check_row(row, self.nrows)?;
        check_col(col, self.ncols)?;
        Ok(self.rows[row].store().get(col))
    }

    /// Store a value at `(row, col)`, eliding the default value
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_row(row, self.nrows)?;
        check_col(col, self.ncols)?;
        self.rows[row].store_mut().set(col, value);
        Ok(())
    }

    /// Get a mutable slot at `(row, col)`
    ///
    /// Same contract as [`SparseVector::get_mut`]: an absent position
    /// materializes as a default-valued entry, and a default left behind
    /// should be removed with [`compact`](Self::compact).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        check_row(row, self.nrows)?;
        check_col(col, self.ncols)?;
        Ok(self.rows[row].store_mut().slot(col))
    }

    /// Borrow a row as a read-only view
    pub fn row(&self, row: usize) -> Result<VectorView<'_, T>> {
        check_row(row, self.nrows)?;
        Ok(self.rows[row].view())
    }

    /// Get the total number of stored entries
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nonzero_count).sum()
    }

    /// Remove entries left holding the default value by slot access
    pub fn compact(&mut self) {
        for row in &mut self.rows {
            row.compact();
        }
    }

    /// Iterate stored `(row, col, value)` triplets in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().map(move |(c, value)| (r, c, value)))
    }
}

impl<T: Element> ConstMatrix for SparseMatrix<T> {
    type Element = T;

    fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        SparseMatrix::get(self, row, col)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: Element> MatrixOperations for SparseMatrix<T> {
    fn row_values(&self, row: usize) -> Result<Vec<T>> {
        check_row(row, self.nrows)?;
        Ok(self.rows[row].to_dense().into_values())
    }

    fn col_values(&self, col: usize) -> Result<Vec<T>> {
        check_col(col, self.ncols)?;
        let mut values = Vec::with_capacity(self.nrows);
        for row in &self.rows {
            values.push(row.store().get(col));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smx_core::SmxError;

    #[test]
    fn test_set_then_get_scenario() {
        let mut m = SparseMatrix::<i64>::new(2, 3).unwrap();
        m.set(0, 2, 5).unwrap();
        m.set(1, 0, 4).unwrap();
        assert_eq!(m.get(0, 2), Ok(5));
        assert_eq!(m.get(1, 0), Ok(4));
        for (row, col) in [(0, 0), (0, 1), (1, 1), (1, 2)] {
            assert_eq!(m.get(row, col), Ok(0));
        }
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_out_of_range_errors() {
        let mut m = SparseMatrix::<f32>::new(2, 3).unwrap();
        assert_eq!(m.get(2, 0), Err(SmxError::RowOutOfRange));
        assert_eq!(m.get(0, 3), Err(SmxError::ColumnOutOfRange));
        assert_eq!(m.set(2, 0, 1.0), Err(SmxError::RowOutOfRange));
        assert_eq!(m.set(0, 3, 1.0), Err(SmxError::ColumnOutOfRange));
        assert_eq!(m.row(2).err(), Some(SmxError::RowOutOfRange));
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_row_view_is_zero_copy_and_current() {
        let mut m = SparseMatrix::<i64>::new(2, 4).unwrap();
        m.set(1, 2, 6).unwrap();
        {
            let row = m.row(1).unwrap();
            assert_eq!(row.len(), 4);
            assert_eq!(row.get(2), Ok(6));
        }
        m.set(1, 2, 0).unwrap();
        assert_eq!(m.row(1).unwrap().get(2), Ok(0));
    }

    #[test]
    fn test_row_and_col_values() {
        let mut m = SparseMatrix::<i64>::new(2, 3).unwrap();
        m.set(0, 2, 5).unwrap();
        m.set(1, 0, 4).unwrap();
        assert_eq!(m.row_values(0).unwrap(), vec![0, 0, 5]);
        assert_eq!(m.col_values(0).unwrap(), vec![0, 4]);
        assert_eq!(m.col_values(2).unwrap(), vec![5, 0]);
        assert_eq!(m.row_values(2).err(), Some(SmxError::RowOutOfRange));
        assert_eq!(m.col_values(3).err(), Some(SmxError::ColumnOutOfRange));
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut m = SparseMatrix::<i64>::new(3, 3).unwrap();
        m.set(2, 0, 1).unwrap();
        m.set(0, 1, 2).unwrap();
        m.set(0, 0, 3).unwrap();
        let triplets: Vec<_> = m.iter().collect();
        assert_eq!(triplets, vec![(0, 0, 3), (0, 1, 2), (2, 0, 1)]);
    }

    #[test]
    fn test_slot_access_and_compaction() {
        use smx_core::Real32;

        let mut m = SparseMatrix::<Real32>::new(2, 2).unwrap();
        *m.get_mut(0, 1).unwrap() += Real32(4.0);
        assert_eq!(m.get(0, 1), Ok(Real32(4.0)));

        *m.get_mut(0, 1).unwrap() = Real32(0.0);
        assert_eq!(m.nnz(), 1);
        m.compact();
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_row_dot_consumer() {
        let mut m = SparseMatrix::<f32>::new(2, 3).unwrap();
        m.set(0, 0, 2.0).unwrap();
        m.set(0, 2, 1.0).unwrap();
        let weights = crate::DenseVector::from_values(vec![1.0f32, 1.0, 3.0]);
        let row = m.row(0).unwrap();
        assert_eq!(row.dot(&weights.view()), Ok(5.0));
    }
}
