//! Per-kind bindings over the generic containers
//!
//! One generic engine body, instantiated four times. Each scalar kind gets
//! aliases for its sparse vector, dense vector, and sparse matrix; the
//! `real32` kind is the one whose natural accessor is the mutable slot
//! (`get_mut`) rather than the value-returning `get`.

pub use smx_core::Real32;

use crate::dense_vector::DenseVector;
use crate::sparse_matrix::SparseMatrix;
use crate::sparse_vector::SparseVector;

pub type SparseInt8Vector = SparseVector<i8>;
pub type DenseInt8Vector = DenseVector<i8>;
pub type SparseInt8Matrix = SparseMatrix<i8>;

pub type SparseIntVector = SparseVector<i64>;
pub type DenseIntVector = DenseVector<i64>;
pub type SparseIntMatrix = SparseMatrix<i64>;

pub type SparseFloat32Vector = SparseVector<f32>;
pub type DenseFloat32Vector = DenseVector<f32>;
pub type SparseFloat32Matrix = SparseMatrix<f32>;

pub type SparseReal32Vector = SparseVector<Real32>;
pub type DenseReal32Vector = DenseVector<Real32>;
pub type SparseReal32Matrix = SparseMatrix<Real32>;

#[cfg(test)]
mod tests {
    use super::*;
    use smx_core::{AccessMode, Element, ScalarKind};

    #[test]
    fn test_kind_tags_line_up() {
        assert_eq!(<i8 as Element>::kind(), ScalarKind::Int8);
        assert_eq!(<i64 as Element>::kind(), ScalarKind::Int);
        assert_eq!(<f32 as Element>::kind(), ScalarKind::Float32);
        assert_eq!(<Real32 as Element>::kind(), ScalarKind::Real32);
    }

    #[test]
    fn test_bindings_share_one_engine() {
        let mut v = SparseInt8Vector::new(4).unwrap();
        v.set(1, 3).unwrap();
        assert_eq!(v.nonzero_count(), 1);

        let mut m = SparseReal32Matrix::new(2, 2).unwrap();
        assert_eq!(ScalarKind::Real32.access_mode(), AccessMode::Slot);
        *m.get_mut(1, 1).unwrap() += Real32(2.0);
        assert_eq!(m.get(1, 1), Ok(Real32(2.0)));
    }
}
