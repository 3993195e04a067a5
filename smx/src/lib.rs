//! SMX - In-Memory Sparse Vector and Matrix Containers
//!
//! This library provides generic sparse containers that store only
//! non-default entries, with uniform get/set semantics across four scalar
//! kinds and lossless conversion to and from dense companions.
//!
//! ## Architecture
//!
//! SMX keeps definitions and implementations in separate crates:
//!
//! - **smx-core**: Scalar kinds, access traits, errors, and validation (no allocation)
//! - **smx**: Concrete containers, views, and per-kind bindings
//!
//! ## Quick Start
//!
//! ```rust
//! use smx::{DenseVector, SparseMatrix};
//!
//! fn example() -> smx::Result<()> {
//!     let mut matrix = SparseMatrix::<f32>::new(2, 3)?;
//!     matrix.set(0, 2, 5.0)?;
//!     matrix.set(1, 0, 4.0)?;
//!
//!     // Zero-copy read-only access to a row
//!     let row = matrix.row(0)?;
//!     assert_eq!(row.get(2)?, 5.0);
//!
//!     // Dense conversion materializes the defaults
//!     let weights = DenseVector::from_values(vec![1.0, 1.0, 2.0]);
//!     assert_eq!(row.dot(&weights.view())?, 10.0);
//!     Ok(())
//! }
//! example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Sorted entry storage**: O(log n) point lookup over index-ordered entries
//! - **Default elision**: a stored entry never holds the default value
//! - **Slot accessors**: in-place accumulation for the `real32` kind
//! - **Const views**: copy-by-value read-only wrappers that never own data
//!
//! ## Concurrency
//!
//! All operations are synchronous and run to completion on the calling
//! thread; the containers carry no internal synchronization. Ownership and
//! borrowing give the sharing contract for free: a container has one owner,
//! and views may be shared across threads for concurrent reads while no
//! mutable borrow of the source exists.

// Re-export core abstractions
pub use smx_core::{
    // Access traits
    ConstMatrix, ConstVector, Element, MatrixOperations, VectorOps,
    // Scalar kinds
    AccessMode, Real32, ScalarKind,
    // Error handling
    Result, SmxError,
    // Validation utilities
    check_col, check_index, check_row, validate_length,
};

// Implementation modules
pub mod dense_vector;
pub mod entry_store;
pub mod kinds;
pub mod sparse_matrix;
pub mod sparse_vector;
pub mod view;

// Public exports
pub use dense_vector::DenseVector;
pub use entry_store::{Entry, EntryStore};
pub use kinds::*;
pub use sparse_matrix::SparseMatrix;
pub use sparse_vector::SparseVector;
pub use view::{VectorView, ViewIter};
