//! Abstract interfaces for SMX containers
//!
//! This module defines the trait abstractions shared by all vector and
//! matrix implementations. Traits are pure interfaces - no concrete
//! implementations.

pub mod element;
pub mod matrix;
pub mod vector;

pub use element::Element;
pub use matrix::ConstMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use vector::ConstVector;
#[cfg(feature = "alloc")]
pub use vector::VectorOps;
