#![no_std]

//! SMX Core - Sparse Vector and Matrix Definitions
//!
//! This crate provides the scalar kinds, access traits, error taxonomy and
//! bounds validation shared by the sparse containers in `smx`

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod scalar;
pub mod traits;
pub mod validation;

pub use error::*;
pub use scalar::*;
pub use traits::*;
pub use validation::*;
