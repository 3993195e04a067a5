//! Validation utilities for SMX containers
//!
//! This module contains pure validation functions with no I/O
//! dependencies. All functions are mathematical checks on declared sizes
//! and requested positions.

pub mod bounds;

pub use bounds::{check_col, check_index, check_row, validate_length};
