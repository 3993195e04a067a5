//! Scalar kind tags and the slot-accessed `Real32` type
//!
//! This module contains the closed set of scalar kinds the containers are
//! instantiated over, plus the accessor-shape marker that distinguishes
//! value-returning kinds from the slot-returning `Real32`.

use core::ops::{Add, AddAssign, Mul};

/// Scalar kinds supported by the sparse containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ScalarKind {
    /// 8-bit signed integer
    Int8 = 0,
    /// Machine-width signed integer (fixed to 64 bits)
    Int = 1,
    /// 32-bit floating point, accessed by value
    Float32 = 2,
    /// 32-bit floating point, accessed through a mutable slot
    Real32 = 3,
}

impl ScalarKind {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScalarKind::Int8),
            1 => Some(ScalarKind::Int),
            2 => Some(ScalarKind::Float32),
            3 => Some(ScalarKind::Real32),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Get the size in bytes for this scalar kind
    pub const fn size_bytes(self) -> usize {
        match self {
            ScalarKind::Int8 => 1,
            ScalarKind::Int => 8,
            ScalarKind::Float32 | ScalarKind::Real32 => 4,
        }
    }

    /// Get the accessor shape for this scalar kind
    pub const fn access_mode(self) -> AccessMode {
        match self {
            ScalarKind::Real32 => AccessMode::Slot,
            _ => AccessMode::Value,
        }
    }
}

impl core::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScalarKind::Int8 => write!(f, "int8"),
            ScalarKind::Int => write!(f, "int"),
            ScalarKind::Float32 => write!(f, "float32"),
            ScalarKind::Real32 => write!(f, "real32"),
        }
    }
}

/// Accessor shapes a scalar kind can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// The accessor returns the stored value
    Value,
    /// The accessor returns a reference to a mutable slot, inserting a
    /// default-valued entry first when the index is absent
    Slot,
}

/// 32-bit real scalar whose sparse accessor yields a mutable slot
///
/// Call sites accumulate into the slot in place rather than going through a
/// full get/set round trip. Writing the default value back through the slot
/// leaves a default-valued entry behind until the next compaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Real32(pub f32);

// repr(transparent) over f32: no padding, any bit pattern is valid
unsafe impl bytemuck::Zeroable for Real32 {}
unsafe impl bytemuck::Pod for Real32 {}

impl Add for Real32 {
    type Output = Real32;

    fn add(self, rhs: Real32) -> Real32 {
        Real32(self.0 + rhs.0)
    }
}

impl AddAssign for Real32 {
    fn add_assign(&mut self, rhs: Real32) {
        self.0 += rhs.0;
    }
}

impl Mul for Real32 {
    type Output = Real32;

    fn mul(self, rhs: Real32) -> Real32 {
        Real32(self.0 * rhs.0)
    }
}

impl From<f32> for Real32 {
    fn from(value: f32) -> Self {
        Real32(value)
    }
}

impl From<Real32> for f32 {
    fn from(value: Real32) -> f32 {
        value.0
    }
}

impl core::fmt::Display for Real32 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
