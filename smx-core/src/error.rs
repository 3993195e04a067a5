//! Error types for SMX operations

/// Errors that can occur during SMX operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmxError {
    /// Declared length too large to address safely
    InvalidLength,
    /// Vector index beyond the declared length
    IndexOutOfRange,
    /// Matrix row index beyond the declared row count
    RowOutOfRange,
    /// Matrix column index beyond the declared column count
    ColumnOutOfRange,
    /// Paired inputs disagree on length
    LengthMismatch,
    /// An index was supplied more than once
    DuplicateIndex,
}

impl core::fmt::Display for SmxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SmxError::InvalidLength => "Invalid length",
            SmxError::IndexOutOfRange => "Index out of range",
            SmxError::RowOutOfRange => "Row index out of range",
            SmxError::ColumnOutOfRange => "Column index out of range",
            SmxError::LengthMismatch => "Lengths do not match",
            SmxError::DuplicateIndex => "Duplicate index",
        };
        write!(f, "{msg}")
    }
}

/// Result type for SMX operations
pub type Result<T> = core::result::Result<T, SmxError>;
