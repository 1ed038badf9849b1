//! Error types for the Bloom filter crate

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors raised by the bit array and the filter
///
/// Both variants are precondition violations: they abort the call that hit
/// them and are never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid capacity: {capacity} (must be greater than 0)")]
    InvalidCapacity { capacity: usize },

    #[error("Index out of range: {index} >= {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },
}
