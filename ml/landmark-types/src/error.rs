//! Error types for landmark-types crate.

use thiserror::Error;

/// Errors that can occur when building landmark sets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    /// Landmark count differs from the expected topology size.
    #[error("landmark count mismatch: expected {expected}, got {actual}")]
    CountMismatch {
        /// Expected number of landmarks.
        expected: usize,
        /// Actual number of landmarks.
        actual: usize,
    },

    /// Flat coordinate buffer is not a whole number of `x, y, z` triples.
    #[error("flat coordinate length {len} is not a multiple of 3")]
    FlatLength {
        /// Length of the flat buffer.
        len: usize,
    },
}

impl LandmarkError {
    /// Creates a count mismatch error.
    #[must_use]
    pub const fn count_mismatch(expected: usize, actual: usize) -> Self {
        Self::CountMismatch { expected, actual }
    }

    /// Creates a flat length error.
    #[must_use]
    pub const fn flat_length(len: usize) -> Self {
        Self::FlatLength { len }
    }
}

/// Result type for landmark-types operations.
pub type Result<T> = std::result::Result<T, LandmarkError>;
