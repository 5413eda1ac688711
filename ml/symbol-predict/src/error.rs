//! Error types for symbol-predict crate.

use landmark_types::{LandmarkError, LandmarkKind};
use thiserror::Error;

/// Errors that can occur while wiring or running the symbol predictor.
///
/// Configuration errors are raised once while a stage is being set up and
/// must abort construction. Invalid-input errors abort only the current frame.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Neither landmark input stream is wired.
    #[error("none of the input streams are provided: expected LANDMARKS or NORM_LANDMARKS")]
    MissingInputStream,

    /// Both landmark input streams are wired.
    #[error(
        "only one type of landmark can be taken: either absolute or normalized landmarks, not both"
    )]
    ConflictingInputStreams,

    /// Weight matrix or vector has the wrong shape.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape.
        expected: String,
        /// Actual shape.
        actual: String,
    },

    /// Constants text could not be parsed.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Reason for failure.
        reason: String,
    },

    /// Invalid predictor configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Frame carried the wrong number of landmarks.
    #[error("invalid input: expected {expected} landmarks, got {actual}")]
    LandmarkCount {
        /// Expected landmark count.
        expected: usize,
        /// Actual landmark count.
        actual: usize,
    },

    /// Flat coordinate buffer is not a whole number of `x, y, z` triples.
    #[error("invalid input: {len} flat coordinates do not form whole landmarks")]
    FlatCoordinates {
        /// Length of the flat buffer.
        len: usize,
    },

    /// Frame arrived in a coordinate space the stage was not wired for.
    #[error("invalid input: stage takes {expected} landmarks, got {actual}")]
    InputKindMismatch {
        /// Wired coordinate space.
        expected: LandmarkKind,
        /// Coordinate space of the packet.
        actual: LandmarkKind,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl PredictError {
    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an invalid config error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates a landmark count error.
    #[must_use]
    pub const fn landmark_count(expected: usize, actual: usize) -> Self {
        Self::LandmarkCount { expected, actual }
    }

    /// Creates a flat coordinate length error.
    #[must_use]
    pub const fn flat_coordinates(len: usize) -> Self {
        Self::FlatCoordinates { len }
    }

    /// Creates an input kind mismatch error.
    #[must_use]
    pub const fn input_kind_mismatch(expected: LandmarkKind, actual: LandmarkKind) -> Self {
        Self::InputKindMismatch { expected, actual }
    }

    /// Creates an IO error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    /// Creates a deserialization error.
    #[must_use]
    pub fn deserialization(reason: impl Into<String>) -> Self {
        Self::Deserialization(reason.into())
    }

    /// Returns `true` for errors that must abort stage construction.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingInputStream
                | Self::ConflictingInputStreams
                | Self::ShapeMismatch { .. }
                | Self::Parse { .. }
                | Self::InvalidConfig(_)
                | Self::Io(_)
                | Self::Serialization(_)
                | Self::Deserialization(_)
        )
    }

    /// Returns `true` for errors that abort only the current frame.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::LandmarkCount { .. }
                | Self::FlatCoordinates { .. }
                | Self::InputKindMismatch { .. }
        )
    }
}

impl From<LandmarkError> for PredictError {
    fn from(err: LandmarkError) -> Self {
        match err {
            LandmarkError::CountMismatch { expected, actual } => {
                Self::landmark_count(expected, actual)
            }
            LandmarkError::FlatLength { len } => Self::flat_coordinates(len),
        }
    }
}

impl From<std::io::Error> for PredictError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else if err.is_syntax() || err.is_data() || err.is_eof() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

/// Result type for symbol-predict operations.
pub type Result<T> = std::result::Result<T, PredictError>;
