//! Timestamped per-frame landmark input.

use serde::{Deserialize, Serialize};

use crate::landmark::LandmarkKind;
use crate::set::LandmarkSet;

/// Frame timestamp in microseconds.
///
/// Opaque to this crate: it is carried from input to output unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from microseconds.
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Returns the timestamp in microseconds.
    #[must_use]
    pub const fn micros(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}us", self.0)
    }
}

/// Landmarks for one frame in exactly one coordinate space.
///
/// # Example
///
/// ```
/// use landmark_types::{LandmarkInput, LandmarkKind, LandmarkSet};
///
/// let input = LandmarkInput::Normalized(LandmarkSet::zeros(21));
/// assert_eq!(input.kind(), LandmarkKind::Normalized);
/// assert_eq!(input.landmarks().len(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "landmarks", rename_all = "snake_case")]
pub enum LandmarkInput {
    /// Absolute-coordinate landmarks.
    Absolute(LandmarkSet),
    /// Normalized-coordinate landmarks.
    Normalized(LandmarkSet),
}

impl LandmarkInput {
    /// Wraps a set in the variant matching `kind`.
    #[must_use]
    pub fn new(kind: LandmarkKind, landmarks: LandmarkSet) -> Self {
        match kind {
            LandmarkKind::Absolute => Self::Absolute(landmarks),
            LandmarkKind::Normalized => Self::Normalized(landmarks),
        }
    }

    /// Returns the coordinate space of this input.
    #[must_use]
    pub const fn kind(&self) -> LandmarkKind {
        match self {
            Self::Absolute(_) => LandmarkKind::Absolute,
            Self::Normalized(_) => LandmarkKind::Normalized,
        }
    }

    /// Returns the landmarks regardless of coordinate space.
    #[must_use]
    pub const fn landmarks(&self) -> &LandmarkSet {
        match self {
            Self::Absolute(set) | Self::Normalized(set) => set,
        }
    }
}

/// A timestamped landmark input for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPacket {
    /// Frame timestamp.
    pub timestamp: Timestamp,
    /// Landmarks detected in the frame.
    pub landmarks: LandmarkInput,
}

impl LandmarkPacket {
    /// Creates a new packet.
    #[must_use]
    pub fn new(timestamp: Timestamp, landmarks: LandmarkInput) -> Self {
        Self {
            timestamp,
            landmarks,
        }
    }
}
