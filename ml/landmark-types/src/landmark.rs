//! Single 3-D landmark and its coordinate-space tag.

use serde::{Deserialize, Serialize};

/// A single tracked keypoint with 3-D position.
///
/// The classifier treats absolute and normalized landmarks identically as raw
/// numeric triples, so there is one point type and the coordinate space is
/// carried separately by [`LandmarkKind`].
///
/// # Example
///
/// ```
/// use landmark_types::Landmark;
///
/// let wrist = Landmark::new(0.5, 0.8, -0.02);
/// assert_eq!(wrist.to_array(), [0.5, 0.8, -0.02]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate (depth).
    pub z: f64,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a landmark at the origin.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Landmark {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Coordinate space a landmark set was produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandmarkKind {
    /// Absolute (world or pixel) coordinates.
    Absolute,
    /// Coordinates normalized to the image frame.
    Normalized,
}

impl LandmarkKind {
    /// Returns the input stream tag conventionally used for this kind.
    #[must_use]
    pub const fn stream_tag(&self) -> &'static str {
        match self {
            Self::Absolute => "LANDMARKS",
            Self::Normalized => "NORM_LANDMARKS",
        }
    }
}

impl std::fmt::Display for LandmarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Normalized => write!(f, "normalized"),
        }
    }
}
