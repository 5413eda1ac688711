//! Feature extraction from hand landmarks.

use landmark_types::{HAND_LANDMARK_COUNT, LandmarkSet};

use crate::error::{PredictError, Result};

/// Length of the flattened feature vector (three coordinates per landmark).
pub const FEATURE_LEN: usize = HAND_LANDMARK_COUNT * 3;

/// Flattened landmark coordinates for one frame.
///
/// Layout is point-major: `[x0, y0, z0, x1, y1, z1, ...]`, which is the row
/// order of the trained weight matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_LEN]);

impl FeatureVector {
    /// Wraps raw feature values.
    #[must_use]
    pub const fn new(values: [f64; FEATURE_LEN]) -> Self {
        Self(values)
    }

    /// Creates an all-zero feature vector.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; FEATURE_LEN])
    }

    /// Builds a feature vector from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ShapeMismatch`] if `values` is not exactly
    /// [`FEATURE_LEN`] long.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; FEATURE_LEN] = values.try_into().map_err(|_| {
            PredictError::shape_mismatch(
                format!("{FEATURE_LEN} features"),
                format!("{} features", values.len()),
            )
        })?;
        Ok(Self(array))
    }

    /// Returns the feature values.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; FEATURE_LEN] {
        &self.0
    }

    /// Returns the first feature (x of the first landmark).
    #[must_use]
    pub const fn first(&self) -> f64 {
        self.0[0]
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; FEATURE_LEN]> for FeatureVector {
    fn from(values: [f64; FEATURE_LEN]) -> Self {
        Self(values)
    }
}

/// Flattens a landmark set into a [`FeatureVector`].
///
/// Landmark `i` writes its `x, y, z` to positions `3i, 3i + 1, 3i + 2`.
/// Absolute and normalized landmarks are treated identically.
///
/// # Errors
///
/// Returns [`PredictError::LandmarkCount`] unless the set holds exactly
/// [`HAND_LANDMARK_COUNT`] landmarks.
///
/// # Example
///
/// ```
/// use landmark_types::{Landmark, LandmarkSet};
/// use symbol_predict::extract;
///
/// let mut points = vec![Landmark::origin(); 21];
/// points[1] = Landmark::new(0.1, 0.2, 0.3);
///
/// let features = extract(&LandmarkSet::new(points))?;
/// assert_eq!(&features.as_array()[3..6], &[0.1, 0.2, 0.3]);
/// # Ok::<(), symbol_predict::PredictError>(())
/// ```
pub fn extract(landmarks: &LandmarkSet) -> Result<FeatureVector> {
    landmarks.check_len(HAND_LANDMARK_COUNT)?;

    let mut values = [0.0; FEATURE_LEN];
    for (slot, landmark) in values.chunks_exact_mut(3).zip(landmarks) {
        slot.copy_from_slice(&landmark.to_array());
    }
    Ok(FeatureVector(values))
}
