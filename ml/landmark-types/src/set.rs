//! Ordered landmark sets for a single frame.

use serde::{Deserialize, Serialize};

use crate::error::{LandmarkError, Result};
use crate::landmark::Landmark;

/// Number of landmarks in a hand tracking result.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// An ordered set of landmarks for one frame.
///
/// Order follows the tracker's topology and is preserved exactly; downstream
/// feature vectors are laid out in this order.
///
/// # Example
///
/// ```
/// use landmark_types::{Landmark, LandmarkSet, HAND_LANDMARK_COUNT};
///
/// let set = LandmarkSet::new(vec![Landmark::origin(); HAND_LANDMARK_COUNT]);
/// assert_eq!(set.len(), 21);
/// assert!(set.check_len(HAND_LANDMARK_COUNT).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Creates a landmark set from an ordered list.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Creates a set of `count` landmarks at the origin.
    #[must_use]
    pub fn zeros(count: usize) -> Self {
        Self::new(vec![Landmark::origin(); count])
    }

    /// Builds a set from a flat `[x0, y0, z0, x1, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::FlatLength`] if the buffer length is not a
    /// multiple of 3.
    pub fn from_flat(data: &[f64]) -> Result<Self> {
        if data.len() % 3 != 0 {
            return Err(LandmarkError::flat_length(data.len()));
        }
        let landmarks = data
            .chunks_exact(3)
            .map(|c| Landmark::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { landmarks })
    }

    /// Returns the number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns `true` if the set has no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Returns the landmarks in order.
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Gets a landmark by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Iterates over the landmarks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    /// Checks that the set holds exactly `expected` landmarks.
    ///
    /// # Errors
    ///
    /// Returns [`LandmarkError::CountMismatch`] otherwise.
    pub fn check_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(LandmarkError::count_mismatch(expected, self.len()))
        }
    }

    /// Flattens the set into point-major `[x0, y0, z0, x1, ...]` order.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        self.landmarks.iter().flat_map(Landmark::to_array).collect()
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl<'a> IntoIterator for &'a LandmarkSet {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn set_zeros() {
        let set = LandmarkSet::zeros(HAND_LANDMARK_COUNT);
        assert_eq!(set.len(), 21);
        assert!(!set.is_empty());
        assert!(set.iter().all(|lm| *lm == Landmark::origin()));
    }

    #[test]
    fn set_empty() {
        let set = LandmarkSet::default();
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }

    #[test]
    fn set_from_flat() {
        let set = LandmarkSet::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1), Some(&Landmark::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn set_from_flat_rejects_partial_triple() {
        let err = LandmarkSet::from_flat(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, LandmarkError::flat_length(4));
    }

    #[test]
    fn set_to_flat_is_point_major() {
        let set = LandmarkSet::new(vec![
            Landmark::new(0.1, 0.2, 0.3),
            Landmark::new(1.1, 1.2, 1.3),
        ]);
        assert_eq!(set.to_flat(), vec![0.1, 0.2, 0.3, 1.1, 1.2, 1.3]);
    }

    #[test]
    fn set_check_len() {
        let set = LandmarkSet::zeros(20);
        assert_eq!(
            set.check_len(HAND_LANDMARK_COUNT),
            Err(LandmarkError::count_mismatch(21, 20))
        );
        assert!(set.check_len(20).is_ok());
    }

    #[test]
    fn set_serializes_as_list() {
        let set = LandmarkSet::new(vec![Landmark::new(0.5, 0.5, 0.0)]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));

        let parsed: LandmarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
