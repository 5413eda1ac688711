//! Fixed-shape linear model: `features x weights + bias`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};
use crate::features::{FEATURE_LEN, FeatureVector};
use crate::matrix::MatrixData;
use crate::weights::{REFERENCE_BIAS, REFERENCE_WEIGHTS};

/// Number of symbol classes scored by the model.
pub const CLASS_COUNT: usize = 4;

/// Per-class scores for one frame.
pub type ScoreVector = [f64; CLASS_COUNT];

static REFERENCE_MODEL: OnceLock<LinearModel> = OnceLock::new();

/// Trained weight matrix, [`FEATURE_LEN`] rows by [`CLASS_COUNT`] columns.
///
/// The shape is fixed by the type; records of any other shape are rejected
/// when converted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    rows: [[f64; CLASS_COUNT]; FEATURE_LEN],
}

impl WeightMatrix {
    /// Wraps a weight array.
    #[must_use]
    pub const fn new(rows: [[f64; CLASS_COUNT]; FEATURE_LEN]) -> Self {
        Self { rows }
    }

    /// Returns the reference weights.
    #[must_use]
    pub const fn reference() -> Self {
        Self::new(REFERENCE_WEIGHTS)
    }

    /// Returns the weight rows.
    #[must_use]
    pub const fn rows(&self) -> &[[f64; CLASS_COUNT]; FEATURE_LEN] {
        &self.rows
    }

    /// Multiplies a row vector by this matrix.
    ///
    /// Each score accumulates in feature order `0..FEATURE_LEN`.
    #[must_use]
    pub fn multiply(&self, features: &FeatureVector) -> ScoreVector {
        let mut raw = [0.0; CLASS_COUNT];
        for (f, row) in features.as_array().iter().zip(&self.rows) {
            for (acc, w) in raw.iter_mut().zip(row) {
                *acc += f * w;
            }
        }
        raw
    }
}

impl TryFrom<&MatrixData> for WeightMatrix {
    type Error = PredictError;

    fn try_from(data: &MatrixData) -> Result<Self> {
        if data.rows != FEATURE_LEN || data.cols != CLASS_COUNT {
            return Err(PredictError::shape_mismatch(
                format!("{FEATURE_LEN}x{CLASS_COUNT}"),
                format!("{}x{}", data.rows, data.cols),
            ));
        }
        data.validate()?;

        let mut rows = [[0.0; CLASS_COUNT]; FEATURE_LEN];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = data
                    .get(r, c)
                    .ok_or_else(|| PredictError::shape_mismatch(format!("entry ({r}, {c})"), "none"))?;
            }
        }
        Ok(Self { rows })
    }
}

impl From<&WeightMatrix> for MatrixData {
    fn from(weights: &WeightMatrix) -> Self {
        Self::row_major(
            FEATURE_LEN,
            CLASS_COUNT,
            weights.rows.iter().flatten().copied().collect(),
        )
    }
}

/// Per-class additive correction applied after the matrix multiply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiasVector(pub [f64; CLASS_COUNT]);

impl BiasVector {
    /// Returns the reference bias.
    #[must_use]
    pub const fn reference() -> Self {
        Self(REFERENCE_BIAS)
    }

    /// Adds the bias to raw scores elementwise.
    #[must_use]
    pub fn apply(&self, raw: ScoreVector) -> ScoreVector {
        let mut corrected = raw;
        for (score, b) in corrected.iter_mut().zip(&self.0) {
            *score += b;
        }
        corrected
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|b| b.is_finite())
    }
}

impl Default for BiasVector {
    fn default() -> Self {
        Self::reference()
    }
}

/// Raw and bias-corrected scores for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// `features x weights`.
    pub raw: ScoreVector,
    /// `raw + bias`.
    pub corrected: ScoreVector,
}

/// Linear scoring model: weights plus bias.
///
/// Immutable once built. The reference model is created on first use and
/// shared for the life of the process.
///
/// # Example
///
/// ```
/// use symbol_predict::{FeatureVector, LinearModel};
///
/// let model = LinearModel::reference();
/// let scores = model.score(&FeatureVector::zeros());
/// assert_eq!(scores.corrected, model.bias().0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: WeightMatrix,
    bias: BiasVector,
}

impl LinearModel {
    /// Creates a model from weights and bias.
    #[must_use]
    pub const fn new(weights: WeightMatrix, bias: BiasVector) -> Self {
        Self { weights, bias }
    }

    /// Returns the process-wide reference model.
    #[must_use]
    pub fn reference() -> &'static Self {
        REFERENCE_MODEL.get_or_init(|| Self::new(WeightMatrix::reference(), BiasVector::reference()))
    }

    /// Builds a model from a packed weight record.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ShapeMismatch`] unless the record is
    /// [`FEATURE_LEN`] x [`CLASS_COUNT`] with a matching value count.
    pub fn from_matrix_data(data: &MatrixData, bias: BiasVector) -> Result<Self> {
        Ok(Self::new(WeightMatrix::try_from(data)?, bias))
    }

    /// Returns the weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Returns the bias.
    #[must_use]
    pub const fn bias(&self) -> &BiasVector {
        &self.bias
    }

    /// Scores a feature vector.
    #[must_use]
    pub fn score(&self, features: &FeatureVector) -> Scores {
        let raw = self.weights.multiply(features);
        Scores {
            raw,
            corrected: self.bias.apply(raw),
        }
    }
}
