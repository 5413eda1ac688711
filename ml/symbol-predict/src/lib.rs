//! Fixed-weight linear classifier mapping hand landmarks to symbol text.
//!
//! Each frame's 21 hand landmarks are flattened into a 63-value feature
//! vector, scored against a trained 63x4 weight matrix plus a per-class bias,
//! and reduced to one of five outputs: a class text or a blank placeholder.
//!
//! # Pipeline
//!
//! - [`extract`] - landmarks to [`FeatureVector`] (point-major `x, y, z`)
//! - [`LinearModel`] - `features x weights + bias` into [`Scores`]
//! - [`decide`] - ordered decision rule into a [`Label`]
//! - [`SymbolTable`] - label to output text
//! - [`SymbolClassifier`] - the above as one pure call
//! - [`PredictSymbol`] - per-frame stage with stream wiring checks and
//!   timestamp pass-through
//!
//! # Constants
//!
//! The reference weights and bias are compiled in and shared process-wide.
//! Alternative weights load from [`MatrixData`] records in text or JSON form
//! via [`PredictorConfig`].
//!
//! # Example
//!
//! ```
//! use landmark_types::{Landmark, LandmarkInput, LandmarkPacket, LandmarkSet, Timestamp};
//! use symbol_predict::{PredictSymbol, PredictorConfig, StreamContract};
//!
//! let stage = PredictSymbol::open(
//!     StreamContract::new().with_landmarks(),
//!     &PredictorConfig::default(),
//! )?;
//!
//! let mut points = vec![Landmark::origin(); 21];
//! points[0].x = 1e-9;
//! let packet = LandmarkPacket::new(
//!     Timestamp(33_000),
//!     LandmarkInput::Absolute(LandmarkSet::new(points)),
//! );
//!
//! let out = stage.process(&packet)?;
//! assert_eq!(out.text, " ");
//! assert_eq!(out.timestamp, Timestamp(33_000));
//! # Ok::<(), symbol_predict::PredictError>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classifier;
mod config;
mod decision;
mod error;
mod features;
mod matrix;
mod model;
mod stage;
mod symbols;
mod weights;

// Re-export the classification pipeline
pub use classifier::{Prediction, SymbolClassifier};
pub use decision::{CLASS0_FLOOR, Label, argmax, decide};
pub use features::{FEATURE_LEN, FeatureVector, extract};
pub use model::{BiasVector, CLASS_COUNT, LinearModel, ScoreVector, Scores, WeightMatrix};
pub use symbols::SymbolTable;

// Re-export constants format
pub use matrix::{MatrixData, MatrixLayout};

// Re-export stage and configuration
pub use config::{PredictorConfig, WeightsFormat, WeightsSource};
pub use stage::{PredictSymbol, StreamContract, TEXT_TAG, TextPacket};

// Re-export error types
pub use error::{PredictError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        FeatureVector, Label, PredictError, PredictSymbol, PredictorConfig, StreamContract,
        SymbolClassifier, SymbolTable, TextPacket, extract,
    };
}
