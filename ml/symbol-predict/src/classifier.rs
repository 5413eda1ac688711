//! Linear symbol classifier: scores, decision rule, and text mapping.

use std::borrow::Cow;

use landmark_types::LandmarkSet;
use tracing::trace;

use crate::decision::{Label, decide};
use crate::error::Result;
use crate::features::{FeatureVector, extract};
use crate::model::{LinearModel, Scores};
use crate::symbols::SymbolTable;

/// Result of classifying one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Selected label.
    pub label: Label,
    /// Output text for the label.
    pub text: String,
    /// Raw and bias-corrected scores behind the decision.
    pub scores: Scores,
}

/// Fixed-weight classifier mapping feature vectors to symbol text.
///
/// Stateless between calls; `classify` is a pure function of the model,
/// the symbol table, and its input. Safe to share across threads.
///
/// # Example
///
/// ```
/// use symbol_predict::{FeatureVector, Label, SymbolClassifier};
///
/// let classifier = SymbolClassifier::reference();
/// let prediction = classifier.classify(&FeatureVector::zeros());
///
/// assert_eq!(prediction.label, Label::Blank);
/// assert_eq!(prediction.text, "  ");
/// ```
#[derive(Debug, Clone)]
pub struct SymbolClassifier {
    model: Cow<'static, LinearModel>,
    symbols: SymbolTable,
}

impl SymbolClassifier {
    /// Creates a classifier from an owned model and symbol table.
    #[must_use]
    pub fn new(model: LinearModel, symbols: SymbolTable) -> Self {
        Self {
            model: Cow::Owned(model),
            symbols,
        }
    }

    /// Creates a classifier over the shared reference model and default
    /// symbol table.
    #[must_use]
    pub fn reference() -> Self {
        Self::with_symbols(SymbolTable::default())
    }

    /// Creates a classifier over the shared reference model with a custom
    /// symbol table.
    #[must_use]
    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self {
            model: Cow::Borrowed(LinearModel::reference()),
            symbols,
        }
    }

    /// Returns the scoring model.
    #[must_use]
    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Returns the symbol table.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Classifies a feature vector.
    #[must_use]
    pub fn classify(&self, features: &FeatureVector) -> Prediction {
        let scores = self.model.score(features);
        let label = decide(features, &scores.corrected);
        trace!(
            raw = ?scores.raw,
            corrected = ?scores.corrected,
            label = label.value(),
            "Scored frame"
        );
        Prediction {
            label,
            text: self.symbols.text(label).to_string(),
            scores,
        }
    }

    /// Extracts features from a landmark set and classifies them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PredictError::LandmarkCount`] if the set does not
    /// hold exactly 21 landmarks.
    pub fn classify_landmarks(&self, landmarks: &LandmarkSet) -> Result<Prediction> {
        let features = extract(landmarks)?;
        Ok(self.classify(&features))
    }
}

impl Default for SymbolClassifier {
    fn default() -> Self {
        Self::reference()
    }
}
