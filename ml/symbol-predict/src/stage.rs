//! Frame-synchronous prediction stage.
//!
//! A stage is wired once against exactly one landmark stream and then
//! processes one packet per frame, emitting text stamped with the input
//! frame's timestamp.

use landmark_types::{LandmarkKind, LandmarkPacket, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::classifier::{Prediction, SymbolClassifier};
use crate::config::PredictorConfig;
use crate::error::{PredictError, Result};

/// Output stream tag for predicted text.
pub const TEXT_TAG: &str = "TEXT";

/// Input streams wired into a stage.
///
/// # Example
///
/// ```
/// use landmark_types::LandmarkKind;
/// use symbol_predict::StreamContract;
///
/// let contract = StreamContract::new().with_norm_landmarks();
/// assert_eq!(contract.validate()?, LandmarkKind::Normalized);
///
/// assert!(StreamContract::new().validate().is_err());
/// # Ok::<(), symbol_predict::PredictError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StreamContract {
    /// `LANDMARKS` (absolute coordinates) is wired.
    pub landmarks: bool,
    /// `NORM_LANDMARKS` (normalized coordinates) is wired.
    pub norm_landmarks: bool,
}

impl StreamContract {
    /// Creates a contract with no inputs wired.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            landmarks: false,
            norm_landmarks: false,
        }
    }

    /// Creates a contract wired for one landmark kind.
    #[must_use]
    pub const fn for_kind(kind: LandmarkKind) -> Self {
        match kind {
            LandmarkKind::Absolute => Self::new().with_landmarks(),
            LandmarkKind::Normalized => Self::new().with_norm_landmarks(),
        }
    }

    /// Wires the absolute `LANDMARKS` stream.
    #[must_use]
    pub const fn with_landmarks(mut self) -> Self {
        self.landmarks = true;
        self
    }

    /// Wires the normalized `NORM_LANDMARKS` stream.
    #[must_use]
    pub const fn with_norm_landmarks(mut self) -> Self {
        self.norm_landmarks = true;
        self
    }

    /// Returns the single wired landmark kind.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::MissingInputStream`] if neither stream is
    /// wired and [`PredictError::ConflictingInputStreams`] if both are.
    pub fn validate(&self) -> Result<LandmarkKind> {
        match (self.landmarks, self.norm_landmarks) {
            (true, false) => Ok(LandmarkKind::Absolute),
            (false, true) => Ok(LandmarkKind::Normalized),
            (false, false) => Err(PredictError::MissingInputStream),
            (true, true) => Err(PredictError::ConflictingInputStreams),
        }
    }
}

/// Predicted text for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPacket {
    /// Timestamp of the input frame.
    pub timestamp: Timestamp,
    /// Predicted text.
    pub text: String,
}

/// Per-frame symbol prediction stage.
///
/// Construction validates the wiring and builds the classifier; a stage that
/// exists is correctly configured. `process` is stateless and takes `&self`,
/// so one stage may serve several threads.
///
/// # Example
///
/// ```
/// use landmark_types::{LandmarkInput, LandmarkPacket, LandmarkSet, Timestamp};
/// use symbol_predict::{PredictSymbol, PredictorConfig, StreamContract};
///
/// let stage = PredictSymbol::open(
///     StreamContract::new().with_norm_landmarks(),
///     &PredictorConfig::default(),
/// )?;
///
/// let packet = LandmarkPacket::new(
///     Timestamp(1_000),
///     LandmarkInput::Normalized(LandmarkSet::zeros(21)),
/// );
/// let out = stage.process(&packet)?;
///
/// assert_eq!(out.timestamp, Timestamp(1_000));
/// assert_eq!(out.text, "  ");
/// # Ok::<(), symbol_predict::PredictError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PredictSymbol {
    input: LandmarkKind,
    classifier: SymbolClassifier,
}

impl PredictSymbol {
    /// Validates the wiring and builds the stage.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the contract wires zero or two
    /// landmark streams, or if the classifier cannot be built from `config`.
    pub fn open(contract: StreamContract, config: &PredictorConfig) -> Result<Self> {
        let input = contract.validate()?;
        let classifier = config.build()?;
        info!(
            input = input.stream_tag(),
            output = TEXT_TAG,
            "Opened symbol prediction stage"
        );
        Ok(Self { input, classifier })
    }

    /// Builds a stage around an existing classifier.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the contract is invalid.
    pub fn with_classifier(contract: StreamContract, classifier: SymbolClassifier) -> Result<Self> {
        let input = contract.validate()?;
        Ok(Self { input, classifier })
    }

    /// Returns the wired landmark kind.
    #[must_use]
    pub const fn input(&self) -> LandmarkKind {
        self.input
    }

    /// Returns the classifier.
    #[must_use]
    pub const fn classifier(&self) -> &SymbolClassifier {
        &self.classifier
    }

    /// Classifies one frame and returns the full prediction.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::InputKindMismatch`] if the packet is not in
    /// the wired coordinate space and [`PredictError::LandmarkCount`] if it
    /// does not hold 21 landmarks. Both abort only this frame.
    pub fn predict(&self, packet: &LandmarkPacket) -> Result<Prediction> {
        let result = self
            .check_kind(packet)
            .and_then(|()| self.classifier.classify_landmarks(packet.landmarks.landmarks()));

        match &result {
            Ok(prediction) => debug!(
                timestamp = packet.timestamp.micros(),
                label = prediction.label.value(),
                blank = prediction.label.is_blank(),
                "Predicted symbol"
            ),
            Err(err) => warn!(
                timestamp = packet.timestamp.micros(),
                error = %err,
                "Rejected landmark frame"
            ),
        }
        result
    }

    /// Classifies one frame and emits its text with the input timestamp.
    ///
    /// # Errors
    ///
    /// See [`PredictSymbol::predict`].
    pub fn process(&self, packet: &LandmarkPacket) -> Result<TextPacket> {
        let prediction = self.predict(packet)?;
        Ok(TextPacket {
            timestamp: packet.timestamp,
            text: prediction.text,
        })
    }

    fn check_kind(&self, packet: &LandmarkPacket) -> Result<()> {
        let actual = packet.landmarks.kind();
        if actual == self.input {
            Ok(())
        } else {
            Err(PredictError::input_kind_mismatch(self.input, actual))
        }
    }
}
