//! Predictor configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::SymbolClassifier;
use crate::error::{PredictError, Result};
use crate::matrix::MatrixData;
use crate::model::{BiasVector, LinearModel};
use crate::symbols::SymbolTable;

/// Encoding of a weights file.
///
/// # Example
///
/// ```
/// use symbol_predict::WeightsFormat;
///
/// assert_eq!(WeightsFormat::from_extension("pbtxt"), Some(WeightsFormat::Text));
/// assert_eq!(WeightsFormat::from_extension("json"), Some(WeightsFormat::Json));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeightsFormat {
    /// Line-oriented `rows` / `cols` / `packed_data` text.
    #[default]
    Text,
    /// JSON record with the same fields.
    Json,
}

impl WeightsFormat {
    /// Determines format from file extension.
    ///
    /// - `.pbtxt`, `.txt` -> Text
    /// - `.json` -> Json
    /// - Other -> None
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pbtxt" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determines format from file path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parses weights in this format.
    ///
    /// # Errors
    ///
    /// Returns parse, deserialization, or shape errors from the decoder.
    pub fn parse(self, contents: &str) -> Result<MatrixData> {
        match self {
            Self::Text => MatrixData::parse_text(contents),
            Self::Json => MatrixData::from_json(contents),
        }
    }
}

impl std::fmt::Display for WeightsFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Where the weight matrix comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum WeightsSource {
    /// The embedded reference weights.
    #[default]
    Reference,
    /// A weights file; format is taken from the extension.
    File {
        /// Path to the weights file.
        path: PathBuf,
    },
}

impl WeightsSource {
    /// Loads the weight record for a file source.
    ///
    /// Returns `None` for the reference source.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::InvalidConfig`] for unknown extensions, IO
    /// errors for unreadable files, and decoder errors for malformed contents.
    pub fn load(&self) -> Result<Option<MatrixData>> {
        match self {
            Self::Reference => Ok(None),
            Self::File { path } => {
                let format = WeightsFormat::from_path(path).ok_or_else(|| {
                    PredictError::invalid_config(format!(
                        "unsupported weights format: {}",
                        path.display()
                    ))
                })?;
                let contents = std::fs::read_to_string(path)?;
                let data = format.parse(&contents)?;
                info!(
                    path = %path.display(),
                    format = %format,
                    rows = data.rows,
                    cols = data.cols,
                    "Loaded symbol weights"
                );
                Ok(Some(data))
            }
        }
    }
}

/// Configuration for a symbol predictor.
///
/// # Example
///
/// ```
/// use symbol_predict::{PredictorConfig, WeightsSource};
///
/// let config = PredictorConfig::default();
/// assert_eq!(config.weights, WeightsSource::Reference);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PredictorConfig {
    /// Weight matrix source.
    #[serde(default)]
    pub weights: WeightsSource,

    /// Per-class bias added after the matrix multiply.
    #[serde(default)]
    pub bias: BiasVector,

    /// Output text per label.
    #[serde(default)]
    pub symbols: SymbolTable,
}

impl PredictorConfig {
    /// Sets the weights source to a file.
    #[must_use]
    pub fn with_weights_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.weights = WeightsSource::File { path: path.into() };
        self
    }

    /// Sets the bias.
    #[must_use]
    pub const fn with_bias(mut self, bias: BiasVector) -> Self {
        self.bias = bias;
        self
    }

    /// Sets the symbol table.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Validates the configuration without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::InvalidConfig`] for a non-finite bias or an
    /// empty class text.
    pub fn validate(&self) -> Result<()> {
        if !self.bias.is_finite() {
            return Err(PredictError::invalid_config(format!(
                "bias must be finite, got {:?}",
                self.bias.0
            )));
        }
        self.symbols.validate()
    }

    /// Builds the classifier described by this configuration.
    ///
    /// The reference weights with the reference bias reuse the shared model.
    ///
    /// # Errors
    ///
    /// Returns validation errors, weight loading errors, or a
    /// [`PredictError::ShapeMismatch`] if the weights are not 63x4.
    pub fn build(&self) -> Result<SymbolClassifier> {
        self.validate()?;
        match self.weights.load()? {
            None if self.bias == BiasVector::reference() => {
                Ok(SymbolClassifier::with_symbols(self.symbols.clone()))
            }
            None => Ok(SymbolClassifier::new(
                LinearModel::new(LinearModel::reference().weights().clone(), self.bias),
                self.symbols.clone(),
            )),
            Some(data) => Ok(SymbolClassifier::new(
                LinearModel::from_matrix_data(&data, self.bias)?,
                self.symbols.clone(),
            )),
        }
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns IO or deserialization errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns IO or serialization errors.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::model::WeightMatrix;
    use tempfile::tempdir;

    #[test]
    fn format_from_extension() {
        assert_eq!(WeightsFormat::from_extension("TXT"), Some(WeightsFormat::Text));
        assert_eq!(WeightsFormat::from_extension("bin"), None);
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            WeightsFormat::from_path(Path::new("/models/hand.pbtxt")),
            Some(WeightsFormat::Text)
        );
        assert_eq!(
            WeightsFormat::from_path(Path::new("hand.json")),
            Some(WeightsFormat::Json)
        );
        assert_eq!(WeightsFormat::from_path(Path::new("hand")), None);
    }

    #[test]
    fn format_display() {
        assert_eq!(format!("{}", WeightsFormat::Text), "text");
        assert_eq!(format!("{}", WeightsFormat::Json), "json");
    }

    #[test]
    fn default_config_builds_reference() {
        let classifier = PredictorConfig::default().build().unwrap();
        assert!(std::ptr::eq(classifier.model(), LinearModel::reference()));
    }

    #[test]
    fn custom_bias_builds_owned_model() {
        let bias = BiasVector([0.0, 0.0, 1.0, 0.0]);
        let classifier = PredictorConfig::default().with_bias(bias).build().unwrap();
        assert_eq!(classifier.model().bias(), &bias);
        assert_eq!(classifier.model().weights(), &WeightMatrix::reference());
    }

    #[test]
    fn validate_rejects_nan_bias() {
        let config = PredictorConfig::default().with_bias(BiasVector([f64::NAN, 0.0, 0.0, 0.0]));
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(config.build().is_err());
    }

    #[test]
    fn build_from_text_weights_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weights.pbtxt");
        let data = MatrixData::from(&WeightMatrix::reference());
        std::fs::write(&path, data.to_text()).unwrap();

        let classifier = PredictorConfig::default()
            .with_weights_file(&path)
            .build()
            .unwrap();
        assert_eq!(classifier.model(), LinearModel::reference());
    }

    #[test]
    fn build_from_json_weights_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weights.json");
        let data = MatrixData::from(&WeightMatrix::reference());
        std::fs::write(&path, data.to_json().unwrap()).unwrap();

        let classifier = PredictorConfig::default()
            .with_weights_file(&path)
            .build()
            .unwrap();
        assert_eq!(classifier.model().weights(), &WeightMatrix::reference());
    }

    #[test]
    fn build_rejects_wrong_shape_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.pbtxt");
        std::fs::write(&path, "rows: 2\ncols: 1\npacked_data: 0.1\npacked_data: 0.2\n").unwrap();

        let err = PredictorConfig::default()
            .with_weights_file(&path)
            .build()
            .unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn build_rejects_overflowing_shape_file() {
        let dir = tempdir().unwrap();
        let text_path = dir.path().join("huge.pbtxt");
        std::fs::write(&text_path, "rows: 9223372036854775808\ncols: 2\n").unwrap();
        let json_path = dir.path().join("huge.json");
        std::fs::write(
            &json_path,
            r#"{"rows":18446744073709551615,"cols":2,"packed_data":[1.0]}"#,
        )
        .unwrap();

        for path in [text_path, json_path] {
            let err = PredictorConfig::default()
                .with_weights_file(&path)
                .build()
                .unwrap_err();
            assert!(matches!(err, PredictError::ShapeMismatch { .. }), "{path:?}");
            assert!(err.is_configuration());
        }
    }

    #[test]
    fn build_rejects_unknown_extension() {
        let err = PredictorConfig::default()
            .with_weights_file("weights.bin")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported weights format"));
    }

    #[test]
    fn build_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = PredictorConfig::default()
            .with_weights_file(dir.path().join("missing.pbtxt"))
            .build()
            .unwrap_err();
        assert!(matches!(err, PredictError::Io(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictor.json");
        let config = PredictorConfig::default()
            .with_weights_file("models/hand.pbtxt")
            .with_bias(BiasVector([0.1, 0.2, 0.3, 0.4]));

        config.save(&path).unwrap();
        assert_eq!(PredictorConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn load_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(PredictorConfig::load(&path).unwrap(), PredictorConfig::default());
    }

    #[test]
    fn weights_source_serialization() {
        let json = serde_json::to_string(&WeightsSource::Reference).unwrap();
        assert_eq!(json, r#"{"source":"reference"}"#);
    }
}
