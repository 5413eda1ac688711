//! Label to output text mapping.

use serde::{Deserialize, Serialize};

use crate::decision::Label;
use crate::error::{PredictError, Result};
use crate::model::CLASS_COUNT;

/// Output text for each label.
///
/// Any Unicode is allowed. The default table is the reference alphabet:
/// blank `"  "`, then `"A"`, `" "`, `"H"`, `"Я"` for classes `0..4`.
///
/// # Example
///
/// ```
/// use symbol_predict::{Label, SymbolTable};
///
/// let table = SymbolTable::default();
/// assert_eq!(table.text(Label::Class(3)), "Я");
/// assert_eq!(table.text(Label::Blank), "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    /// Text emitted when no class applies.
    pub blank: String,
    /// Text per class index.
    pub classes: [String; CLASS_COUNT],
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            blank: "  ".to_string(),
            classes: [
                "A".to_string(),
                " ".to_string(),
                "H".to_string(),
                "Я".to_string(),
            ],
        }
    }
}

impl SymbolTable {
    /// Creates a table from blank text and per-class texts.
    #[must_use]
    pub fn new(blank: impl Into<String>, classes: [String; CLASS_COUNT]) -> Self {
        Self {
            blank: blank.into(),
            classes,
        }
    }

    /// Returns the text for a label.
    ///
    /// Class indices outside the table fall back to the blank text.
    #[must_use]
    pub fn text(&self, label: Label) -> &str {
        label
            .class()
            .and_then(|c| self.classes.get(c))
            .map_or(self.blank.as_str(), String::as_str)
    }

    /// Returns the label whose text equals `text`, if any.
    ///
    /// Blank is checked first, then classes in index order.
    #[must_use]
    pub fn label_of(&self, text: &str) -> Option<Label> {
        if self.blank == text {
            return Some(Label::Blank);
        }
        self.classes
            .iter()
            .position(|t| t == text)
            .and_then(Label::from_class)
    }

    /// Checks that every class text is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::InvalidConfig`] naming the first empty class.
    pub fn validate(&self) -> Result<()> {
        match self.classes.iter().position(String::is_empty) {
            Some(c) => Err(PredictError::invalid_config(format!(
                "symbol text for class {c} is empty"
            ))),
            None => Ok(()),
        }
    }
}
