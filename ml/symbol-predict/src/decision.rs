//! Decision rule turning corrected scores into a label.
//!
//! Rules run in a fixed order and each later rule overrides the result of
//! the earlier ones:
//!
//! 1. argmax over the corrected scores, lowest index on ties
//! 2. blank when the maximum score is negative
//! 3. class 1 when class 0 scores below [`CLASS0_FLOOR`]
//! 4. blank when the first feature is exactly zero

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::model::{CLASS_COUNT, ScoreVector};

/// Class 0 scores below this force class 1.
pub const CLASS0_FLOOR: f64 = -100.0;

/// Class forced when class 0 falls below [`CLASS0_FLOOR`].
const FLOOR_CLASS: u8 = 1;

/// Outcome of the decision rule.
///
/// Valid class indices are `0..CLASS_COUNT`. [`decide`],
/// [`Label::from_class`] and `TryFrom<i8>` only produce valid labels; a
/// hand-built `Class` outside that range has no text and renders as blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Label {
    /// No confident class; rendered as the blank placeholder.
    #[default]
    Blank,
    /// Class index in `0..CLASS_COUNT`.
    Class(u8),
}

impl Label {
    /// Returns the label for a class index, or `None` outside
    /// `0..CLASS_COUNT`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_class(index: usize) -> Option<Self> {
        if index < CLASS_COUNT {
            Some(Self::Class(index as u8))
        } else {
            None
        }
    }

    /// Returns `true` for blank and for class indices in `0..CLASS_COUNT`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Class(c) => (*c as usize) < CLASS_COUNT,
        }
    }

    /// Returns the integer form: `-1` for blank, otherwise the class index.
    #[must_use]
    pub const fn value(&self) -> i8 {
        match self {
            Self::Blank => -1,
            #[allow(clippy::cast_possible_wrap)]
            Self::Class(c) => *c as i8,
        }
    }

    /// Returns the class index, or `None` for blank.
    #[must_use]
    pub const fn class(&self) -> Option<usize> {
        match self {
            Self::Blank => None,
            Self::Class(c) => Some(*c as usize),
        }
    }

    /// Returns `true` for the blank label.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl From<Label> for i8 {
    fn from(label: Label) -> Self {
        label.value()
    }
}

impl TryFrom<i8> for Label {
    type Error = String;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        let out_of_range = || format!("label {value} outside -1..={}", CLASS_COUNT - 1);
        match value {
            -1 => Ok(Self::Blank),
            _ => usize::try_from(value)
                .ok()
                .and_then(Self::from_class)
                .ok_or_else(out_of_range),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Index of the largest score, lowest index on ties.
///
/// Uses strict `>` against a running maximum seeded at negative infinity,
/// so `NaN` scores never win. Returns `(None, -inf)` if nothing beats the
/// seed.
#[must_use]
pub fn argmax(scores: &ScoreVector) -> (Option<usize>, f64) {
    let mut best = None;
    let mut max = f64::NEG_INFINITY;
    for (i, &score) in scores.iter().enumerate() {
        if score > max {
            max = score;
            best = Some(i);
        }
    }
    (best, max)
}

/// Applies the ordered decision rule.
///
/// # Example
///
/// ```
/// use symbol_predict::{decide, FeatureVector, Label};
///
/// let mut values = [0.0; 63];
/// values[0] = 0.5;
/// let features = FeatureVector::new(values);
///
/// assert_eq!(decide(&features, &[5.0, 5.0, 1.0, 1.0]), Label::Class(0));
/// assert_eq!(decide(&features, &[-150.0, 1.0, 9.0, 0.0]), Label::Class(1));
/// assert_eq!(decide(&FeatureVector::zeros(), &[5.0, 0.0, 0.0, 0.0]), Label::Blank);
/// ```
#[must_use]
pub fn decide(features: &FeatureVector, corrected: &ScoreVector) -> Label {
    let (best, max) = argmax(corrected);

    let mut label = best.and_then(Label::from_class).unwrap_or(Label::Blank);

    if max < 0.0 {
        label = Label::Blank;
    }

    if corrected[0] < CLASS0_FLOOR {
        label = Label::Class(FLOOR_CLASS);
    }

    if features.first() == 0.0 {
        label = Label::Blank;
    }

    label
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::features::FEATURE_LEN;

    fn features_with_first(first: f64) -> FeatureVector {
        let mut values = [0.3; FEATURE_LEN];
        values[0] = first;
        FeatureVector::new(values)
    }

    #[test]
    fn argmax_picks_largest() {
        assert_eq!(argmax(&[0.1, 0.2, 3.0, -1.0]), (Some(2), 3.0));
    }

    #[test]
    fn argmax_ties_go_to_lowest_index() {
        assert_eq!(argmax(&[5.0, 5.0, 1.0, 1.0]).0, Some(0));
        assert_eq!(argmax(&[1.0, 2.0, 2.0, 2.0]).0, Some(1));
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(&[f64::NAN, 1.0, f64::NAN, 0.5]).0, Some(1));
        assert_eq!(argmax(&[f64::NAN; 4]), (None, f64::NEG_INFINITY));
    }

    #[test]
    fn decide_tie_break() {
        assert_eq!(
            decide(&features_with_first(0.5), &[5.0, 5.0, 1.0, 1.0]),
            Label::Class(0)
        );
    }

    #[test]
    fn decide_negative_max_is_blank() {
        assert_eq!(
            decide(&features_with_first(0.5), &[-3.0, -2.0, -1.0, -4.0]),
            Label::Blank
        );
    }

    #[test]
    fn decide_fractional_negative_max_is_blank() {
        // Truncating the running maximum to an integer would store -0.9 as 0
        // and report class 0. Comparisons here stay in floating point.
        assert_eq!(
            decide(&features_with_first(0.5), &[-0.9, -0.8, -0.5, -0.7]),
            Label::Blank
        );
    }

    #[test]
    fn decide_zero_max_is_not_blank() {
        assert_eq!(
            decide(&features_with_first(0.5), &[-1.0, 0.0, -2.0, -3.0]),
            Label::Class(1)
        );
    }

    #[test]
    fn decide_class0_floor_overrides_argmax() {
        assert_eq!(
            decide(&features_with_first(0.5), &[-100.5, 0.0, 50.0, 1.0]),
            Label::Class(1)
        );
    }

    #[test]
    fn decide_class0_floor_overrides_negative_max() {
        assert_eq!(
            decide(&features_with_first(0.5), &[-200.0, -5.0, -3.0, -4.0]),
            Label::Class(1)
        );
    }

    #[test]
    fn decide_class0_at_floor_does_not_trigger() {
        assert_eq!(
            decide(&features_with_first(0.5), &[-100.0, -5.0, 2.0, -4.0]),
            Label::Class(2)
        );
    }

    #[test]
    fn decide_zero_first_feature_overrides_everything() {
        let features = features_with_first(0.0);
        assert_eq!(decide(&features, &[9.0, 1.0, 1.0, 1.0]), Label::Blank);
        assert_eq!(decide(&features, &[-500.0, 1.0, 1.0, 1.0]), Label::Blank);
        assert_eq!(decide(&FeatureVector::zeros(), &[0.0, 3.0, 0.0, 0.0]), Label::Blank);
    }

    #[test]
    fn decide_negative_zero_first_feature_is_blank() {
        assert_eq!(
            decide(&features_with_first(-0.0), &[0.0, 3.0, 0.0, 0.0]),
            Label::Blank
        );
    }

    #[test]
    fn decide_all_nan_is_blank() {
        assert_eq!(decide(&features_with_first(0.5), &[f64::NAN; 4]), Label::Blank);
    }

    #[test]
    fn label_values() {
        assert_eq!(Label::Blank.value(), -1);
        assert_eq!(Label::Class(3).value(), 3);
        assert_eq!(Label::Class(2).class(), Some(2));
        assert_eq!(Label::Blank.class(), None);
        assert!(Label::default().is_blank());
    }

    #[test]
    fn label_try_from() {
        assert_eq!(Label::try_from(-1).unwrap(), Label::Blank);
        assert_eq!(Label::try_from(0).unwrap(), Label::Class(0));
        assert!(Label::try_from(4).is_err());
        assert!(Label::try_from(-2).is_err());
    }

    #[test]
    fn label_from_class_checks_range() {
        for c in 0..CLASS_COUNT {
            let label = Label::from_class(c).unwrap();
            assert!(label.is_valid());
            assert_eq!(label.class(), Some(c));
        }
        assert_eq!(Label::from_class(CLASS_COUNT), None);
        assert_eq!(Label::from_class(usize::MAX), None);
        assert!(Label::Blank.is_valid());
        assert!(!Label::Class(9).is_valid());
        assert!(Label::try_from(9).is_err());
        assert!(serde_json::from_str::<Label>("9").is_err());
    }

    #[test]
    fn decide_only_produces_valid_labels() {
        let features = features_with_first(0.5);
        for scores in [
            [1.0, 2.0, 3.0, 4.0],
            [-1.0, -2.0, -3.0, -4.0],
            [-150.0, 0.0, 0.0, 9.0],
            [f64::NAN; 4],
        ] {
            assert!(decide(&features, &scores).is_valid());
        }
    }

    #[test]
    fn label_display() {
        assert_eq!(format!("{}", Label::Blank), "-1");
        assert_eq!(format!("{}", Label::Class(1)), "1");
    }

    #[test]
    fn label_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Label::Blank).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Label::Class(2)).unwrap(), "2");
        let parsed: Label = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Label::Class(3));
        assert!(serde_json::from_str::<Label>("7").is_err());
    }
}
