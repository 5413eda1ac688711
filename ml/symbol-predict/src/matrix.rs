//! Packed matrix record used to ship trained constants.
//!
//! The record carries `rows`, `cols` and a flat `packed_data` list. Two
//! encodings are supported: a line-oriented text form
//!
//! ```text
//! rows: 2
//! cols: 2
//! packed_data: 1
//! packed_data: 2
//! packed_data: 1
//! packed_data: 0
//! ```
//!
//! and JSON through serde.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{PredictError, Result};

/// Order in which `packed_data` enumerates matrix entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatrixLayout {
    /// Entries listed row by row.
    #[default]
    RowMajor,
    /// Entries listed column by column.
    ColumnMajor,
}

impl MatrixLayout {
    /// Returns the text-format keyword for this layout.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::RowMajor => "ROW_MAJOR",
            Self::ColumnMajor => "COLUMN_MAJOR",
        }
    }

    /// Parses a text-format keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ROW_MAJOR" => Some(Self::RowMajor),
            "COLUMN_MAJOR" => Some(Self::ColumnMajor),
            _ => None,
        }
    }
}

/// A dense matrix in packed record form.
///
/// # Example
///
/// ```
/// use symbol_predict::MatrixData;
///
/// let m = MatrixData::parse_text("rows: 1\ncols: 2\npacked_data: 0.5\npacked_data: -1\n")?;
/// assert_eq!((m.rows, m.cols), (1, 2));
/// assert_eq!(m.get(0, 1), Some(-1.0));
/// # Ok::<(), symbol_predict::PredictError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixData {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Entries in `layout` order.
    pub packed_data: Vec<f64>,
    /// Packing order of `packed_data`.
    #[serde(default)]
    pub layout: MatrixLayout,
}

impl MatrixData {
    /// Creates a row-major matrix record.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn row_major(rows: usize, cols: usize, packed_data: Vec<f64>) -> Self {
        Self {
            rows,
            cols,
            packed_data,
            layout: MatrixLayout::RowMajor,
        }
    }

    /// Checks that `packed_data` holds exactly `rows * cols` entries.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::ShapeMismatch`] otherwise, including when
    /// `rows * cols` does not fit in `usize`.
    pub fn validate(&self) -> Result<()> {
        let expected = self.rows.checked_mul(self.cols).ok_or_else(|| {
            PredictError::shape_mismatch(
                "rows * cols within usize",
                format!("{}x{}", self.rows, self.cols),
            )
        })?;
        if self.packed_data.len() == expected {
            Ok(())
        } else {
            Err(PredictError::shape_mismatch(
                format!("{} packed values for {}x{}", expected, self.rows, self.cols),
                format!("{} packed values", self.packed_data.len()),
            ))
        }
    }

    /// Returns the entry at `(row, col)`, honouring the packing order.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = match self.layout {
            MatrixLayout::RowMajor => row.checked_mul(self.cols)?.checked_add(col)?,
            MatrixLayout::ColumnMajor => col.checked_mul(self.rows)?.checked_add(row)?,
        };
        self.packed_data.get(index).copied()
    }

    /// Parses the line-oriented text form.
    ///
    /// Blank lines and lines starting with `#` are ignored. `rows`, `cols`
    /// and `layout` may appear once; `packed_data` repeats in order.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Parse`] with the 1-based line number for
    /// malformed lines, unknown keys, or missing `rows`/`cols`, and
    /// [`PredictError::ShapeMismatch`] if the value count disagrees with the
    /// declared shape.
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut rows = None;
        let mut cols = None;
        let mut layout = None;
        let mut packed_data = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| PredictError::parse(line_no, "expected `key: value`"))?;
            let value = value.trim();

            match key.trim() {
                "rows" => set_once(&mut rows, parse_dim(line_no, value)?, line_no, "rows")?,
                "cols" => set_once(&mut cols, parse_dim(line_no, value)?, line_no, "cols")?,
                "layout" => {
                    let parsed = MatrixLayout::from_keyword(value).ok_or_else(|| {
                        PredictError::parse(line_no, format!("unknown layout `{value}`"))
                    })?;
                    set_once(&mut layout, parsed, line_no, "layout")?;
                }
                "packed_data" => {
                    let v = value.parse::<f64>().map_err(|e| {
                        PredictError::parse(line_no, format!("invalid value `{value}`: {e}"))
                    })?;
                    packed_data.push(v);
                }
                other => {
                    return Err(PredictError::parse(line_no, format!("unknown key `{other}`")));
                }
            }
        }

        let last_line = text.lines().count().max(1);
        let matrix = Self {
            rows: rows.ok_or_else(|| PredictError::parse(last_line, "missing `rows`"))?,
            cols: cols.ok_or_else(|| PredictError::parse(last_line, "missing `cols`"))?,
            packed_data,
            layout: layout.unwrap_or_default(),
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Serializes to the line-oriented text form.
    ///
    /// Floats use shortest round-trip formatting, so
    /// `parse_text(&m.to_text())` reproduces every value bit for bit.
    /// The `layout` line is only written for column-major records.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(32 + self.packed_data.len() * 32);
        let _ = writeln!(out, "rows: {}", self.rows);
        let _ = writeln!(out, "cols: {}", self.cols);
        if self.layout != MatrixLayout::RowMajor {
            let _ = writeln!(out, "layout: {}", self.layout.keyword());
        }
        for v in &self.packed_data {
            let _ = writeln!(out, "packed_data: {v:?}");
        }
        out
    }

    /// Parses the JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Deserialization`] for malformed JSON and
    /// [`PredictError::ShapeMismatch`] if the value count disagrees with the
    /// declared shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let matrix: Self = serde_json::from_str(json)?;
        matrix.validate()?;
        Ok(matrix)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse_dim(line: usize, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .map_err(|e| PredictError::parse(line, format!("invalid dimension `{value}`: {e}")))
}

fn set_once<T>(slot: &mut Option<T>, value: T, line: usize, key: &str) -> Result<()> {
    if slot.is_some() {
        return Err(PredictError::parse(line, format!("duplicate `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    const A: &str = "rows: 3\ncols: 2\npacked_data: 1\npacked_data: 2\npacked_data: 3\n\
                     packed_data: -1\npacked_data: 0\npacked_data: 0\n";

    #[test]
    fn parse_integer_entries() {
        let m = MatrixData::parse_text(A).unwrap();
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 2);
        assert_eq!(m.layout, MatrixLayout::RowMajor);
        assert_eq!(m.packed_data, vec![1.0, 2.0, 3.0, -1.0, 0.0, 0.0]);
        assert_eq!(m.get(1, 1), Some(-1.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn parse_ignores_blank_and_comment_lines() {
        let text = "# trained constants\n\nrows: 2\ncols: 1\n  packed_data: 0.1  \npacked_data: 0.2\n";
        let m = MatrixData::parse_text(text).unwrap();
        assert_eq!(m.packed_data, vec![0.1, 0.2]);
    }

    #[test]
    fn parse_column_major_layout() {
        let text = "rows: 2\ncols: 2\nlayout: COLUMN_MAJOR\npacked_data: 1\npacked_data: 2\n\
                    packed_data: 3\npacked_data: 4\n";
        let m = MatrixData::parse_text(text).unwrap();
        assert_eq!(m.layout, MatrixLayout::ColumnMajor);
        assert_eq!(m.get(0, 1), Some(3.0));
        assert_eq!(m.get(1, 0), Some(2.0));
    }

    #[test]
    fn parse_rejects_count_mismatch() {
        let err = MatrixData::parse_text("rows: 2\ncols: 2\npacked_data: 1\n").unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch { .. }));
    }

    #[test]
    fn parse_rejects_bad_value_with_line() {
        let err = MatrixData::parse_text("rows: 1\ncols: 1\npacked_data: abc\n").unwrap_err();
        assert!(matches!(err, PredictError::Parse { line: 3, .. }));
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = MatrixData::parse_text("rows: 1\ncols: 1\ndata: 1\n").unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn parse_rejects_missing_colon() {
        let err = MatrixData::parse_text("rows 1\n").unwrap_err();
        assert!(matches!(err, PredictError::Parse { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_duplicate_dims() {
        let err = MatrixData::parse_text("rows: 1\nrows: 2\ncols: 1\npacked_data: 1\n").unwrap_err();
        assert!(err.to_string().contains("duplicate `rows`"));
    }

    #[test]
    fn parse_rejects_missing_dims() {
        let err = MatrixData::parse_text("cols: 1\npacked_data: 1\n").unwrap_err();
        assert!(err.to_string().contains("missing `rows`"));
    }

    #[test]
    fn text_roundtrip_preserves_bits() {
        let m = MatrixData::row_major(
            1,
            4,
            vec![-5.811_477_978_470_591_6e-5, 0.1, 1.0 / 3.0, -0.0],
        );
        let parsed = MatrixData::parse_text(&m.to_text()).unwrap();
        assert_eq!(parsed.rows, m.rows);
        assert_eq!(parsed.cols, m.cols);
        for (a, b) in parsed.packed_data.iter().zip(&m.packed_data) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn text_omits_default_layout() {
        let m = MatrixData::row_major(1, 1, vec![2.0]);
        assert_eq!(m.to_text(), "rows: 1\ncols: 1\npacked_data: 2.0\n");
    }

    #[test]
    fn json_roundtrip() {
        let m = MatrixData::parse_text(A).unwrap();
        let json = m.to_json().unwrap();
        assert!(json.contains("\"packed_data\""));
        assert_eq!(MatrixData::from_json(&json).unwrap(), m);
    }

    #[test]
    fn json_layout_defaults_to_row_major() {
        let m = MatrixData::from_json(r#"{"rows":1,"cols":2,"packed_data":[1.0,2.0]}"#).unwrap();
        assert_eq!(m.layout, MatrixLayout::RowMajor);
    }

    #[test]
    fn json_rejects_count_mismatch() {
        let err = MatrixData::from_json(r#"{"rows":2,"cols":2,"packed_data":[1.0]}"#).unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch { .. }));
    }

    #[test]
    fn parse_rejects_overflowing_shape() {
        let err = MatrixData::parse_text("rows: 9223372036854775808\ncols: 2\n").unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch { .. }));
        assert!(err.is_configuration());

        let max = format!("rows: {}\ncols: 2\npacked_data: 1\n", usize::MAX);
        assert!(matches!(
            MatrixData::parse_text(&max),
            Err(PredictError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn json_rejects_overflowing_shape() {
        let err = MatrixData::from_json(
            r#"{"rows":18446744073709551615,"cols":2,"packed_data":[1.0]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch { .. }));
    }

    #[test]
    fn get_on_overflowing_shape_is_none() {
        let m = MatrixData::row_major(usize::MAX, 2, vec![1.0]);
        assert_eq!(m.get(usize::MAX - 1, 1), None);
        assert_eq!(m.get(0, 0), Some(1.0));
    }
}
