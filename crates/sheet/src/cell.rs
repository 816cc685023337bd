use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar cell payload as produced by the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Excel serial date (days since 1899-12-30).
    DateTime(f64),
}

impl CellValue {
    /// Render the value the way the extraction engine sees it: one plain
    /// string per scalar, no locale formatting.
    #[must_use]
    pub fn as_display_string(&self) -> String {
        match self {
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) | CellValue::DateTime(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
        }
    }

    /// Check if the value holds text.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, CellValue::String(_))
    }

    /// Borrow the text content, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display_string())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

/// One stored cell. Any combination of the three fields may be present; a
/// cell with none of them is never stored in a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    value: Option<CellValue>,
    formula: Option<String>,
    formatted_text: Option<String>,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Cell::default()
    }

    /// Create a cell holding only a value.
    #[must_use]
    pub fn from_value<V: Into<CellValue>>(value: V) -> Self {
        Cell {
            value: Some(value.into()),
            ..Cell::default()
        }
    }

    /// Attach a value.
    #[must_use]
    pub fn with_value<V: Into<CellValue>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attach raw formula text (`=` prefix optional).
    #[must_use]
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Attach the display string produced by number/date formatting.
    #[must_use]
    pub fn with_formatted_text<S: Into<String>>(mut self, text: S) -> Self {
        self.formatted_text = Some(text.into());
        self
    }

    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        self.value = Some(value.into());
    }

    pub fn set_formula<S: Into<String>>(&mut self, formula: S) {
        self.formula = Some(formula.into());
    }

    pub fn set_formatted_text<S: Into<String>>(&mut self, text: S) {
        self.formatted_text = Some(text.into());
    }

    #[must_use]
    pub fn value(&self) -> Option<&CellValue> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    #[must_use]
    pub fn formatted_text(&self) -> Option<&str> {
        self.formatted_text.as_deref()
    }

    /// A cell with no value, no formula and no formatted text carries no
    /// information and is skipped by sheets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.formula.is_none() && self.formatted_text.is_none()
    }
}
