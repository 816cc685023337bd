use crate::error::{Result, WorkbookError};
use crate::sheet::Sheet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A workbook-level defined name. Only the name itself participates in key
/// extraction; the reference is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRange {
    pub name: String,
    pub reference: String,
}

impl NamedRange {
    #[must_use]
    pub fn new<N: Into<String>, R: Into<String>>(name: N, reference: R) -> Self {
        NamedRange {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// A workbook: named, ordered sheets plus the defined-name table.
/// Sheet order is document order; sheet names are unique.
#[derive(Debug, Clone)]
pub struct Workbook {
    name: String,
    sheets: IndexMap<String, Sheet>,
    named_ranges: Vec<NamedRange>,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    /// Create a new empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Workbook1")
    }

    /// Create a new empty workbook with a name.
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Workbook {
            name: name.to_string(),
            sheets: IndexMap::new(),
            named_ranges: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheet names in document order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name.
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| WorkbookError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Iterate over the sheets in document order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.values()
    }

    /// Append a sheet, keyed by its name. Fails if the name is taken.
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<()> {
        let name = sheet.name().to_string();
        if self.sheets.contains_key(&name) {
            return Err(WorkbookError::SheetAlreadyExists { name });
        }
        self.sheets.insert(name, sheet);
        Ok(())
    }

    /// Register a workbook-level defined name.
    pub fn add_named_range<N: Into<String>, R: Into<String>>(&mut self, name: N, reference: R) {
        self.named_ranges.push(NamedRange::new(name, reference));
    }

    #[must_use]
    pub fn named_ranges(&self) -> &[NamedRange] {
        &self.named_ranges
    }
}
