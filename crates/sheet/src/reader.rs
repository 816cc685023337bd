//! Boundary module over the `calamine` reader.
//!
//! Converts whatever `calamine` yields (values, formula text, defined
//! names) into the workbook model. Container auto-detection covers Office
//! Open XML (xlsx/xlsb) and the legacy binary and OpenDocument formats.

use crate::book::Workbook;
use crate::cell::CellValue;
use crate::error::{Result, WorkbookError};
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Convert one calamine cell into a model value. `None` marks an empty
/// cell, which sheets do not store.
fn data_to_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Float(f) => Some(CellValue::Float(*f)),
        Data::String(s) => Some(CellValue::String(s.clone())),
        Data::DateTime(dt) => Some(CellValue::DateTime(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::String(s.clone())),
        Data::Error(e) => Some(CellValue::String(format!("#ERROR: {e:?}"))),
    }
}

impl Workbook {
    /// Read a workbook from a file, auto-detecting the container format.
    ///
    /// # Errors
    ///
    /// Returns [`WorkbookError::Malformed`] when the file is not a
    /// recognized (or is an encrypted) spreadsheet container, and
    /// [`WorkbookError::SheetRead`] when a sheet fails mid-read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Workbook1".to_string());
        let reader =
            open_workbook_auto(path).map_err(|e| WorkbookError::Malformed(e.to_string()))?;
        Self::from_sheets_reader(&name, reader)
    }

    /// Read a workbook from raw bytes, auto-detecting the container format.
    /// `name` is the workbook name to record (usually the upload's file
    /// stem).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Workbook::open`].
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<Self> {
        let reader = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| WorkbookError::Malformed(e.to_string()))?;
        Self::from_sheets_reader(name, reader)
    }

    fn from_sheets_reader<RS>(name: &str, mut reader: Sheets<RS>) -> Result<Self>
    where
        RS: std::io::Read + std::io::Seek,
    {
        let mut workbook = Workbook::with_name(name);

        for sheet_name in reader.sheet_names() {
            let range = reader.worksheet_range(&sheet_name).map_err(|e| {
                WorkbookError::SheetRead {
                    sheet: sheet_name.clone(),
                    detail: e.to_string(),
                }
            })?;

            let mut sheet = Sheet::with_name(&sheet_name);

            if let Some((base_row, base_col)) = range.start() {
                for (row, cells) in range.rows().enumerate() {
                    for (col, data) in cells.iter().enumerate() {
                        if let Some(value) = data_to_value(data) {
                            sheet.set_value(base_row + row as u32, base_col + col as u32, value);
                        }
                    }
                }
            }

            // Formula text lives in its own range with its own anchor.
            let formulas = reader.worksheet_formula(&sheet_name).map_err(|e| {
                WorkbookError::SheetRead {
                    sheet: sheet_name.clone(),
                    detail: e.to_string(),
                }
            })?;
            if let Some((base_row, base_col)) = formulas.start() {
                for (row, cells) in formulas.rows().enumerate() {
                    for (col, text) in cells.iter().enumerate() {
                        if !text.is_empty() {
                            sheet.set_formula(
                                base_row + row as u32,
                                base_col + col as u32,
                                text.clone(),
                            );
                        }
                    }
                }
            }

            debug!(
                sheet = %sheet_name,
                cells = sheet.cell_count(),
                "loaded sheet"
            );
            workbook.add_sheet(sheet)?;
        }

        let defined_names = match &reader {
            Sheets::Xls(inner) => inner.defined_names(),
            Sheets::Xlsx(inner) => inner.defined_names(),
            Sheets::Xlsb(inner) => inner.defined_names(),
            Sheets::Ods(inner) => inner.defined_names(),
        };
        for (defined_name, reference) in defined_names {
            workbook.add_named_range(defined_name.clone(), reference.clone());
        }

        debug!(
            workbook = workbook.name(),
            sheets = workbook.sheet_count(),
            named_ranges = workbook.named_ranges().len(),
            "loaded workbook"
        );
        Ok(workbook)
    }
}
