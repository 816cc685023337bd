//! Export payload and run provenance.

use crate::extract::Extraction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The JSON document written to `<base>-keys.json`: `{"keys": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyExport {
    pub keys: Vec<String>,
}

impl KeyExport {
    #[must_use]
    pub fn new(extraction: &Extraction) -> Self {
        KeyExport {
            keys: extraction.keys.clone(),
        }
    }
}

/// Provenance metadata for one extraction run. Not part of the export
/// document itself; consumers that want to know where a key list came
/// from serialize this alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub source_file: String,
    pub extracted_at: DateTime<Utc>,
    pub sheet_count: usize,
    pub sheets: Vec<String>,
    pub total_keys: usize,
}

impl ExtractionReport {
    #[must_use]
    pub fn new(source_file: &str, extraction: &Extraction) -> Self {
        ExtractionReport {
            source_file: source_file.to_string(),
            extracted_at: Utc::now(),
            sheet_count: extraction.sheets_processed.len(),
            sheets: extraction.sheets_processed.clone(),
            total_keys: extraction.keys.len(),
        }
    }
}

/// Export file name for an input path: the file name with its extension
/// stripped, plus `-keys.json`.
#[must_use]
pub fn export_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}-keys.json")
}
