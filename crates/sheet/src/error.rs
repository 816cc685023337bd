use thiserror::Error;

/// Errors that can occur while building a workbook.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The input bytes are not a recognized spreadsheet container. Corrupt
    /// files, wrong formats and password-protected workbooks all land here.
    #[error("not a recognized spreadsheet container: {0}")]
    Malformed(String),

    #[error("failed to read sheet '{sheet}': {detail}")]
    SheetRead { sheet: String, detail: String },

    #[error("sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkbookError>;
