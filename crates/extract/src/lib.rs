//! # keysift-extract
//!
//! The key extraction engine: walks a parsed workbook and returns the
//! deduplicated, sorted set of identifier-like "keys" found in cell
//! values, formulas, headers and named ranges.
//!
//! The engine is a pure fold over the [`keysift_sheet::Workbook`] model —
//! no I/O, no shared state, deterministic for identical input. Candidates
//! are proposed by several overlapping lexical passes (see [`tokenizer`])
//! and judged one by one by the acceptance predicate (see [`filter`]).
//!
//! # Examples
//!
//! ```
//! use keysift_extract::extract_keys;
//! use keysift_sheet::{Sheet, Workbook};
//!
//! let mut sheet = Sheet::with_name("People");
//! sheet.set_value(0, 0, "user_id");
//! sheet.set_value(0, 1, "Name");
//! sheet.set_value(1, 0, "u1");
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(sheet).unwrap();
//!
//! let extraction = extract_keys(&workbook);
//! assert_eq!(extraction.keys, vec!["Name", "user_id"]);
//! ```

mod extract;
pub mod filter;
pub mod functions;
pub mod report;
pub mod tokenizer;

pub use extract::{extract_keys, Extraction};
pub use filter::accept;
pub use report::{export_file_name, ExtractionReport, KeyExport};
pub use tokenizer::tokenize_formula;
