//! Workbook model and spreadsheet reader for keysift.
//!
//! Provides the read-only data model the extraction engine walks —
//! [`Workbook`], [`Sheet`], [`Cell`], [`CellValue`], [`NamedRange`] — and
//! a reader that builds it from xlsx/xls/xlsb/ods containers via
//! `calamine`.
//!
//! # Examples
//!
//! ## Building a workbook by hand
//!
//! ```
//! use keysift_sheet::{Sheet, Workbook};
//!
//! let mut sheet = Sheet::with_name("Data");
//! sheet.set_value(0, 0, "user_id");
//! sheet.set_formula(1, 0, "=VLOOKUP(\"employee_code\", Sheet2!A:A, 1, FALSE)");
//!
//! let mut workbook = Workbook::with_name("payroll");
//! workbook.add_sheet(sheet).unwrap();
//! workbook.add_named_range("tax_rate", "Config!$B$2");
//!
//! assert_eq!(workbook.sheet_names(), vec!["Data"]);
//! assert_eq!(workbook.named_ranges().len(), 1);
//! ```
//!
//! ## Reading a file
//!
//! ```no_run
//! use keysift_sheet::Workbook;
//!
//! let workbook = Workbook::open("report.xlsx").unwrap();
//! for sheet in workbook.sheets() {
//!     println!("{}: {} cells", sheet.name(), sheet.cell_count());
//! }
//! ```

pub mod book;
pub mod cell;
mod error;
mod reader;
pub mod sheet;

pub use book::{NamedRange, Workbook};
pub use cell::{Cell, CellValue};
pub use error::{Result, WorkbookError};
pub use sheet::{Sheet, UsedRange};
