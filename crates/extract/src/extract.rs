use crate::filter::accept;
use crate::tokenizer::tokenize_formula;
use keysift_sheet::{CellValue, Sheet, Workbook};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Result of one extraction run: the sorted key set plus traversal
/// statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Accepted keys, duplicate-free, ascending ordinal order.
    pub keys: Vec<String>,
    /// Sheet names in document order.
    pub sheets_processed: Vec<String>,
    /// Stored cells visited across all used ranges.
    pub total_cells: usize,
    /// Cells carrying formula text.
    pub total_formulas: usize,
}

/// Walk a workbook and collect every accepted key.
///
/// One pass, no suspension, no mutation of the input: formulas are
/// tokenized and filtered token by token, cell values and formatted text
/// are stringified, trimmed and filtered whole, the first used row of
/// each sheet gets an extra header pass over its string values, and
/// named-range names are filtered once per workbook. Deterministic for
/// identical workbook content.
#[must_use]
pub fn extract_keys(workbook: &Workbook) -> Extraction {
    let mut keys: BTreeSet<String> = BTreeSet::new();
    let mut sheets_processed = Vec::new();
    let mut total_cells = 0;
    let mut total_formulas = 0;

    for sheet in workbook.sheets() {
        let (cells, formulas) = scan_sheet(sheet, &mut keys);
        debug!(sheet = sheet.name(), cells, formulas, "scanned sheet");
        sheets_processed.push(sheet.name().to_string());
        total_cells += cells;
        total_formulas += formulas;
    }

    for named in workbook.named_ranges() {
        add_candidate(&mut keys, &named.name);
    }

    Extraction {
        keys: keys.into_iter().collect(),
        sheets_processed,
        total_cells,
        total_formulas,
    }
}

/// Row-major scan of one sheet's used range. Returns (cells, formulas)
/// visited.
fn scan_sheet(sheet: &Sheet, keys: &mut BTreeSet<String>) -> (usize, usize) {
    let Some(range) = sheet.used_range() else {
        return (0, 0);
    };

    let mut cells = 0;
    let mut formulas = 0;

    for row in range.rows() {
        for col in range.cols() {
            let Some(cell) = sheet.cell(row, col) else {
                continue;
            };
            cells += 1;

            if let Some(formula) = cell.formula() {
                formulas += 1;
                for token in tokenize_formula(formula) {
                    add_candidate(keys, &token);
                }
            }
            if let Some(value) = cell.value() {
                add_candidate(keys, &value.as_display_string());
            }
            if let Some(text) = cell.formatted_text() {
                add_candidate(keys, text);
            }
        }
    }

    // Header pass: the first used row again, string values only. Runs on
    // top of the general scan so header strings survive even when the
    // general scan's stringification differs.
    for col in range.cols() {
        let header = sheet
            .cell(range.min_row(), col)
            .and_then(|cell| cell.value());
        if let Some(CellValue::String(text)) = header {
            add_candidate(keys, text);
        }
    }

    (cells, formulas)
}

fn add_candidate(keys: &mut BTreeSet<String>, raw: &str) {
    let candidate = raw.trim();
    if accept(candidate) && keys.insert(candidate.to_string()) {
        trace!(key = candidate, "accepted key");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keysift_sheet::Cell;

    fn single_sheet_workbook(sheet: Sheet) -> Workbook {
        let mut workbook = Workbook::new();
        workbook.add_sheet(sheet).unwrap();
        workbook
    }

    #[test]
    fn test_header_and_data_row() {
        let mut sheet = Sheet::with_name("People");
        sheet.set_value(0, 0, "user_id");
        sheet.set_value(0, 1, "Name");
        sheet.set_value(0, 2, "B");
        sheet.set_value(1, 0, "u1");
        sheet.set_value(1, 1, "Ali");
        sheet.set_value(1, 2, 42);

        let extraction = extract_keys(&single_sheet_workbook(sheet));
        assert_eq!(extraction.keys, vec!["Name", "user_id"]);
        assert_eq!(extraction.sheets_processed, vec!["People"]);
        assert_eq!(extraction.total_cells, 6);
        assert_eq!(extraction.total_formulas, 0);
    }

    #[test]
    fn test_formula_tokens_are_filtered() {
        let mut sheet = Sheet::new();
        sheet.set_formula(0, 0, r#"=VLOOKUP("employee_code", Sheet2!A:A, 1, FALSE)"#);

        let extraction = extract_keys(&single_sheet_workbook(sheet));
        assert_eq!(extraction.keys, vec!["employee_code"]);
        assert_eq!(extraction.total_formulas, 1);
    }

    #[test]
    fn test_empty_workbook_yields_empty_result() {
        let extraction = extract_keys(&single_sheet_workbook(Sheet::with_name("Empty")));
        assert!(extraction.keys.is_empty());
        assert_eq!(extraction.sheets_processed, vec!["Empty"]);
        assert_eq!(extraction.total_cells, 0);
    }

    #[test]
    fn test_duplicates_collapse_across_sheets() {
        let mut first = Sheet::with_name("First");
        first.set_value(0, 0, "order_id");
        let mut second = Sheet::with_name("Second");
        second.set_value(0, 0, "order_id");
        second.set_value(1, 0, "order_total");

        let mut workbook = Workbook::new();
        workbook.add_sheet(first).unwrap();
        workbook.add_sheet(second).unwrap();

        let extraction = extract_keys(&workbook);
        assert_eq!(extraction.keys, vec!["order_id", "order_total"]);
    }

    #[test]
    fn test_named_range_names_participate() {
        let mut workbook = single_sheet_workbook(Sheet::new());
        workbook.add_named_range("tax_rate", "Config!$B$2");
        workbook.add_named_range("B2", "Data!$B$2");

        let extraction = extract_keys(&workbook);
        assert_eq!(extraction.keys, vec!["tax_rate"]);
    }

    #[test]
    fn test_formatted_text_is_a_candidate() {
        let mut sheet = Sheet::new();
        sheet.insert(
            0,
            0,
            Cell::from_value(0.15).with_formatted_text("discount_rate"),
        );

        let extraction = extract_keys(&single_sheet_workbook(sheet));
        assert_eq!(extraction.keys, vec!["discount_rate"]);
    }

    #[test]
    fn test_arabic_values_never_surface() {
        let mut sheet = Sheet::new();
        sheet.set_value(0, 0, "مرحبا");
        sheet.set_formula(1, 0, r#"=IF(A1="مرحبا", "user_id", B1)"#);

        let extraction = extract_keys(&single_sheet_workbook(sheet));
        assert_eq!(extraction.keys, vec!["user_id"]);
    }

    #[test]
    fn test_deterministic_and_sorted() {
        let mut sheet = Sheet::new();
        sheet.set_value(0, 0, "zebra_key");
        sheet.set_value(0, 1, "alpha_key");
        sheet.set_value(1, 0, "MAX_COUNT");
        let workbook = single_sheet_workbook(sheet);

        let first = extract_keys(&workbook);
        let second = extract_keys(&workbook);
        assert_eq!(first, second);

        let mut sorted = first.keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(first.keys, sorted);
        assert_eq!(first.keys, vec!["MAX_COUNT", "alpha_key", "zebra_key"]);
    }
}
