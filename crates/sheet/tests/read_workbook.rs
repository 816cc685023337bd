use keysift_sheet::{CellValue, Workbook, WorkbookError};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::tempdir;

#[test]
fn test_read_values_and_used_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("basic.xlsx");

    let mut out = XlsxWorkbook::new();
    let ws = out.add_worksheet();
    ws.set_name("People").unwrap();
    ws.write_string(0, 0, "user_id").unwrap();
    ws.write_string(0, 1, "Name").unwrap();
    ws.write_string(1, 0, "u1").unwrap();
    ws.write_number(1, 1, 42.0).unwrap();
    out.save(&path).unwrap();

    let book = Workbook::open(&path).unwrap();
    assert_eq!(book.name(), "basic");
    assert_eq!(book.sheet_names(), vec!["People"]);

    let sheet = book.get_sheet("People").unwrap();
    let range = sheet.used_range().unwrap();
    assert_eq!(range.min_row(), 0);
    assert_eq!(range.max_row(), 1);
    assert_eq!(range.min_col(), 0);
    assert_eq!(range.max_col(), 1);

    assert_eq!(
        sheet.cell(0, 0).unwrap().value(),
        Some(&CellValue::String("user_id".to_string()))
    );
    assert_eq!(
        sheet.cell(1, 1).unwrap().value(),
        Some(&CellValue::Float(42.0))
    );
}

#[test]
fn test_read_formula_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("formulas.xlsx");

    let mut out = XlsxWorkbook::new();
    let ws = out.add_worksheet();
    ws.write_formula(0, 0, "=CONCATENATE(\"order_\", A2)").unwrap();
    out.save(&path).unwrap();

    let book = Workbook::open(&path).unwrap();
    let sheet = book.get_sheet("Sheet1").unwrap();
    let formula = sheet.cell(0, 0).and_then(|c| c.formula()).unwrap();
    assert!(formula.contains("CONCATENATE"));
    assert!(formula.contains("order_"));
}

#[test]
fn test_read_multiple_sheets_in_document_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.xlsx");

    let mut out = XlsxWorkbook::new();
    out.add_worksheet().set_name("Zeta").unwrap();
    out.add_worksheet().set_name("Alpha").unwrap();
    out.save(&path).unwrap();

    let book = Workbook::open(&path).unwrap();
    assert_eq!(book.sheet_names(), vec!["Zeta", "Alpha"]);
}

#[test]
fn test_blank_sheet_has_no_used_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.xlsx");

    let mut out = XlsxWorkbook::new();
    out.add_worksheet().set_name("Empty").unwrap();
    out.save(&path).unwrap();

    let book = Workbook::open(&path).unwrap();
    let sheet = book.get_sheet("Empty").unwrap();
    assert!(sheet.used_range().is_none());
    assert_eq!(sheet.cell_count(), 0);
}

#[test]
fn test_malformed_file_fails_before_extraction() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"these bytes are not a spreadsheet").unwrap();

    let err = Workbook::open(&path).unwrap_err();
    assert!(matches!(err, WorkbookError::Malformed(_)));
}

#[test]
fn test_from_bytes_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bytes.xlsx");

    let mut out = XlsxWorkbook::new();
    let ws = out.add_worksheet();
    ws.write_string(0, 0, "invoice_total").unwrap();
    out.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let book = Workbook::from_bytes("upload", bytes).unwrap();
    assert_eq!(book.name(), "upload");
    assert_eq!(
        book.get_sheet("Sheet1")
            .unwrap()
            .cell(0, 0)
            .unwrap()
            .value(),
        Some(&CellValue::String("invoice_total".to_string()))
    );
}
