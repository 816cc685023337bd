//! Closed list of spreadsheet built-in function names.
//!
//! Tokens that case-insensitively match an entry are never keys, no matter
//! how identifier-like they look. `TRUE`/`FALSE` are listed because both
//! would otherwise pass the CONSTANT_CASE acceptance shape. Domain words
//! the engine exists to capture (NAME, CODE, TYPE, VALUE) are deliberately
//! absent even where a spreadsheet function of that name exists.

pub const FUNCTION_NAMES: &[&str] = &[
    "AND",
    "AVERAGE",
    "CONCAT",
    "CONCATENATE",
    "COUNT",
    "COUNTA",
    "COUNTIF",
    "DATE",
    "FALSE",
    "HLOOKUP",
    "IF",
    "IFERROR",
    "IFS",
    "INDEX",
    "INDIRECT",
    "LEFT",
    "LEN",
    "LOWER",
    "MATCH",
    "MAX",
    "MID",
    "MIN",
    "NOT",
    "NOW",
    "OFFSET",
    "OR",
    "RIGHT",
    "ROUND",
    "SUM",
    "SUMIF",
    "TEXT",
    "TODAY",
    "TRIM",
    "TRUE",
    "UPPER",
    "VLOOKUP",
    "XLOOKUP",
];

/// Check a token against the function list, case-insensitively.
#[must_use]
pub fn is_function_name(token: &str) -> bool {
    FUNCTION_NAMES
        .iter()
        .any(|name| token.eq_ignore_ascii_case(name))
}
