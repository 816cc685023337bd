//! The key acceptance predicate.
//!
//! A candidate can come from anywhere (formula token, cell value, header,
//! formatted text, named range) and is judged on its own: rejections run
//! first and short-circuit, then the candidate must opt in through one of
//! the identifier shapes or a semantic substring. The default is reject.

use crate::functions::is_function_name;
use regex::Regex;
use std::sync::OnceLock;

/// Substrings that mark a token as a domain key regardless of shape.
const SEMANTIC_SUBSTRINGS: &[&str] = &["key", "id", "code", "name", "type", "value"];

/// Whole-token cell-reference shape. Column letters stop at three (`XFD`
/// is the last spreadsheet column), which is what separates `AA100` from
/// an identifier like `item2`.
pub(crate) fn cell_reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{1,3}[0-9]+$").expect("valid regex"))
}

fn constant_case_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").expect("valid regex"))
}

fn camel_case_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+[A-Z][A-Za-z0-9]*$").expect("valid regex"))
}

fn word_then_digits_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+[0-9]+$").expect("valid regex"))
}

pub(crate) fn is_all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_identifier_charset(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Decide whether one candidate string is an English key.
///
/// # Examples
///
/// ```
/// use keysift_extract::filter::accept;
///
/// assert!(accept("user_id"));
/// assert!(accept("itemName"));
/// assert!(!accept("VLOOKUP"));
/// assert!(!accept("AA100"));
/// ```
#[must_use]
pub fn accept(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    // Script/charset gate: anything outside ASCII letters, digits, `_`,
    // `-`, `.` is out, which excludes all non-Latin text.
    if !is_identifier_charset(trimmed) {
        return false;
    }
    if trimmed.len() < 2 {
        return false;
    }
    if !trimmed.bytes().any(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    if is_all_ascii_digits(trimmed) {
        return false;
    }
    if is_function_name(trimmed) {
        return false;
    }
    if cell_reference_regex().is_match(trimmed) {
        return false;
    }

    let lower = trimmed.to_ascii_lowercase();
    trimmed.contains('_')
        || trimmed.contains('-')
        || trimmed.contains('.')
        || constant_case_regex().is_match(trimmed)
        || camel_case_regex().is_match(trimmed)
        || word_then_digits_regex().is_match(trimmed)
        || SEMANTIC_SUBSTRINGS.iter().any(|s| lower.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_identifier_shapes() {
        assert!(accept("user_id"));
        assert!(accept("itemName"));
        assert!(accept("MAX_COUNT"));
        assert!(accept("key-1"));
        assert!(accept("config.value"));
        assert!(accept("item2"));
        assert!(accept("API_KEY"));
        assert!(accept("kebab-case-token"));
    }

    #[test]
    fn test_accepts_semantic_substrings() {
        assert!(accept("Name"));
        assert!(accept("ProductCode"));
        assert!(accept("id"));
        assert!(accept("OrderType"));
    }

    #[test]
    fn test_rejects_numerics() {
        assert!(!accept("12345"));
        assert!(!accept("0"));
        assert!(!accept("3.14"));
        assert!(!accept("-42"));
    }

    #[test]
    fn test_rejects_function_names() {
        assert!(!accept("IF"));
        assert!(!accept("SUM"));
        assert!(!accept("vlookup"));
        assert!(!accept("CONCATENATE"));
        assert!(!accept("TODAY"));
        assert!(!accept("FALSE"));
    }

    #[test]
    fn test_rejects_cell_references() {
        assert!(!accept("A1"));
        assert!(!accept("AA100"));
        assert!(!accept("xfd1048576"));
        assert!(!accept("u1"));
    }

    #[test]
    fn test_rejects_non_latin_text() {
        assert!(!accept("مرحبا"));
        assert!(!accept("سلام"));
        assert!(!accept("données"));
        assert!(!accept("名前"));
    }

    #[test]
    fn test_rejects_short_and_empty() {
        assert!(!accept(""));
        assert!(!accept("   "));
        assert!(!accept("a"));
        assert!(!accept(" b "));
    }

    #[test]
    fn test_default_is_reject() {
        // Plain words with no identifier shape and no semantic substring.
        assert!(!accept("Ali"));
        assert!(!accept("hello"));
        assert!(!accept("Sheet2"));
        assert!(!accept("Widget"));
    }

    #[test]
    fn test_trims_before_judging() {
        assert!(accept("  user_id  "));
        assert!(!accept("  42  "));
    }

    #[test]
    fn test_shared_shapes() {
        assert!(cell_reference_regex().is_match("B2"));
        assert!(!cell_reference_regex().is_match("item2"));
        assert!(is_all_ascii_digits("007"));
        assert!(!is_all_ascii_digits("0x7"));
    }
}
