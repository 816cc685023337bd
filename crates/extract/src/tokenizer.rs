//! Formula tokenization.
//!
//! Each lexical pattern scans the whole formula independently and the
//! matches are unioned; the same substring is often proposed by several
//! patterns and collapses in the output set. Keep the patterns separate —
//! merging them into one automaton changes acceptance on edge cases.

use crate::filter::{cell_reference_regex, is_all_ascii_digits};
use crate::functions::is_function_name;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn double_quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]+)""#).expect("valid regex"))
}

fn single_quoted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'([^']+)'").expect("valid regex"))
}

/// Identifier immediately preceding an opening parenthesis.
fn function_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_.]*)\s*\(").expect("valid regex"))
}

/// General identifier shape: starts with a letter, ends with a letter or
/// digit, may contain `_`, `-`, `.` in between.
fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z][A-Za-z0-9_.\-]*[A-Za-z0-9]").expect("valid regex"))
}

/// Sheet-name portion of a `'Sheet Name'!` reference.
fn sheet_reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'([^']+)'!").expect("valid regex"))
}

fn constant_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z_][A-Z0-9_]*\b").expect("valid regex"))
}

/// camelCase word: starts lowercase with an embedded uppercase letter.
fn camel_case_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-z]+[A-Z][A-Za-z0-9]*\b").expect("valid regex"))
}

/// Maximal runs of Arabic-script code points (Arabic, Arabic Supplement,
/// Arabic Extended-A, Presentation Forms A/B), three or longer.
fn arabic_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"[\u{0600}-\u{06FF}\u{0750}-\u{077F}\u{08A0}-\u{08FF}\u{FB50}-\u{FDFF}\u{FE70}-\u{FEFF}]{3,}",
        )
        .expect("valid regex")
    })
}

/// Extract the distinct raw candidate tokens from one formula string.
///
/// The leading `=` is optional. Tokens are raw: the acceptance filter has
/// not been applied yet, only the per-match keep rule (length, numeric,
/// function name, cell reference). Arabic-script runs bypass even that
/// rule so the Latin-only filter downstream can reject them explicitly.
#[must_use]
pub fn tokenize_formula(formula: &str) -> BTreeSet<String> {
    let body = formula.strip_prefix('=').unwrap_or(formula);
    let mut tokens = BTreeSet::new();

    collect_captures(double_quoted_regex(), body, &mut tokens);
    collect_captures(single_quoted_regex(), body, &mut tokens);
    collect_captures(function_call_regex(), body, &mut tokens);
    collect_matches(identifier_regex(), body, &mut tokens);
    collect_captures(sheet_reference_regex(), body, &mut tokens);
    collect_matches(constant_run_regex(), body, &mut tokens);
    collect_matches(camel_case_run_regex(), body, &mut tokens);

    for m in arabic_run_regex().find_iter(body) {
        tokens.insert(m.as_str().to_string());
    }

    tokens
}

fn collect_captures(re: &Regex, text: &str, out: &mut BTreeSet<String>) {
    for cap in re.captures_iter(text) {
        if let Some(m) = cap.get(1) {
            push_candidate(m.as_str(), out);
        }
    }
}

fn collect_matches(re: &Regex, text: &str, out: &mut BTreeSet<String>) {
    for m in re.find_iter(text) {
        push_candidate(m.as_str(), out);
    }
}

fn push_candidate(raw: &str, out: &mut BTreeSet<String>) {
    if raw.chars().count() < 2
        || is_all_ascii_digits(raw)
        || is_function_name(raw)
        || cell_reference_regex().is_match(raw)
    {
        return;
    }
    out.insert(raw.to_string());
}
