//! Field parsing utilities for raw electrolyte rows
//!
//! Every parser here is total: malformed or missing input yields `0.0`
//! rather than an error, and the result is always finite.

use crate::models::RawValue;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number pattern")
});

/// Parse the longest leading decimal number in `text`
///
/// Leading whitespace is skipped and trailing garbage ignored, so
/// `"1.5 oz"` parses as `1.5`. Returns `None` when no number starts the text.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let matched = LEADING_NUMBER.find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Replace NaN and infinities with zero
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Strip currency decoration: surrounding whitespace, every `-`, and a leading `$`
pub fn strip_currency(text: &str) -> String {
    let without_dashes: String = text.trim().chars().filter(|c| *c != '-').collect();
    let trimmed = without_dashes.trim();
    trimmed.strip_prefix('$').unwrap_or(trimmed).trim().to_string()
}

/// Parse a currency cell such as `" $1.35 "`; blank, `"-"` or malformed → 0
pub fn parse_currency(value: &RawValue) -> f64 {
    let cleaned = strip_currency(&value.as_text());
    parse_leading_float(&cleaned).unwrap_or(0.0)
}

/// Parse a count that may use comma thousands separators, e.g. `"1,560"`
pub fn parse_count(value: &RawValue) -> f64 {
    let cleaned = value.as_text().replace(',', "");
    parse_leading_float(&cleaned).unwrap_or(0.0)
}

/// Parse a plain numeric cell with no decoration stripping
pub fn parse_plain(value: &RawValue) -> f64 {
    parse_leading_float(&value.as_text()).unwrap_or(0.0)
}

/// Parse a mineral amount in mg; absent, malformed or negative values → 0
pub fn parse_mineral(value: &RawValue) -> f64 {
    let amount = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(_) => parse_count(value),
        RawValue::Empty => 0.0,
    };
    finite_or_zero(amount).max(0.0)
}

/// Render a text-like cell verbatim; blank cells become an empty string
pub fn parse_text(value: &RawValue) -> String {
    match value {
        RawValue::Empty => String::new(),
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(s) => s.clone(),
    }
}
