//! Lenient conversions from raw page strings to typed values.
//!
//! None of these fail: malformed input degrades to a default (`0`, `None`,
//! `false`, empty list).

use crate::constants::FLAG_YES;
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").unwrap());

/// Digit-only strings parse as integers; anything else is `0`.
pub fn to_int(value: &str) -> i64 {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    value.parse().unwrap_or(0)
}

/// Optionally negative decimal numbers parse as floats; anything else is absent.
pub fn to_float(value: &str) -> Option<f64> {
    if DECIMAL.is_match(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Only the literal `"Yes"` is true.
pub fn yes_flag(value: &str) -> bool {
    value == FLAG_YES
}

/// Split on `separator`, yielding an empty list for an empty string.
pub fn split_list(value: &str, separator: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(separator).map(str::to_string).collect()
}

/// A single-element list, or empty when the value is empty.
pub fn singleton_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}
