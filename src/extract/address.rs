//! Venue and address heuristics.
//!
//! The address split is positional: it assumes the page formats addresses as
//! `..., <locality>, <city>, <state> <postcode>, <country>`. Anything else
//! lands in the wrong fields.

use once_cell::sync::Lazy;
use regex::Regex;

static VENUE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*?-\s*").unwrap());
static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{6})\b").unwrap());
static ALPHA_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub zipcode: String,
    pub locality: String,
    pub city: String,
    pub state: String,
}

/// Drop everything up to and including the first hyphen.
pub fn strip_venue_prefix(raw: &str) -> String {
    VENUE_PREFIX.replace(raw, "").into_owned()
}

pub fn parse_address(address: &str) -> AddressParts {
    let mut parts = AddressParts::default();

    if let Some(caps) = POSTAL_CODE.captures(address) {
        parts.zipcode = caps[1].to_string();
    }

    let tokens: Vec<&str> = ALPHA_TOKEN.find_iter(address).map(|m| m.as_str()).collect();
    let n = tokens.len();
    if n >= 4 {
        parts.locality = tokens[n - 4].to_string();
        parts.city = tokens[n - 3].to_string();
        parts.state = tokens[n - 2].to_string();
    }

    parts
}
