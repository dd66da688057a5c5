//! Feature flags inferred from policy terms.
//!
//! A term only has to mention the keyword: "No smoking" still sets
//! `smokingAllowed`. Negation is not detected.

use crate::constants::{ADULT_MINIMUM_AGE, FLAG_YES};
use crate::types::RawEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    MinimumAge,
    Alcohol,
    Smoking,
    Parking,
    Food,
    Wheelchair,
}

pub const FEATURE_KEYWORDS: &[(&str, Feature)] = &[
    ("21+", Feature::MinimumAge),
    ("alcohol", Feature::Alcohol),
    ("smoking", Feature::Smoking),
    ("parking", Feature::Parking),
    ("food", Feature::Food),
    ("wheelchair", Feature::Wheelchair),
];

impl Feature {
    pub fn apply(self, event: &mut RawEvent) {
        let flag = match self {
            Feature::MinimumAge => {
                event.minimum_age = ADULT_MINIMUM_AGE.to_string();
                return;
            }
            Feature::Alcohol => &mut event.alcohol_served,
            Feature::Smoking => &mut event.smoking_allowed,
            Feature::Parking => &mut event.parking_available,
            Feature::Food => &mut event.food_available,
            Feature::Wheelchair => &mut event.wheelchair_access,
        };
        *flag = FLAG_YES.to_string();
    }
}

/// Set every flag whose keyword appears, case-insensitively, in any term.
pub fn apply_policy_flags<S: AsRef<str>>(event: &mut RawEvent, terms: &[S]) {
    for term in terms {
        let lower = term.as_ref().to_lowercase();
        for (keyword, feature) in FEATURE_KEYWORDS {
            if lower.contains(keyword) {
                feature.apply(event);
            }
        }
    }
}

/// Terms as `1. first\n2. second`.
pub fn number_terms<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_set_flags_case_insensitively() {
        let mut event = RawEvent::new("https://example.com");
        apply_policy_flags(
            &mut event,
            &["Entry for 21+ only", "ALCOHOL will be served", "Valet Parking available"],
        );
        assert_eq!(event.minimum_age, "21");
        assert_eq!(event.alcohol_served, "Yes");
        assert_eq!(event.parking_available, "Yes");
        assert_eq!(event.food_available, "");
        assert_eq!(event.smoking_allowed, "");
        assert_eq!(event.wheelchair_access, "");
    }

    #[test]
    fn negated_terms_still_set_the_flag() {
        let mut event = RawEvent::new("https://example.com");
        apply_policy_flags(&mut event, &["Smoking NOT allowed", "Outside food is prohibited"]);
        assert_eq!(event.smoking_allowed, "Yes");
        assert_eq!(event.food_available, "Yes");
    }

    #[test]
    fn no_terms_leaves_flags_untouched() {
        let mut event = RawEvent::new("https://example.com");
        let before = event.clone();
        apply_policy_flags::<&str>(&mut event, &[]);
        assert_eq!(event, before);
    }

    #[test]
    fn terms_are_numbered_from_one() {
        assert_eq!(number_terms(&["Carry ID", "No refunds"]), "1. Carry ID\n2. No refunds");
        assert_eq!(number_terms::<&str>(&[]), "");
    }
}
