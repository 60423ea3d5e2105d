//! Minimal linguistic markers of factual propositions.

use regex::Regex;
use std::sync::LazyLock;

/// Copulas, modals, and negators. A candidate fragment must contain at
/// least one of these tokens to count as a proposition.
pub const PROPOSITIONAL_MARKERS: &[&str] = &[
    "is", "are", "was", "were", "should", "must", "can", "will", "has", "have", "had", "not",
    "never",
];

/// Run of 3+ alphabetic characters — rejects symbol noise.
static ALPHABETIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").expect("static regex"));

/// Whether any whitespace token of the lowercased fragment is a
/// propositional marker.
pub(crate) fn has_marker(fragment: &str) -> bool {
    fragment
        .to_lowercase()
        .split_whitespace()
        .any(|tok| PROPOSITIONAL_MARKERS.contains(&tok))
}

/// Whether the fragment contains a run of 3+ alphabetic characters.
pub(crate) fn has_alphabetic_run(fragment: &str) -> bool {
    ALPHABETIC_RUN.is_match(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copulas_and_modals_are_markers() {
        assert!(has_marker("metformin is effective"));
        assert!(has_marker("patients should fast"));
        assert!(has_marker("Insulin IS used")); // case-insensitive
    }

    #[test]
    fn gibberish_has_no_marker() {
        assert!(!has_marker("asdkjh qweoiu zxcmn qweqwe"));
    }

    #[test]
    fn marker_must_be_a_whole_token() {
        // "isotope" contains "is" but is not the token "is".
        assert!(!has_marker("isotope decay rates"));
    }

    #[test]
    fn alphabetic_run_rejects_symbol_noise() {
        assert!(has_alphabetic_run("metformin"));
        assert!(!has_alphabetic_run("a1 b2 #$% 12"));
    }
}
