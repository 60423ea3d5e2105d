//! Marker-based claim extraction.
//!
//! Splits on sentence-terminal punctuation, filters non-propositional noise,
//! then splits compound sentences on coordinating conjunctions. Bounded by
//! `max_claims` and deterministic for identical input.

use regex::Regex;
use std::sync::LazyLock;

use tracing::debug;
use veracity_core::config::ExtractionMode;
use veracity_core::constants::MIN_INPUT_CHARS;
use veracity_core::traits::IClaimExtractor;

use crate::markers::{has_alphabetic_run, has_marker};

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]").expect("static regex"));

/// "and"/"but" separate compound claims.
static CONJUNCTION_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\band\b|\bbut\b").expect("static regex"));

/// Sentence fragments at or below this length are discarded.
const MIN_FRAGMENT_CHARS: usize = 5;

/// The default claim segmentation strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerExtractor;

impl MarkerExtractor {
    pub fn new() -> Self {
        Self
    }

    /// A fragment qualifies as a claim candidate if it has propositional
    /// structure and is not symbol noise.
    fn is_claim_like(fragment: &str) -> bool {
        has_marker(fragment) && has_alphabetic_run(fragment)
    }
}

impl IClaimExtractor for MarkerExtractor {
    fn extract(&self, text: &str, mode: ExtractionMode, max_claims: usize) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.len() < MIN_INPUT_CHARS {
            return Vec::new();
        }

        let mut claims: Vec<String> = Vec::new();

        'sentences: for sentence in SENTENCE_SPLIT.split(trimmed) {
            let sentence = sentence.trim();
            if sentence.len() < MIN_FRAGMENT_CHARS {
                continue;
            }
            if !Self::is_claim_like(sentence) {
                continue;
            }

            for part in CONJUNCTION_SPLIT.split(sentence) {
                let part = part.trim();
                if part.len() > MIN_FRAGMENT_CHARS && Self::is_claim_like(part) {
                    claims.push(part.to_string());
                }
                if claims.len() >= max_claims {
                    break 'sentences;
                }
            }
        }

        if claims.is_empty() && mode == ExtractionMode::Fallback {
            debug!("no claims passed filters; fallback mode keeps whole input");
            return vec![trimmed.to_string()];
        }

        claims.truncate(max_claims);
        claims
    }

    fn name(&self) -> &str {
        "marker-extractor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        MarkerExtractor::new().extract(text, ExtractionMode::Strict, 10)
    }

    #[test]
    fn single_sentence_yields_one_claim() {
        let claims = extract("Metformin is the first line treatment for type 2 diabetes.");
        assert_eq!(
            claims,
            vec!["Metformin is the first line treatment for type 2 diabetes"]
        );
    }

    #[test]
    fn compound_sentence_splits_on_conjunction() {
        let claims =
            extract("Metformin is first line treatment and insulin is never used for type 2 diabetes.");
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0], "Metformin is first line treatment");
        assert_eq!(claims[1], "insulin is never used for type 2 diabetes");
    }

    #[test]
    fn but_also_separates_claims() {
        let claims = extract("Aspirin is cheap but aspirin is not risk free.");
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn non_propositional_half_is_dropped() {
        // "ACE inhibitors" has no marker token; only the second half survives.
        let claims = extract("ACE inhibitors and ARBs should always be combined.");
        assert_eq!(claims, vec!["ARBs should always be combined"]);
    }

    #[test]
    fn gibberish_yields_nothing() {
        assert!(extract("asdkjh qweoiu zxcmn qweqwe").is_empty());
    }

    #[test]
    fn empty_and_near_empty_input_yield_nothing_in_any_mode() {
        let ex = MarkerExtractor::new();
        for mode in [ExtractionMode::Strict, ExtractionMode::Fallback] {
            assert!(ex.extract("", mode, 10).is_empty());
            assert!(ex.extract("   a  ", mode, 10).is_empty());
        }
    }

    #[test]
    fn fallback_mode_keeps_whole_input_when_filters_reject_everything() {
        let ex = MarkerExtractor::new();
        let claims = ex.extract("asdkjh qweoiu zxcmn qweqwe", ExtractionMode::Fallback, 10);
        assert_eq!(claims, vec!["asdkjh qweoiu zxcmn qweqwe"]);
    }

    #[test]
    fn long_input_is_truncated_not_errored() {
        let long = "Metformin is first line treatment. ".repeat(100);
        let claims = extract(&long);
        assert_eq!(claims.len(), 10);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "Metformin is used. Insulin is used and exercise is advised.";
        assert_eq!(extract(text), extract(text));
    }
}
