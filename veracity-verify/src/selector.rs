//! Claim-level verdict selection across evidence items.
//!
//! Conservative reduction: a single contradicting piece of evidence
//! outweighs any number of supporting ones, because a false ACCEPT costs
//! more than a false REFUSE/REJECT.

use veracity_core::models::{TruthLabel, Verdict};

/// Select exactly one verdict as the claim's final label, by fixed
/// priority: REFUTED > VERIFIED > RISKY_ABSOLUTE > the first verdict
/// (implicitly UNSUPPORTED). Returns `None` only for an empty slice.
pub fn select_verdict(verdicts: &[Verdict]) -> Option<&Verdict> {
    verdicts
        .iter()
        .find(|v| v.label == TruthLabel::Refuted)
        .or_else(|| verdicts.iter().find(|v| v.label == TruthLabel::Verified))
        .or_else(|| {
            verdicts
                .iter()
                .find(|v| v.label == TruthLabel::RiskyAbsolute)
        })
        .or_else(|| verdicts.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(label: TruthLabel, score: f64) -> Verdict {
        Verdict {
            label,
            semantic_score: score,
            lexical_overlap: 0.0,
        }
    }

    #[test]
    fn single_refuted_outweighs_many_verified() {
        let verdicts = vec![
            v(TruthLabel::Verified, 0.9),
            v(TruthLabel::Verified, 0.8),
            v(TruthLabel::Refuted, 0.1),
        ];
        assert_eq!(select_verdict(&verdicts).unwrap().label, TruthLabel::Refuted);
    }

    #[test]
    fn verified_beats_risky_and_unsupported() {
        let verdicts = vec![
            v(TruthLabel::Unsupported, 0.2),
            v(TruthLabel::RiskyAbsolute, 0.3),
            v(TruthLabel::Verified, 0.7),
        ];
        assert_eq!(select_verdict(&verdicts).unwrap().label, TruthLabel::Verified);
    }

    #[test]
    fn risky_absolute_beats_unsupported() {
        let verdicts = vec![
            v(TruthLabel::Unsupported, 0.2),
            v(TruthLabel::RiskyAbsolute, 0.3),
        ];
        assert_eq!(
            select_verdict(&verdicts).unwrap().label,
            TruthLabel::RiskyAbsolute
        );
    }

    #[test]
    fn all_unsupported_selects_the_first() {
        let verdicts = vec![
            v(TruthLabel::Unsupported, 0.2),
            v(TruthLabel::Unsupported, 0.4),
        ];
        let selected = select_verdict(&verdicts).unwrap();
        assert_eq!(selected.semantic_score, 0.2);
    }

    #[test]
    fn empty_slice_selects_nothing() {
        assert!(select_verdict(&[]).is_none());
    }
}
