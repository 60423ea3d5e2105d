//! Curated phrase grounding.
//!
//! Maps topic keys to sets of canonical phrase variants. When the claim and
//! the evidence each contain a variant from the same group, that is
//! high-confidence literal agreement — it verifies the claim without
//! consulting numeric thresholds.

/// One topic's canonical phrase variants.
#[derive(Debug, Clone)]
struct PhraseGroup {
    topic: String,
    variants: Vec<String>,
}

/// Topic-keyed table of canonical phrase variants.
#[derive(Debug, Clone, Default)]
pub struct GroundingTable {
    groups: Vec<PhraseGroup>,
}

impl GroundingTable {
    /// An empty table — nothing grounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of variants under a topic key. Variants are stored
    /// lowercased; matching is substring containment on lowercased text.
    pub fn with_group(mut self, topic: &str, variants: &[&str]) -> Self {
        self.groups.push(PhraseGroup {
            topic: topic.to_string(),
            variants: variants.iter().map(|v| v.to_lowercase()).collect(),
        });
        self
    }

    /// The built-in clinical table.
    pub fn clinical() -> Self {
        Self::new()
            .with_group(
                "first_line_treatment",
                &[
                    "first line treatment",
                    "recommended first line treatment",
                    "first line pharmacological treatment",
                    "recommended first line pharmacological treatment",
                ],
            )
            .with_group(
                "insulin_usage",
                &[
                    "insulin therapy may be required",
                    "insulin is used",
                    "insulin therapy",
                ],
            )
            .with_group(
                "ace_arb_combination",
                &[
                    "combining ace inhibitors and arbs is not recommended",
                    "ace inhibitors and arbs should not be combined",
                ],
            )
    }

    /// Whether claim and evidence both contain a variant from the same
    /// group. Inputs must already be lowercased.
    pub fn matches(&self, claim: &str, evidence: &str) -> bool {
        self.groups.iter().any(|group| {
            group.variants.iter().any(|v| claim.contains(v.as_str()))
                && group.variants.iter().any(|v| evidence.contains(v.as_str()))
        })
    }

    /// Topic key of the first matching group, for diagnostics.
    pub fn matching_topic(&self, claim: &str, evidence: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| {
                group.variants.iter().any(|v| claim.contains(v.as_str()))
                    && group.variants.iter().any(|v| evidence.contains(v.as_str()))
            })
            .map(|group| group.topic.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_group_on_both_sides_matches() {
        let table = GroundingTable::clinical();
        assert!(table.matches(
            "metformin is the first line treatment for type 2 diabetes",
            "metformin is the recommended first line treatment for type 2 diabetes",
        ));
    }

    #[test]
    fn variant_on_one_side_only_does_not_match() {
        let table = GroundingTable::clinical();
        assert!(!table.matches(
            "metformin is the first line treatment",
            "insulin therapy may be required",
        ));
    }

    #[test]
    fn different_variants_of_the_same_group_match() {
        let table = GroundingTable::clinical();
        assert_eq!(
            table.matching_topic(
                "insulin is used in late stage disease",
                "insulin therapy may be required for some patients",
            ),
            Some("insulin_usage")
        );
    }

    #[test]
    fn negated_phrasing_does_not_contain_a_variant() {
        let table = GroundingTable::clinical();
        // "insulin is never used" contains no insulin_usage variant.
        assert!(!table.matches(
            "insulin is never used for type 2 diabetes",
            "insulin therapy may be required",
        ));
    }

    #[test]
    fn custom_groups_extend_the_table() {
        let table = GroundingTable::new().with_group("rate_cut", &["cut interest rates"]);
        assert!(table.matches(
            "the fed cut interest rates in march",
            "the central bank cut interest rates twice",
        ));
    }

    #[test]
    fn empty_table_grounds_nothing() {
        assert!(!GroundingTable::new().matches("a", "a"));
    }
}
