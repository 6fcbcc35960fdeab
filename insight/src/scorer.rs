//! Trait scoring.
//!
//! Keyword hits are summed uniformly across all answers (no recency
//! weighting) and mapped to a score through a fixed saturating curve, so the
//! score is a pure function of the multiset of answers: more evidence never
//! lowers a score, and no amount of evidence escapes [0, 100].

use lexis::FeatureSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::taxonomy::Taxonomy;

/// Score assigned to a trait with no lexical evidence at all. Zero evidence
/// reads as "unmeasured", not "absent", so the baseline sits on the mid-band
/// floor rather than at zero.
pub const BASELINE_SCORE: u8 = 40;

/// Hit count at which a score reaches the midpoint between
/// [`BASELINE_SCORE`] and 100.
pub const SATURATION_HITS: u32 = 3;

/// One trait's score for one answer set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub name: String,
    /// Always within [0, 100].
    pub score: u8,
}

/// Map an evidence count to [0, 100] with a saturating curve.
///
/// Integer arithmetic keeps the mapping bit-identical across calls and
/// platforms; the curve is monotone non-decreasing in `evidence` and
/// approaches 100 as evidence grows, with `halfway` evidence landing on the
/// midpoint between the baseline and 100.
pub fn saturating_score(evidence: u32, halfway: u32) -> u8 {
    let span = (100 - BASELINE_SCORE) as u64;
    let evidence = evidence as u64;
    BASELINE_SCORE + ((span * evidence) / (evidence + halfway as u64)) as u8
}

/// Map keyword hits to a trait score.
pub fn score_from_hits(hits: u32) -> u8 {
    saturating_score(hits, SATURATION_HITS)
}

/// Score every trait in `taxonomy`, in declaration order.
///
/// Total over the taxonomy: a trait whose keywords never appear still gets
/// [`BASELINE_SCORE`], so consumers never index a missing trait.
pub fn score_traits(features: &FeatureSet, taxonomy: &Taxonomy) -> Vec<TraitScore> {
    taxonomy
        .traits()
        .iter()
        .map(|def| {
            let hits: u32 = def.keywords.iter().map(|k| features.hits(k)).sum();
            let score = score_from_hits(hits);
            trace!(trait_name = %def.name, hits, score, "scored trait");
            TraitScore {
                name: def.name.clone(),
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_evidence_is_the_baseline() {
        assert_eq!(score_from_hits(0), BASELINE_SCORE);
    }

    #[test]
    fn curve_values_are_fixed() {
        assert_eq!(score_from_hits(1), 55);
        assert_eq!(score_from_hits(2), 64);
        assert_eq!(score_from_hits(3), 70);
        assert_eq!(score_from_hits(6), 80);
    }

    #[test]
    fn curve_is_monotone_and_bounded() {
        let mut prev = 0;
        for hits in 0..10_000 {
            let score = score_from_hits(hits);
            assert!(score >= prev);
            assert!(score <= 100);
            prev = score;
        }
    }

    #[test]
    fn huge_evidence_does_not_overflow() {
        assert!(score_from_hits(u32::MAX) <= 100);
    }
}
