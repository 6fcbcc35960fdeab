//! Session-level performance metrics.
//!
//! Alongside the trait profile, the results dashboard shows an overall
//! score and four delivery metrics. They are derived here from the same
//! lexical signals as the trait scores, with the same guarantees: pure,
//! deterministic, total over any input including the empty answer set.

use lexis::FeatureSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scorer::{saturating_score, BASELINE_SCORE, SATURATION_HITS};

/// Cues counted as evidence of assertive delivery.
const ASSERTIVE_CUES: &[&str] = &[
    "led", "achieved", "delivered", "decided", "confident", "successfully", "drove", "owned",
    "ensured", "committed",
];

/// Word count at which the content metric reaches the midpoint between the
/// baseline and 100.
const CONTENT_HALFWAY_WORDS: u32 = 120;

/// Mean sentence length (words) read as clear prose.
const CLARITY_BAND: (usize, usize) = (8, 20);

/// Mean sentence length (words) matching a steady spoken cadence.
const PACING_BAND: (usize, usize) = (10, 16);

/// Score inside a target band; each word outside it costs [`BAND_PENALTY`].
const BAND_TOP: u8 = 90;

/// Penalty per word of distance outside a target band.
const BAND_PENALTY: u8 = 5;

/// Delivery metrics for one answer set, each within [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub confidence: u8,
    pub clarity: u8,
    pub content: u8,
    pub pacing: u8,
    /// Integer mean of the other four.
    pub overall: u8,
}

/// Assess delivery metrics for `answers`.
///
/// Empty input yields the neutral metrics: every field at
/// [`BASELINE_SCORE`].
pub fn assess_metrics(answers: &[String]) -> PerformanceMetrics {
    let cues: Vec<String> = ASSERTIVE_CUES.iter().map(|c| c.to_string()).collect();
    let features = FeatureSet::extract(answers, &cues);

    let assertive_hits: u32 = features.cue_hits.values().sum();
    let confidence = saturating_score(assertive_hits, SATURATION_HITS);
    let content = saturating_score(features.word_count as u32, CONTENT_HALFWAY_WORDS);
    let clarity = band_score(features.mean_sentence_words, CLARITY_BAND);
    let pacing = band_score(features.mean_sentence_words, PACING_BAND);
    let overall = ((confidence as u16 + clarity as u16 + content as u16 + pacing as u16) / 4) as u8;

    debug!(confidence, clarity, content, pacing, overall, "assessed metrics");
    PerformanceMetrics {
        confidence,
        clarity,
        content,
        pacing,
        overall,
    }
}

/// Score a mean sentence length against a target band.
///
/// Inside the band scores [`BAND_TOP`]; each word outside it subtracts
/// [`BAND_PENALTY`], floored at [`BASELINE_SCORE`]. A mean of zero (no
/// sentences at all) is the neutral baseline.
fn band_score(mean: usize, (lo, hi): (usize, usize)) -> u8 {
    if mean == 0 {
        return BASELINE_SCORE;
    }
    let distance = if mean < lo {
        lo - mean
    } else if mean > hi {
        mean - hi
    } else {
        0
    };
    let penalty = (distance as u64 * BAND_PENALTY as u64).min((BAND_TOP - BASELINE_SCORE) as u64);
    BAND_TOP - penalty as u8
}
