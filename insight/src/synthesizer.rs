//! Profile synthesis.
//!
//! Turns per-trait scores into the final [`PersonalityProfile`]: a stable
//! descending sort, the dominant-trait selection, band-based feedback text,
//! a one-sentence summary and the tip list.

use tracing::debug;

use crate::profile::{PersonalityProfile, TraitDetail};
use crate::scorer::TraitScore;
use crate::taxonomy::{Taxonomy, TraitDefinition};

/// Lowest score in the "high" feedback band.
pub const HIGH_BAND_FLOOR: u8 = 70;

/// Lowest score in the "mid" feedback band; anything below is "low".
pub const MID_BAND_FLOOR: u8 = 40;

/// How many top-ranked traits are reported as dominant.
pub const DOMINANT_TRAIT_COUNT: usize = 3;

/// General tip appended after the per-trait tips.
const GENERAL_TIP: &str =
    "Structure every answer with the STAR method: situation, task, action, result.";

/// Feedback templates selected for `score`: `(strengths, improvements)`.
fn banded(def: &TraitDefinition, score: u8) -> (&[String], &[String]) {
    if score >= HIGH_BAND_FLOOR {
        (&def.strengths.high, &def.improvements.high)
    } else if score >= MID_BAND_FLOOR {
        (&def.strengths.mid, &def.improvements.mid)
    } else {
        (&def.strengths.low, &def.improvements.low)
    }
}

/// Build the profile from per-trait scores.
///
/// `scores` must cover `taxonomy` exactly, in declaration order, as
/// [`score_traits`](crate::score_traits) produces them. Anything else is a
/// contract violation in the caller, not a recoverable condition.
pub fn synthesize(scores: Vec<TraitScore>, taxonomy: &Taxonomy) -> PersonalityProfile {
    assert_eq!(
        scores.len(),
        taxonomy.traits().len(),
        "scores must cover the taxonomy"
    );
    for (score, def) in scores.iter().zip(taxonomy.traits()) {
        assert_eq!(
            score.name, def.name,
            "scores must follow taxonomy declaration order"
        );
    }

    // Stable sort: equal scores keep taxonomy declaration order.
    let mut ranked: Vec<(&TraitDefinition, TraitScore)> =
        taxonomy.traits().iter().zip(scores).collect();
    ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    let dominant_traits: Vec<String> = ranked
        .iter()
        .take(DOMINANT_TRAIT_COUNT)
        .map(|(_, s)| s.name.clone())
        .collect();

    let summary = match dominant_traits.as_slice() {
        [] => "There is not enough material to profile yet.".to_string(),
        [only] => format!("Your answers lead with {only}."),
        [first, second, ..] => {
            format!("Your answers lead with {first}, supported by {second}.")
        }
    };

    let mut interview_tips: Vec<String> = ranked
        .iter()
        .take(DOMINANT_TRAIT_COUNT)
        .map(|(def, _)| def.tip.clone())
        .collect();
    interview_tips.push(GENERAL_TIP.to_string());

    let traits = ranked
        .into_iter()
        .map(|(def, score)| {
            let (strengths, improvements) = banded(def, score.score);
            TraitDetail {
                name: score.name,
                score: score.score,
                description: def.description.clone(),
                strengths: strengths.to_vec(),
                improvements: improvements.to_vec(),
            }
        })
        .collect();

    debug!(dominant = ?dominant_traits, "synthesized profile");
    PersonalityProfile {
        summary,
        dominant_traits,
        traits,
        interview_tips,
    }
}
