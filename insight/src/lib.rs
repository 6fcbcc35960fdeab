//! Deterministic personality and performance analysis of interview answers.
//!
//! The engine is a pure, synchronous pipeline with three stages: lexical
//! feature extraction (the [`lexis`] crate), trait scoring
//! ([`score_traits`]) and profile synthesis ([`synthesize`]). [`analyze`]
//! runs the whole pipeline over the built-in trait taxonomy; tests and
//! embedders that want a different table use [`analyze_with`].
//!
//! Every call is a pure function of its arguments and the immutable
//! taxonomy, so concurrent callers need no coordination and repeated calls
//! return identical profiles.

pub mod feedback;
pub mod metrics;
pub mod profile;
pub mod scorer;
pub mod synthesizer;
pub mod taxonomy;

pub use crate::feedback::*;
pub use crate::metrics::*;
pub use crate::profile::*;
pub use crate::scorer::*;
pub use crate::synthesizer::*;
pub use crate::taxonomy::*;

use lexis::FeatureSet;
use tracing::debug;

/// Analyze `answers` against the built-in trait taxonomy.
///
/// This is the engine's sole entry point for the surrounding UI. It never
/// fails: an empty answer set yields a full baseline profile.
pub fn analyze(answers: &[String]) -> PersonalityProfile {
    analyze_with(answers, Taxonomy::default_table())
}

/// Analyze `answers` against an explicit `taxonomy`.
pub fn analyze_with(answers: &[String], taxonomy: &Taxonomy) -> PersonalityProfile {
    debug!(answers = answers.len(), traits = taxonomy.traits().len(), "analyzing answers");
    let features = FeatureSet::extract(answers, &taxonomy.cues());
    let scores = score_traits(&features, taxonomy);
    synthesize(scores, taxonomy)
}
