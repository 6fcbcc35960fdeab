//! The analysis output value objects.
//!
//! A [`PersonalityProfile`] is created fresh on every analysis call and
//! handed to the caller; the engine keeps no copy and attaches no identity.
//! Persistence, if any, is the caller's concern.

use serde::{Deserialize, Serialize};

/// One trait's full entry in a profile: the score plus the feedback text
/// selected for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDetail {
    pub name: String,
    /// Always within [0, 100].
    pub score: u8,
    pub description: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Structured result of analyzing one answer set.
///
/// `traits` holds every taxonomy trait exactly once, sorted by descending
/// score with taxonomy declaration order breaking ties. `dominant_traits`
/// is the leading names of that ordering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub summary: String,
    pub dominant_traits: Vec<String>,
    pub traits: Vec<TraitDetail>,
    pub interview_tips: Vec<String>,
}
