//! The static trait taxonomy.
//!
//! A [`Taxonomy`] is an ordered, validated table of [`TraitDefinition`]s.
//! Declaration order is significant: it is the tie-break order for every
//! ranking the engine produces. The table is configuration, fixed at
//! construction; scoring never mutates it.

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

/// Feedback templates keyed by score band.
#[derive(Clone, Debug, Serialize)]
pub struct Banded {
    pub high: Vec<String>,
    pub mid: Vec<String>,
    pub low: Vec<String>,
}

impl Banded {
    pub fn new(high: &[&str], mid: &[&str], low: &[&str]) -> Self {
        let own = |texts: &[&str]| texts.iter().map(|t| t.to_string()).collect();
        Self {
            high: own(high),
            mid: own(mid),
            low: own(low),
        }
    }
}

/// One personality dimension: a name, the lexical cues that evidence it,
/// and the feedback templates the synthesizer draws from.
#[derive(Clone, Debug, Serialize)]
pub struct TraitDefinition {
    pub name: String,
    /// Cues counted as evidence. Whole-word matching, so inflected forms
    /// ("conflict", "conflicts") are listed separately.
    pub keywords: Vec<String>,
    pub description: String,
    pub strengths: Banded,
    pub improvements: Banded,
    /// Interview tip surfaced when this trait is dominant.
    pub tip: String,
}

impl TraitDefinition {
    pub fn new(
        name: impl Into<String>,
        keywords: &[&str],
        description: impl Into<String>,
        strengths: Banded,
        improvements: Banded,
        tip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.into(),
            strengths,
            improvements,
            tip: tip.into(),
        }
    }
}

/// Misconfigured taxonomy table. These are startup-time errors: a table
/// that fails validation never reaches the scoring pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("duplicate trait name: {0}")]
    DuplicateName(String),
    #[error("trait \"{0}\" has no keywords")]
    NoKeywords(String),
}

/// Validated, ordered set of trait definitions.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    traits: Vec<TraitDefinition>,
}

impl Taxonomy {
    /// Validate `traits` into a taxonomy.
    ///
    /// Rejects duplicate names (each trait must appear exactly once in
    /// every profile) and traits with no keywords (they could never score
    /// above baseline, which is a configuration mistake, not a trait).
    pub fn new(traits: Vec<TraitDefinition>) -> Result<Self, TaxonomyError> {
        let mut seen = std::collections::BTreeSet::new();
        for def in &traits {
            if !seen.insert(def.name.clone()) {
                return Err(TaxonomyError::DuplicateName(def.name.clone()));
            }
            if def.keywords.is_empty() {
                return Err(TaxonomyError::NoKeywords(def.name.clone()));
            }
        }
        Ok(Self { traits })
    }

    /// Trait definitions in declaration order.
    pub fn traits(&self) -> &[TraitDefinition] {
        &self.traits
    }

    /// All keywords across the table, for feature extraction.
    pub fn cues(&self) -> Vec<String> {
        self.traits
            .iter()
            .flat_map(|def| def.keywords.iter().cloned())
            .collect()
    }

    /// The built-in six-trait table.
    ///
    /// Built lazily on first use; the construction `expect` is deliberate,
    /// a table that fails its own validation is a fatal build defect.
    pub fn default_table() -> &'static Taxonomy {
        &DEFAULT_TABLE
    }
}

static DEFAULT_TABLE: Lazy<Taxonomy> = Lazy::new(|| {
    Taxonomy::new(vec![
        TraitDefinition::new(
            "Collaboration",
            &[
                "team", "teams", "teammate", "teammates", "coordinate", "coordinated",
                "collaborate", "collaborated", "together", "conflict", "conflicts",
                "consensus", "colleagues",
            ],
            "How readily you work with and through other people.",
            Banded::new(
                &[
                    "You anchor your answers in shared work and credit the group",
                    "You describe settling friction directly and calmly",
                ],
                &["You bring collaborators in when the story calls for it"],
                &["Your answers rarely bring other people into the picture"],
            ),
            Banded::new(
                &["Name the concrete outcome the group reached, not just the harmony"],
                &[
                    "Work one specific teammate interaction into each story",
                    "Say how disagreements actually got settled",
                ],
                &[
                    "Pick at least one answer that centers on a team effort",
                    "Prepare a story about resolving a disagreement",
                ],
            ),
            "Rehearse one team story and name who did what, including you.",
        ),
        TraitDefinition::new(
            "Communication",
            &[
                "explain", "explained", "present", "presented", "listen", "listened",
                "clearly", "articulate", "communicate", "communicated", "audience",
                "feedback",
            ],
            "How deliberately you shape what you say for the listener.",
            Banded::new(
                &[
                    "You flag who you were talking to and tailor the message to them",
                    "You close loops by checking the message landed",
                ],
                &["You describe what you said more often than how it was received"],
                &["Your answers stay inside your own head rather than an exchange"],
            ),
            Banded::new(
                &["Quantify the effect your communication had on the outcome"],
                &[
                    "Add the audience's reaction to each story",
                    "Mention one time you adjusted your message mid-conversation",
                ],
                &[
                    "Describe one moment where explaining something changed the result",
                    "Practice summarizing each answer in a single closing sentence",
                ],
            ),
            "End each answer with one sentence that restates the outcome plainly.",
        ),
        TraitDefinition::new(
            "Leadership",
            &[
                "led", "lead", "leading", "mentor", "mentored", "initiative",
                "ownership", "delegate", "delegated", "drove", "organized", "vision",
            ],
            "How much you step up to own direction and unblock others.",
            Banded::new(
                &[
                    "You claim ownership of outcomes, not just tasks",
                    "You describe growing other people, not only directing them",
                ],
                &["You take charge when asked but rarely volunteer the steering"],
                &["Your answers position you as a participant rather than a driver"],
            ),
            Banded::new(
                &["Balance the driving stories with one about deliberately stepping back"],
                &[
                    "Name a decision that was yours alone and defend it",
                    "Include one story where you unblocked someone else",
                ],
                &[
                    "Find one story, however small, where you set the direction",
                    "Replace \"we decided\" with \"I proposed\" where it is true",
                ],
            ),
            "Pick one decision you drove end to end and practice defending it.",
        ),
        TraitDefinition::new(
            "Adaptability",
            &[
                "adapt", "adapted", "change", "changed", "flexible", "learn",
                "learned", "pivot", "pivoted", "adjust", "adjusted", "unfamiliar",
            ],
            "How comfortably you absorb change and unfamiliar ground.",
            Banded::new(
                &[
                    "You treat changed plans as material for the story, not a grievance",
                    "You show a repeatable way of getting up to speed fast",
                ],
                &["You mention change but gloss over how you handled it"],
                &["Your answers read as if every plan survived contact intact"],
            ),
            Banded::new(
                &["Contrast your first approach with the one that finally worked"],
                &[
                    "Spell out the moment you realized the plan had to change",
                    "Name what you had to learn and how long it took",
                ],
                &[
                    "Prepare one story where the requirements moved under you",
                    "Mention one skill you picked up under time pressure",
                ],
            ),
            "Tell one story where the plan broke and walk through your recovery.",
        ),
        TraitDefinition::new(
            "Problem-Solving",
            &[
                "solve", "solved", "solution", "resolve", "resolved", "analyze",
                "analyzed", "debug", "debugged", "investigate", "investigated",
                "root cause", "systematic",
            ],
            "How methodically you break a problem down before acting.",
            Banded::new(
                &[
                    "You show your diagnostic path, not just the fix",
                    "You distinguish symptoms from the underlying cause",
                ],
                &["You reach solutions but skip the reasoning that got you there"],
                &["Your answers state outcomes without the problem behind them"],
            ),
            Banded::new(
                &["Add what you changed so the same problem cannot recur"],
                &[
                    "Walk through the two or three hypotheses you considered",
                    "Say what you ruled out and why",
                ],
                &[
                    "Structure one answer as problem, investigation, fix",
                    "Pick a story where the first fix was wrong",
                ],
            ),
            "Walk one problem from first symptom to root cause out loud.",
        ),
        TraitDefinition::new(
            "Risk-Taking",
            &[
                "risk", "risks", "gamble", "bold", "bet", "uncertain", "uncertainty",
                "experiment", "experimented", "venture", "dared", "leap",
            ],
            "How willing you are to act before the ground is certain.",
            Banded::new(
                &[
                    "You commit under uncertainty and own the consequences either way",
                    "You frame bets with what you stood to lose",
                ],
                &["You take calculated chances but lead with the safety net"],
                &["Your answers stay on well-mapped ground"],
            ),
            Banded::new(
                &["Pair each bold call with the signal that told you to make it"],
                &[
                    "Name the worst case you accepted before acting",
                    "Include one bet that did not pay off and what it taught you",
                ],
                &[
                    "Prepare one story where you moved without full information",
                    "Practice saying what you would have lost if it failed",
                ],
            ),
            "Describe one calculated bet, including the downside you accepted.",
        ),
    ])
    .expect("built-in taxonomy is valid")
});
