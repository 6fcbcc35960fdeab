//! Feature extraction over a set of answers.
//!
//! [`FeatureSet::extract`] condenses all answers into one set of counts. Cue
//! matching is whole-word and case-insensitive: each cue is normalized to a
//! lowercase word sequence, and every non-overlapping consecutive-token
//! occurrence within a single answer counts as one hit. Whole-word matching
//! means "art" never hits inside "start"; callers that care about inflected
//! forms list them as separate cues.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::segment::{sentences, words};

/// Lexical signals condensed from a set of answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FeatureSet {
    /// Total words across all answers.
    pub word_count: usize,
    /// Total sentences across all answers.
    pub sentence_count: usize,
    /// Average words per sentence, rounded down; zero when there are no
    /// sentences.
    pub mean_sentence_words: usize,
    /// Hit count per normalized cue. Every requested cue that contains at
    /// least one word is present, possibly with zero hits.
    pub cue_hits: BTreeMap<String, u32>,
}

impl FeatureSet {
    /// Extract features from `answers`, counting occurrences of each `cue`.
    ///
    /// Empty strings and an empty answer set are fine and yield the neutral
    /// feature set: all counts zero, every cue present with zero hits.
    pub fn extract(answers: &[String], cues: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = answers.iter().map(|a| words(a)).collect();
        let word_count = tokenized.iter().map(Vec::len).sum();
        let sentence_count = answers.iter().map(|a| sentences(a).len()).sum();
        let mean_sentence_words = if sentence_count == 0 {
            0
        } else {
            word_count / sentence_count
        };

        let mut cue_hits = BTreeMap::new();
        for cue in cues {
            let phrase = words(cue);
            if phrase.is_empty() {
                continue;
            }
            let hits = tokenized.iter().map(|t| phrase_hits(t, &phrase)).sum();
            cue_hits.insert(phrase.join(" "), hits);
        }

        debug!(word_count, sentence_count, cues = cue_hits.len(), "extracted features");
        Self {
            word_count,
            sentence_count,
            mean_sentence_words,
            cue_hits,
        }
    }

    /// Hits recorded for `cue`; zero when the cue was never requested.
    pub fn hits(&self, cue: &str) -> u32 {
        let key = words(cue).join(" ");
        self.cue_hits.get(&key).copied().unwrap_or(0)
    }
}

/// Count non-overlapping occurrences of `phrase` in `tokens`.
fn phrase_hits(tokens: &[String], phrase: &[String]) -> u32 {
    if phrase.is_empty() {
        return 0;
    }
    let mut hits = 0;
    let mut i = 0;
    while i + phrase.len() <= tokens.len() {
        if tokens[i..i + phrase.len()] == phrase[..] {
            hits += 1;
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    hits
}
