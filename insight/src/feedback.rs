//! Per-answer feedback.
//!
//! The results view lists strengths and improvement points for each answered
//! question. [`review_answers`] derives them from the same lexical signals
//! as the rest of the engine: fixed rules, no randomness, one entry per
//! answer in input order.

use lexis::{sentences, words};
use serde::{Deserialize, Serialize};

/// Word count below which an answer reads as too thin to assess.
pub const BRIEF_ANSWER_WORDS: usize = 30;

/// Cues that mark an answer as landing on an outcome.
const OUTCOME_CUES: &[&str] = &["result", "results", "outcome", "impact", "learned"];

/// Strengths and improvement points for one answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Review each answer in order. Every entry has at least one line of
/// feedback; an empty answer set yields an empty list.
pub fn review_answers(answers: &[String]) -> Vec<AnswerFeedback> {
    answers.iter().map(|a| review_answer(a)).collect()
}

fn review_answer(answer: &str) -> AnswerFeedback {
    let tokens = words(answer);
    let sentence_count = sentences(answer).len();
    let mut feedback = AnswerFeedback::default();

    if tokens.len() >= BRIEF_ANSWER_WORDS {
        feedback
            .strengths
            .push("Enough detail to follow your approach".to_string());
    } else {
        feedback
            .improvements
            .push("Expand the story; there is not enough detail to assess your approach".to_string());
    }

    if answer.chars().any(|c| c.is_ascii_digit()) {
        feedback
            .strengths
            .push("Backs the outcome with concrete numbers".to_string());
    } else {
        feedback
            .improvements
            .push("Quantify the result with a number or metric".to_string());
    }

    if OUTCOME_CUES.iter().any(|cue| tokens.iter().any(|t| t == cue)) {
        feedback.strengths.push("Lands on an outcome".to_string());
    } else {
        feedback
            .improvements
            .push("Close with the result and what you learned".to_string());
    }

    if sentence_count >= 3 {
        feedback
            .strengths
            .push("Clear multi-step structure".to_string());
    }

    feedback
}
