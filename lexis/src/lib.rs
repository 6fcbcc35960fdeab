//! Lexical analysis of interview answers.
//!
//! This crate splits free text into words and sentences and condenses a set
//! of answers into a [`FeatureSet`] of simple lexical signals: word and
//! sentence counts, average sentence length, and per-cue hit counts.

pub mod features;
pub mod segment;

pub use crate::features::*;
pub use crate::segment::*;
