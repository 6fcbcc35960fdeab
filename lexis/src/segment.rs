//! Word and sentence splitting.
//!
//! [`words`] lowercases text and splits it on Unicode word boundaries.
//! [`sentences`] uses the [`pragmatic_segmenter`] crate to detect sentence
//! boundaries, which copes with abbreviations and quoted speech better than
//! splitting on terminal punctuation.

use pragmatic_segmenter::Segmenter;
use unicode_segmentation::UnicodeSegmentation;

/// Split `text` into lowercased Unicode words.
///
/// # Examples
/// ```
/// use lexis::words;
/// assert_eq!(words("Hello, World!"), vec!["hello", "world"]);
/// ```
pub fn words(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Split `text` into trimmed, non-empty sentences.
pub fn sentences(text: &str) -> Vec<String> {
    let seg = Segmenter::new().expect("segmenter init");
    seg.segment(text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
