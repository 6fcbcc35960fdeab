use lexis::FeatureSet;

fn answers(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

fn cues(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn counts_words_and_sentences_across_answers() {
    let set = FeatureSet::extract(
        &answers(&["I led the team. We shipped.", "It worked."]),
        &[],
    );
    assert_eq!(set.word_count, 8);
    assert_eq!(set.sentence_count, 3);
    assert_eq!(set.mean_sentence_words, 2);
}

#[test]
fn cue_hits_are_case_insensitive_and_frequency_counted() {
    let set = FeatureSet::extract(
        &answers(&["Team first. The TEAM agreed the team was right."]),
        &cues(&["team"]),
    );
    assert_eq!(set.hits("team"), 3);
}

#[test]
fn cue_matching_is_whole_word_not_substring() {
    let set = FeatureSet::extract(
        &answers(&["We made a fresh start on the artwork."]),
        &cues(&["art"]),
    );
    assert_eq!(set.hits("art"), 0);
}

#[test]
fn phrase_cues_match_consecutive_words() {
    let set = FeatureSet::extract(
        &answers(&["We found the root cause quickly. The cause had deep roots."]),
        &cues(&["root cause"]),
    );
    assert_eq!(set.hits("root cause"), 1);
}

#[test]
fn phrase_cues_do_not_match_across_answers() {
    let set = FeatureSet::extract(
        &answers(&["It all comes down to the root", "cause and effect matter."]),
        &cues(&["root cause"]),
    );
    assert_eq!(set.hits("root cause"), 0);
}

#[test]
fn empty_input_yields_the_neutral_feature_set() {
    let set = FeatureSet::extract(&[], &cues(&["team", "risk"]));
    assert_eq!(set.word_count, 0);
    assert_eq!(set.sentence_count, 0);
    assert_eq!(set.mean_sentence_words, 0);
    assert_eq!(set.hits("team"), 0);
    assert_eq!(set.hits("risk"), 0);
    assert_eq!(set.cue_hits.len(), 2);
}

#[test]
fn empty_strings_are_not_an_error() {
    let set = FeatureSet::extract(&answers(&["", "  "]), &cues(&["team"]));
    assert_eq!(set.word_count, 0);
    assert_eq!(set.hits("team"), 0);
}

#[test]
fn unrequested_cue_reads_as_zero() {
    let set = FeatureSet::extract(&answers(&["teamwork everywhere"]), &[]);
    assert_eq!(set.hits("team"), 0);
}

#[test]
fn feature_set_serializes_with_stable_cue_order() {
    let set = FeatureSet::extract(&answers(&["bold team"]), &cues(&["team", "bold"]));
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json["word_count"], 2);
    assert_eq!(json["cue_hits"]["bold"], 1);
    assert_eq!(json["cue_hits"]["team"], 1);
}

#[test]
fn extraction_is_deterministic() {
    let a = answers(&["I coordinate with my team.", "We resolve conflicts."]);
    let c = cues(&["team", "coordinate", "conflicts"]);
    assert_eq!(FeatureSet::extract(&a, &c), FeatureSet::extract(&a, &c));
}
