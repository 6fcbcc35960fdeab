//! The pipeline over a substituted, smaller taxonomy.

use insight::{analyze_with, Banded, Taxonomy, TraitDefinition, BASELINE_SCORE};

fn tiny_table() -> Taxonomy {
    Taxonomy::new(vec![
        TraitDefinition::new(
            "Curiosity",
            &["why", "wonder", "explore"],
            "Asks before assuming.",
            Banded::new(&["digs in"], &["asks sometimes"], &["rarely asks"]),
            Banded::new(&["keep digging"], &["ask more"], &["start asking"]),
            "Ask one why per answer.",
        ),
        TraitDefinition::new(
            "Patience",
            &["waited", "patiently", "steady"],
            "Holds course under delay.",
            Banded::new(&["holds steady"], &["mostly steady"], &["rushes"]),
            Banded::new(&["stay steady"], &["slow down"], &["practice waiting"]),
            "Pause before answering.",
        ),
    ])
    .unwrap()
}

fn answers(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn dominant_traits_cap_at_the_taxonomy_size() {
    let table = tiny_table();
    let profile = analyze_with(&answers(&["I wonder why it broke, so I explore."]), &table);
    assert_eq!(profile.dominant_traits, vec!["Curiosity", "Patience"]);
    assert_eq!(profile.traits.len(), 2);
    assert_eq!(profile.interview_tips.len(), 3);
}

#[test]
fn unevidenced_traits_sit_at_the_baseline() {
    let table = tiny_table();
    let profile = analyze_with(&answers(&["I waited patiently."]), &table);
    assert_eq!(profile.dominant_traits[0], "Patience");
    let curiosity = profile.traits.iter().find(|t| t.name == "Curiosity").unwrap();
    assert_eq!(curiosity.score, BASELINE_SCORE);
}

#[test]
fn ties_keep_declaration_order() {
    let table = tiny_table();
    let profile = analyze_with(&[], &table);
    let names: Vec<&str> = profile.traits.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Curiosity", "Patience"]);
}
