use serde_json::json;
use wheel_core::{RawWordEntry, ScoreDomain, WordEntry, WordTable};

fn raw(word: &str, digits: &[i64]) -> RawWordEntry {
    RawWordEntry {
        word: Some(word.to_string()),
        digits: digits.iter().map(|&d| json!(d)).collect(),
        explanations: Vec::new(),
    }
}

#[test]
fn one_to_ten_domain_clamps_out_of_range_scores() {
    let d = ScoreDomain::ONE_TO_TEN;
    assert_eq!(d.clamp(0), 1);
    assert_eq!(d.clamp(15), 10);
    assert_eq!(d.coerce(&json!(0)), 1);
    assert_eq!(d.coerce(&json!(15)), 10);
    assert_eq!(d.coerce(&json!(7)), 7);
}

#[test]
fn coerce_handles_non_numeric_input() {
    let d = ScoreDomain::ONE_TO_TEN;
    assert_eq!(d.coerce(&json!("8")), 8); // numeric string
    assert_eq!(d.coerce(&json!("7.6")), 8); // rounds
    assert_eq!(d.coerce(&json!("junk")), 1);
    assert_eq!(d.coerce(&json!(null)), 1);
    assert_eq!(d.coerce(&json!([3])), 1);
}

#[test]
fn score_index_maps_into_wheel_items() {
    let d = ScoreDomain::ONE_TO_TEN;
    assert_eq!(d.item_count(), 10);
    assert_eq!(d.score_index(1), 0);
    assert_eq!(d.score_index(10), 9);
    assert_eq!(d.labels()[0], "1");
    assert_eq!(d.labels()[9], "10");

    let d = ScoreDomain::ZERO_TO_NINE;
    assert_eq!(d.score_index(0), 0);
    assert_eq!(d.score_index(9), 9);
}

#[test]
fn entry_without_label_or_scores_is_rejected() {
    let d = ScoreDomain::ZERO_TO_NINE;
    let nameless = RawWordEntry {
        word: None,
        digits: vec![json!(1)],
        explanations: Vec::new(),
    };
    assert!(WordEntry::from_raw(&nameless, d).is_err());

    let blank = RawWordEntry {
        word: Some("   ".to_string()),
        digits: vec![json!(1)],
        explanations: Vec::new(),
    };
    assert!(WordEntry::from_raw(&blank, d).is_err());

    let scoreless = RawWordEntry {
        word: Some("X".to_string()),
        digits: Vec::new(),
        explanations: Vec::new(),
    };
    assert!(WordEntry::from_raw(&scoreless, d).is_err());
}

#[test]
fn short_vectors_are_padded_not_rejected() {
    let d = ScoreDomain::ONE_TO_TEN;
    let entry = WordEntry::from_raw(&raw("Short", &[9, 9]), d).unwrap();
    assert_eq!(entry.scores, [9, 9, 1, 1]);
    assert_eq!(entry.explanations, ["", "", "", ""]);
}

#[test]
fn table_skips_bad_entries_and_keeps_good_ones() {
    let d = ScoreDomain::ZERO_TO_NINE;
    let raws = vec![
        raw("Good", &[1, 2, 3, 4]),
        RawWordEntry::default(),
        raw("Also Good", &[5, 6, 7, 8]),
    ];
    let table = WordTable::from_raw(&raws, d);
    assert_eq!(table.len(), 2);
    assert_eq!(table.labels(), vec!["Good", "Also Good"]);
}

#[test]
fn empty_feed_degrades_to_fallback() {
    let table = WordTable::from_raw(&[], ScoreDomain::ONE_TO_TEN);
    assert!(!table.is_empty());
    for entry in table.entries() {
        for &s in &entry.scores {
            assert!((1..=10).contains(&s));
        }
    }
}

#[test]
fn selecting_a_word_yields_its_wheel_targets_and_sum() {
    let d = ScoreDomain::ZERO_TO_NINE;
    let raws = vec![raw("Alpha", &[1, 5, 3, 7]), raw("Bravo", &[9, 2, 8, 4])];
    let table = WordTable::from_raw(&raws, d);

    let targets = table.spin_targets(1).unwrap();
    assert_eq!(targets.wheel_indices, [9, 2, 8, 4]);
    assert_eq!(targets.total, 23);

    assert!(table.spin_targets(2).is_none());
}

#[test]
fn sort_orders_by_total_then_label() {
    let d = ScoreDomain::ONE_TO_TEN;
    let raws = vec![
        raw("A", &[5, 5, 5, 5]),  // 20
        raw("C", &[10, 5, 5, 5]), // 25
        raw("B", &[5, 10, 5, 5]), // 25
    ];
    let mut table = WordTable::from_raw(&raws, d);
    table.sort_by_total();
    assert_eq!(table.labels(), vec!["B", "C", "A"]);
}

#[test]
fn total_bounds_follow_the_domain() {
    let table = WordTable::fallback(ScoreDomain::ONE_TO_TEN);
    assert_eq!(table.min_total(), 4);
    assert_eq!(table.max_total(), 40);
}

#[test]
fn feed_json_decodes_with_unknown_and_mixed_fields() {
    let json = r#"[
        {"word": "PR Cycle Time", "digits": [8, "7", 6.4, 15], "color": "red"},
        {"word": "Lead Time", "digits": [7, 8, 6, 8],
         "explanations": ["a", "b", "c", "d"]}
    ]"#;
    let raws: Vec<RawWordEntry> = serde_json::from_str(json).unwrap();
    let table = WordTable::from_raw(&raws, ScoreDomain::ONE_TO_TEN);
    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[0].scores, [8, 7, 6, 10]);
    assert_eq!(table.entries()[1].explanations[3], "d");
}
