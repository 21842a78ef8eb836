use crate::ladder::adjacency::is_adjacent;
use crate::ladder::dictionary::Dictionary;
use crate::ladder::search::*;

fn animals() -> Dictionary {
    Dictionary::from_words(["at", "cab", "cat", "cats", "cog", "cot", "dog", "dot"])
}

fn sleepy() -> Dictionary {
    Dictionary::from_words([
        "sleep", "sheep", "steep", "seep", "weep", "wee", "were", "ware", "wade", "wake", "awake",
    ])
}

fn assert_valid_ladder(ladder: &[String], start: &str, end: &str, dictionary: &Dictionary) {
    assert_eq!(ladder.first().map(String::as_str), Some(start));
    assert_eq!(ladder.last().map(String::as_str), Some(end));
    for pair in ladder.windows(2) {
        assert!(is_adjacent(&pair[0], &pair[1]), "{pair:?} not adjacent");
    }
    for word in &ladder[1..] {
        assert!(dictionary.contains(word), "{word} not in dictionary");
    }
}

#[test]
fn test_cat_to_dog() {
    let ladder = find_ladder("cat", "dog", &animals());
    assert_eq!(ladder, vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn test_sleep_to_awake() {
    let dictionary = sleepy();
    let ladder = find_ladder("sleep", "awake", &dictionary);
    assert_eq!(ladder.len(), 8);
    assert_eq!(
        ladder,
        vec!["sleep", "seep", "weep", "wee", "were", "ware", "wake", "awake"]
    );
    assert_valid_ladder(&ladder, "sleep", "awake", &dictionary);
}

#[test]
fn test_same_word_is_empty() {
    assert!(find_ladder("cat", "cat", &animals()).is_empty());
    assert_eq!(
        search_ladder("cat", "cat", &animals(), &LadderOptions::default()),
        LadderOutcome::SameWord
    );
}

#[test]
fn test_unreachable_end_is_empty() {
    let dictionary = Dictionary::from_words(["cat", "cot", "zebra"]);
    assert!(find_ladder("cat", "zebra", &dictionary).is_empty());
    assert_eq!(
        search_ladder("cat", "zebra", &dictionary, &LadderOptions::default()),
        LadderOutcome::NotFound
    );
}

#[test]
fn test_end_missing_from_dictionary() {
    assert_eq!(
        search_ladder("cat", "cut", &animals(), &LadderOptions::default()),
        LadderOutcome::NotFound
    );
}

#[test]
fn test_start_outside_dictionary() {
    let dictionary = animals();
    let ladder = find_ladder("bat", "dog", &dictionary);
    assert_eq!(ladder, vec!["bat", "cat", "cot", "cog", "dog"]);
    assert_valid_ladder(&ladder, "bat", "dog", &dictionary);
}

#[test]
fn test_direct_neighbor() {
    assert_eq!(find_ladder("cat", "cats", &animals()), vec!["cat", "cats"]);
}

#[test]
fn test_empty_dictionary() {
    assert!(find_ladder("cat", "dog", &Dictionary::new()).is_empty());
}

#[test]
fn test_expansion_cap_truncates() {
    let opts = LadderOptions {
        max_expansions: Some(1),
    };
    assert_eq!(
        search_ladder("cat", "dog", &animals(), &opts),
        LadderOutcome::Truncated { expanded: 1 }
    );
}

#[test]
fn test_expansion_cap_still_finds_close_words() {
    let opts = LadderOptions {
        max_expansions: Some(1),
    };
    let outcome = search_ladder("cat", "cot", &animals(), &opts);
    assert!(outcome.is_found());
    assert_eq!(outcome.into_ladder(), vec!["cat", "cot"]);
}

#[test]
fn test_zero_cap_expands_nothing() {
    let opts = LadderOptions {
        max_expansions: Some(0),
    };
    assert_eq!(
        search_ladder("cat", "cot", &animals(), &opts),
        LadderOutcome::Truncated { expanded: 0 }
    );
}

#[test]
fn test_search_is_deterministic() {
    let dictionary = sleepy();
    let first = find_ladder("sheep", "wake", &dictionary);
    for _ in 0..5 {
        assert_eq!(find_ladder("sheep", "wake", &dictionary), first);
    }
    assert_valid_ladder(&first, "sheep", "wake", &dictionary);
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let found = LadderOutcome::Found {
        ladder: vec!["cat".into(), "cot".into()],
    };
    assert_eq!(
        serde_json::to_value(&found).unwrap(),
        serde_json::json!({"status": "found", "ladder": ["cat", "cot"]})
    );
    assert_eq!(
        serde_json::to_value(LadderOutcome::NotFound).unwrap(),
        serde_json::json!({"status": "not_found"})
    );
}
