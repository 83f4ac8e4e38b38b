//! End-to-end typing flows through the practice engine.
//!
//! Exercises the complete loop the application drives: encode a target,
//! feed key presses one at a time, watch the reconstructed text, and score
//! the submission.

use libtamil99::{create_engine_tamil99, Config, ItemState, PracticeEngine, Tamil99Codec};

fn engine() -> PracticeEngine<Tamil99Codec> {
    create_engine_tamil99(Config::default())
}

/// Typing exactly the encoder's output must reconstruct the target.
#[test]
fn typing_the_expected_keys_reconstructs_the_target() {
    let engine = engine();
    for target in [
        "கா",
        "தமிழ்",
        "வணக்கம்",
        "அ ஆ",
        "க்க",
        "௧",
        "௧௨௩",
        "ஸ்ரீ",
        "abc",
        "அம்மா!",
    ] {
        let mut item = engine.begin_item(target);
        let labels: Vec<String> = item
            .expected_keys()
            .iter()
            .map(|t| t.label.clone())
            .collect();
        for label in &labels {
            assert!(
                item.press_key(label),
                "key {label:?} rejected while typing {target:?}"
            );
        }
        assert!(item.is_complete(), "{target:?} did not complete");
        assert_eq!(item.current_text(), target);
        assert_eq!(item.state(), ItemState::Complete);
    }
}

#[test]
fn ligature_types_as_two_keys() {
    let engine = engine();
    let mut item = engine.begin_item("கா");

    assert!(item.press_key("h"));
    // The combination is half-typed: nothing to show yet
    assert_eq!(item.current_text(), "");
    assert!(!item.is_complete());

    assert!(item.press_key("q"));
    assert_eq!(item.current_text(), "கா");
    assert!(item.is_complete());
}

#[test]
fn wrong_key_after_ligature_start_changes_nothing() {
    let engine = engine();
    let mut item = engine.begin_item("கா");

    assert!(item.press_key("h"));
    assert!(!item.press_key("x"));

    assert_eq!(item.current_text(), "");
    assert_eq!(item.typed_keys(), ["H"]);
    assert_eq!(item.state(), ItemState::Error);
    assert!(!item.is_complete());
}

#[test]
fn numeral_prefix_must_be_complete() {
    let engine = engine();
    let mut item = engine.begin_item("௧");

    assert!(item.press_key("^"));
    // Skipping '#' is rejected and the decode stays stuck
    assert!(!item.press_key("1"));
    assert_eq!(item.current_text(), "");
    assert_eq!(item.typed_keys(), ["^"]);

    assert!(item.press_key("#"));
    assert!(item.press_key("1"));
    assert_eq!(item.current_text(), "௧");
    assert!(item.is_complete());
}

#[test]
fn space_needs_a_space_press() {
    let engine = engine();
    let mut item = engine.begin_item("அ ஆ");

    assert!(item.press_key("a"));
    // A letter key at the space position is rejected
    assert!(!item.press_key("q"));
    assert_eq!(item.current_text(), "அ");

    assert!(item.press_key(" "));
    assert!(item.press_key("q"));
    assert_eq!(item.current_text(), "அ ஆ");
    assert!(item.is_complete());
}

#[test]
fn backspace_walks_back_through_a_word() {
    let engine = engine();
    let mut item = engine.begin_item("தமிழ்");
    let labels: Vec<String> = item
        .expected_keys()
        .iter()
        .map(|t| t.label.clone())
        .collect();

    for label in &labels {
        assert!(item.press_key(label));
    }
    assert!(item.is_complete());

    // Unwind completely
    for _ in 0..labels.len() {
        assert!(item.backspace());
    }
    assert_eq!(item.current_text(), "");
    assert_eq!(item.state(), ItemState::Empty);

    // And retype
    for label in &labels {
        assert!(item.press_key(label));
    }
    assert_eq!(item.current_text(), "தமிழ்");
}

#[test]
fn press_then_backspace_is_identity_mid_item() {
    let engine = engine();
    let mut item = engine.begin_item("வணக்கம்");

    assert!(item.press_key("v"));
    assert!(item.press_key("p"));

    let text = item.current_text().to_string();
    let typed = item.typed_keys().to_vec();

    let next = item.next_key().unwrap().label.clone();
    assert!(item.press_key(&next));
    assert!(item.backspace());

    assert_eq!(item.current_text(), text);
    assert_eq!(item.typed_keys(), typed.as_slice());
}

#[test]
fn error_state_is_transient() {
    let engine = engine();
    let mut item = engine.begin_item("க");

    assert!(!item.press_key("x"));
    assert_eq!(item.state(), ItemState::Error);

    // A correct press at the same position clears the error
    assert!(item.press_key("h"));
    assert_eq!(item.state(), ItemState::Complete);
}

#[test]
fn completed_item_scores_through_a_session() {
    let engine = engine();
    let mut session = engine.new_session();

    let mut item = engine.begin_item("கா");
    item.press_key("h");
    item.press_key("q");
    assert!(item.is_complete());

    let result = session.submit(item.current_text(), item.target(), 60.0);
    assert_eq!(result.accuracy, 100.0);
    assert_eq!(result.errors, 0);
    assert!(result.wpm > 0.0);
    assert_eq!(session.aggregate_errors(), 0);
}

#[test]
fn abandoned_item_scores_its_partial_text() {
    let engine = engine();
    let mut session = engine.new_session();

    let mut item = engine.begin_item("கா அ");
    item.press_key("h");
    item.press_key("q");
    item.press_key(" ");

    let result = session.submit(item.current_text(), item.target(), 60.0);
    // "கா " against "கா அ": three of four positions match
    assert_eq!(result.accuracy, 75.0);
    assert_eq!(result.errors, 1);
}

#[test]
fn latin_and_punctuation_targets_use_the_fallback() {
    let engine = engine();
    let mut item = engine.begin_item("ok!");

    assert!(item.press_key("o"));
    assert!(item.press_key("k"));
    // '!' is typed as shifted '1'
    assert!(item.press_key("1"));
    assert_eq!(item.current_text(), "ok!");
    assert!(item.is_complete());
}

#[test]
fn engine_caches_expected_keys_between_items() {
    let engine = engine();
    let _ = engine.begin_item("தமிழ்");
    let _ = engine.begin_item("தமிழ்");
    let (hits, misses) = engine.cache_stats();
    assert_eq!(hits, 1);
    assert_eq!(misses, 1);
}

#[test]
fn next_key_drives_keyboard_hints() {
    let engine = engine();
    let mut item = engine.begin_item("ஸ்ரீ");

    // First key is the shifted grantha ஸ on Q
    let first = item.next_key().unwrap().clone();
    assert_eq!(first.label, "Q");
    assert!(first.needs_shift);

    assert!(item.press_key("q"));
    assert_eq!(item.next_key().unwrap().label, "F");
}
