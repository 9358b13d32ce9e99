//! Keystroke scenarios for the Telex engine.
//!
//! Each case is (word before cursor, key) -> (delete count, inserted text).

use libtelex::{EditInstruction, TelexEngine, ToneMark};

fn check(cases: &[(&str, char, usize, &str)]) {
    let engine = TelexEngine::new();
    for &(word, key, delete, insert) in cases {
        assert_eq!(
            engine.process(word, key),
            EditInstruction::new(delete, insert),
            "word {:?} + key {:?}",
            word,
            key
        );
    }
}

#[test]
fn reference_scenarios() {
    check(&[
        ("a", 's', 1, "á"),
        ("a", 'a', 1, "â"),
        ("d", 'd', 1, "đ"),
        ("uo", 'w', 2, "ươ"),
        ("á", 'z', 1, "a"),
        ("ia", 'a', 0, "a"),
    ]);
}

#[test]
fn tone_keys_on_common_syllables() {
    check(&[
        ("ngươi", 'f', 5, "người"),
        ("tôi", 's', 3, "tối"),
        ("nghiêng", 'r', 7, "nghiểng"),
        ("gi", 'f', 2, "gì"),
        ("gia", 'f', 3, "già"),
        ("quôc", 's', 4, "quốc"),
        ("hoa", 'f', 3, "hoà"),
        ("mưa", 'x', 3, "mữa"),
        ("khuyên", 'j', 6, "khuyện"),
    ]);
}

#[test]
fn uppercase_is_preserved() {
    check(&[
        ("VIÊT", 'J', 4, "VIỆT"),
        ("Uo", 'w', 2, "Ươ"),
        ("Đ", 'd', 1, "Dd"),
        ("A", 'A', 1, "Â"),
    ]);
}

#[test]
fn no_rule_keys_commit_literally() {
    let engine = TelexEngine::new();
    let cases = [
        ("i", 'a'),
        ("ia", 'a'),
        ("ưa", 'a'),
        ("ưo", 'o'),
        ("iê", 'w'),
        ("xyz", 's'),
        ("bc", 'w'),
        ("a", 'z'),
        ("ưô", 'f'),
        ("tiêng", '5'),
    ];
    for (word, key) in cases {
        assert!(
            engine.process(word, key).is_literal_of(key),
            "{:?} + {:?} should be literal",
            word,
            key
        );
    }
}

#[test]
fn same_tone_key_twice_restores_and_types_key() {
    let engine = TelexEngine::new();
    for mark in [
        ToneMark::Acute,
        ToneMark::Grave,
        ToneMark::HookAbove,
        ToneMark::Tilde,
        ToneMark::Underdot,
    ] {
        let key = mark.key().expect("tone has a key");
        for word in ["a", "mua", "tiên", "thương"] {
            let first = engine.process(word, key);
            assert_eq!(first.delete_before_cursor, word.chars().count());
            let second = engine.process(&first.insert_text, key);
            assert_eq!(second.insert_text, format!("{word}{key}"));
            assert_eq!(
                second.delete_before_cursor,
                first.insert_text.chars().count()
            );
        }
    }
}

#[test]
fn words_longer_than_limit_are_never_rewritten() {
    let engine = TelexEngine::new();
    for word in ["nghiêngaa", "abcdefghijklmnop", "xin nghiêngxxx"] {
        for key in ['s', 'a', 'w', 'z', 'd', 'n'] {
            assert!(engine.process(word, key).is_literal_of(key));
        }
    }
}

#[test]
fn whitespace_before_cursor_is_literal() {
    check(&[("", 's', 0, "s"), ("xin ", 's', 0, "s"), ("a\n", 'a', 0, "a")]);
}

#[test]
fn tone_moves_when_syllable_grows() {
    check(&[
        ("tú", 'o', 2, "tuó"),
        ("hó", 'a', 2, "hoá"),
        ("hoá", 'n', 0, "n"),
        ("tiế", 'n', 0, "n"),
    ]);
}

#[test]
fn diacritic_after_tone_keeps_tone() {
    check(&[
        ("tiéng", 'e', 5, "tiếng"),
        ("thuóng", 'w', 6, "thướng"),
        ("đá", 'd', 2, "dád"),
        ("dá", 'd', 2, "đá"),
        ("án", 'w', 2, "ắn"),
    ]);
}
