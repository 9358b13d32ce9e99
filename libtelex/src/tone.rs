//! Tone marks: extraction from a composed word and placement on a nucleus.
//!
//! Vietnamese carries one of five tone marks on exactly one letter of the
//! vowel nucleus. In canonical decomposition each tone is a single combining
//! code point, separate from the circumflex, breve and horn marks that form
//! the letters â ê ô ă ơ ư. Stripping a tone is therefore: decompose, drop the
//! tone code point, recompose.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use libtelex_core::utils::fold_case;

/// The tone mark applied to a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ToneMark {
    /// Level tone (ngang), no mark
    #[default]
    None,
    /// sắc, U+0301
    Acute,
    /// huyền, U+0300
    Grave,
    /// hỏi, U+0309
    HookAbove,
    /// ngã, U+0303
    Tilde,
    /// nặng, U+0323
    Underdot,
}

impl ToneMark {
    /// The combining code point for this tone, or `None` for the level tone.
    pub const fn combining(self) -> Option<char> {
        match self {
            ToneMark::None => None,
            ToneMark::Acute => Some('\u{0301}'),
            ToneMark::Grave => Some('\u{0300}'),
            ToneMark::HookAbove => Some('\u{0309}'),
            ToneMark::Tilde => Some('\u{0303}'),
            ToneMark::Underdot => Some('\u{0323}'),
        }
    }

    /// Recognize one of the five tone combining marks.
    pub fn from_combining(ch: char) -> Option<Self> {
        match ch {
            '\u{0301}' => Some(ToneMark::Acute),
            '\u{0300}' => Some(ToneMark::Grave),
            '\u{0309}' => Some(ToneMark::HookAbove),
            '\u{0303}' => Some(ToneMark::Tilde),
            '\u{0323}' => Some(ToneMark::Underdot),
            _ => None,
        }
    }

    /// Telex tone keys: s f r x j, either case.
    pub fn from_key(key: char) -> Option<Self> {
        match fold_case(key) {
            's' => Some(ToneMark::Acute),
            'f' => Some(ToneMark::Grave),
            'r' => Some(ToneMark::HookAbove),
            'x' => Some(ToneMark::Tilde),
            'j' => Some(ToneMark::Underdot),
            _ => None,
        }
    }

    /// The lowercase Telex key that produces this tone.
    pub const fn key(self) -> Option<char> {
        match self {
            ToneMark::None => None,
            ToneMark::Acute => Some('s'),
            ToneMark::Grave => Some('f'),
            ToneMark::HookAbove => Some('r'),
            ToneMark::Tilde => Some('x'),
            ToneMark::Underdot => Some('j'),
        }
    }

    /// Vietnamese name of the tone.
    pub const fn name(self) -> &'static str {
        match self {
            ToneMark::None => "ngang",
            ToneMark::Acute => "sắc",
            ToneMark::Grave => "huyền",
            ToneMark::HookAbove => "hỏi",
            ToneMark::Tilde => "ngã",
            ToneMark::Underdot => "nặng",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, ToneMark::None)
    }
}

/// Two-letter nuclei and the index of the letter that carries the tone.
/// Any other multi-letter nucleus has no defined tone position.
static TONE_POSITION: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Mark on the second letter
    for nucleus in ["iê", "yê", "uô", "ươ", "uơ", "ưo", "ie", "ye", "uo"] {
        m.insert(nucleus, 1);
    }

    // Mark on the first letter
    for nucleus in ["ia", "ua", "ưa", "ya"] {
        m.insert(nucleus, 0);
    }

    m
});

/// Split `word` into its tone-free form and the tone it carried.
///
/// The first tone code point found in the decomposition decides the
/// returned mark; every tone code point is removed. Circumflex, breve and
/// horn survive the round trip unchanged.
pub fn extract_tone(word: &str) -> (String, ToneMark) {
    let mut tone = ToneMark::None;
    let stripped: String = word
        .nfd()
        .filter(|&ch| match ToneMark::from_combining(ch) {
            Some(found) => {
                if tone.is_none() {
                    tone = found;
                }
                false
            }
            None => true,
        })
        .collect();
    (stripped.nfc().collect(), tone)
}

/// Index of the nucleus letter that carries the tone, if defined.
pub fn tone_target(nucleus: &str) -> Option<usize> {
    match nucleus.chars().count() {
        0 => None,
        1 => Some(0),
        _ => {
            let folded: String = nucleus.chars().map(fold_case).collect();
            TONE_POSITION.get(folded.as_str()).copied()
        }
    }
}

/// Put `new_mark` on the right letter of a tone-free `nucleus`.
///
/// `new_mark == old_mark` means the tone is being cancelled: the nucleus is
/// returned as is (the caller already stripped it). A nucleus without a
/// defined tone position is also returned unchanged.
pub fn place_tone(nucleus: &str, new_mark: ToneMark, old_mark: ToneMark) -> String {
    if new_mark == old_mark {
        return nucleus.to_string();
    }
    let (Some(target), Some(mark)) = (tone_target(nucleus), new_mark.combining()) else {
        return nucleus.to_string();
    };

    let mut out = String::with_capacity(nucleus.len() + 2);
    for (idx, ch) in nucleus.chars().enumerate() {
        if idx == target {
            out.extend([ch, mark].into_iter().nfc());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_finds_tone_and_keeps_letter_marks() {
        assert_eq!(extract_tone("tiếng"), ("tiêng".to_string(), ToneMark::Acute));
        assert_eq!(extract_tone("việt"), ("viêt".to_string(), ToneMark::Underdot));
        assert_eq!(extract_tone("Ở"), ("Ơ".to_string(), ToneMark::HookAbove));
        assert_eq!(extract_tone("ươn"), ("ươn".to_string(), ToneMark::None));
        assert_eq!(extract_tone("đã"), ("đa".to_string(), ToneMark::Tilde));
        assert_eq!(extract_tone("hoà"), ("hoa".to_string(), ToneMark::Grave));
    }

    #[test]
    fn extract_accepts_decomposed_input() {
        assert_eq!(
            extract_tone("to\u{0302}\u{0301}i"),
            ("tôi".to_string(), ToneMark::Acute)
        );
    }

    #[test]
    fn tone_position_by_nucleus() {
        assert_eq!(tone_target("a"), Some(0));
        assert_eq!(tone_target("iê"), Some(1));
        assert_eq!(tone_target("UÔ"), Some(1));
        assert_eq!(tone_target("ưa"), Some(0));
        assert_eq!(tone_target("ưô"), None);
        assert_eq!(tone_target(""), None);
    }

    #[test]
    fn place_composes_on_target_letter() {
        assert_eq!(place_tone("a", ToneMark::Acute, ToneMark::None), "á");
        assert_eq!(place_tone("ươ", ToneMark::Tilde, ToneMark::None), "ưỡ");
        assert_eq!(place_tone("ia", ToneMark::Grave, ToneMark::None), "ìa");
        assert_eq!(place_tone("Ê", ToneMark::Underdot, ToneMark::None), "Ệ");
        assert_eq!(place_tone("yê", ToneMark::HookAbove, ToneMark::Acute), "yể");
    }

    #[test]
    fn place_same_mark_cancels() {
        assert_eq!(place_tone("a", ToneMark::Acute, ToneMark::Acute), "a");
        assert_eq!(place_tone("a", ToneMark::None, ToneMark::None), "a");
    }

    #[test]
    fn place_without_position_is_unchanged() {
        assert_eq!(place_tone("ưô", ToneMark::Acute, ToneMark::None), "ưô");
    }

    #[test]
    fn tone_keys() {
        assert_eq!(ToneMark::from_key('S'), Some(ToneMark::Acute));
        assert_eq!(ToneMark::from_key('j'), Some(ToneMark::Underdot));
        assert_eq!(ToneMark::from_key('z'), None);
        assert_eq!(ToneMark::Tilde.key(), Some('x'));
        assert_eq!(ToneMark::HookAbove.name(), "hỏi");
    }
}
