// libtelex/src/diacritic.rs
//
// Compound-letter rules: aa/ee/oo for circumflex, w for breve and horn.
//
// Each rule either absorbs the key (a + a -> â) or undoes a compound letter,
// in which case the key is also typed literally afterwards (â + a -> aa).
// The initial consonant d/đ is not handled here; it lives in the engine
// because it rewrites the initial, not the nucleus.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use libtelex_core::utils::{fold_case, match_case};

/// Keys that form or undo compound letters.
pub const DIACRITIC_KEYS: &[char] = &['a', 'e', 'o', 'w', 'd'];

/// Result of a compound-letter rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiacriticChange {
    /// The rewritten nucleus, still tone-free.
    pub nucleus: String,
    /// Whether the triggering key must be typed after the nucleus.
    pub append_key: bool,
}

/// (letter, key) -> replacement for the doubled-letter rules.
static SIMPLE_RULES: Lazy<HashMap<(char, char), char>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(('a', 'a'), 'â');
    m.insert(('ă', 'a'), 'â');
    m.insert(('â', 'a'), 'a');
    m.insert(('e', 'e'), 'ê');
    m.insert(('ê', 'e'), 'e');
    m.insert(('o', 'o'), 'ô');
    m.insert(('ơ', 'o'), 'ô');
    m.insert(('ô', 'o'), 'o');
    m
});

/// Whole-nucleus rewrites triggered by "w": nucleus -> (replacement, append key).
static W_RULES: Lazy<HashMap<&'static str, (&'static str, bool)>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Breve
    m.insert("a", ("ă", false));
    m.insert("â", ("ă", false));
    m.insert("ă", ("a", true));

    // Horn
    m.insert("u", ("ư", false));
    m.insert("ư", ("u", true));
    m.insert("o", ("ơ", false));
    m.insert("ô", ("ơ", false));
    m.insert("ơ", ("o", true));

    // Two-letter nuclei
    m.insert("ua", ("ưa", false));
    m.insert("ưa", ("ua", true));
    m.insert("ươ", ("uo", true));
    for partial in ["uo", "uơ", "ưo", "uô", "ưô"] {
        m.insert(partial, ("ươ", false));
    }

    m
});

/// Apply the compound-letter rule for `key` to a tone-free `nucleus`.
///
/// `None` means there is no rule: "ia"/"ưa" + a and "ưo" + o start a new
/// syllable continuation rather than forming a letter.
pub fn apply_diacritic(nucleus: &str, key: char) -> Option<DiacriticChange> {
    let key = fold_case(key);
    let folded: String = nucleus.chars().map(fold_case).collect();

    match (key, folded.as_str()) {
        ('a', "ia" | "ưa") | ('o', "ưo") => return None,
        _ => {}
    }

    if key == 'w' {
        let (replacement, append_key) = W_RULES.get(folded.as_str())?;
        let nucleus = nucleus
            .chars()
            .zip(replacement.chars())
            .map(|(original, new)| match_case(original, new))
            .collect();
        return Some(DiacriticChange {
            nucleus,
            append_key: *append_key,
        });
    }

    let (idx, original, replacement) = nucleus.chars().enumerate().find_map(|(idx, ch)| {
        SIMPLE_RULES
            .get(&(fold_case(ch), key))
            .map(|&replacement| (idx, ch, replacement))
    })?;

    let nucleus = nucleus
        .chars()
        .enumerate()
        .map(|(i, ch)| if i == idx { match_case(original, replacement) } else { ch })
        .collect();

    // Undoing â/ê/ô gives the key back
    let append_key = matches!(fold_case(original), 'â' | 'ê' | 'ô');
    Some(DiacriticChange { nucleus, append_key })
}
