// libtelex/src/engine.rs
//
// Telex dispatcher: classifies a keystroke and turns (word before cursor,
// key) into a single edit instruction.
//
// Pipeline per keystroke:
//   classify key -> check context -> d/đ shortcut -> extract tone
//   -> segment -> apply diacritic or place tone -> edit
//
// Every step returns `Result<_, Fallback>`. Any fallback becomes a literal
// commit of the key, so `process` never fails.

use libtelex_core::utils::{fold_case, match_case, word_before_cursor};
use libtelex_core::{EditInstruction, Transliterator};
use tracing::{debug, trace};

use crate::config::TelexConfig;
use crate::diacritic::{apply_diacritic, DIACRITIC_KEYS};
use crate::parser::{segment, Syllable};
use crate::tone::{extract_tone, place_tone, tone_target, ToneMark};

/// What a keystroke asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// s f r x j: put this tone on the nucleus
    AddTone(ToneMark),
    /// a e o w d: form or undo a compound letter
    AddDiacritic,
    /// z: strip the tone
    RemoveTone,
    /// Any other letter: it may grow the syllable and move the tone
    Rearrange,
}

impl Mode {
    /// Classify a key. Non-letters are not Telex triggers.
    pub fn classify(key: char) -> Option<Mode> {
        if !key.is_alphabetic() {
            return None;
        }
        let folded = fold_case(key);
        Some(if let Some(mark) = ToneMark::from_key(folded) {
            Mode::AddTone(mark)
        } else if DIACRITIC_KEYS.contains(&folded) {
            Mode::AddDiacritic
        } else if folded == 'z' {
            Mode::RemoveTone
        } else {
            Mode::Rearrange
        })
    }
}

/// Why a keystroke was committed literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Fallback {
    #[error("Telex rewriting is disabled")]
    Disabled,

    #[error("key is not a Telex trigger")]
    UnsupportedKey,

    #[error("no word before the cursor")]
    EmptyContext,

    #[error("word is longer than {0} characters")]
    WordTooLong(usize),

    #[error("word is not a Vietnamese syllable")]
    SegmentationFailed,

    #[error("no rule for this nucleus and key")]
    NoRule,

    #[error("word carries no tone mark")]
    NoToneMark,
}

/// The word under composition, split once per keystroke.
struct Word<'a> {
    /// As the caller supplied it; this is what gets deleted.
    original: &'a str,
    /// Tone-free, composed form.
    bare: String,
    tone: ToneMark,
}

impl<'a> Word<'a> {
    fn new(original: &'a str) -> Self {
        let (bare, tone) = extract_tone(original);
        Self {
            original,
            bare,
            tone,
        }
    }

    fn syllable(&self) -> Result<Syllable, Fallback> {
        segment(&self.bare).ok_or(Fallback::SegmentationFailed)
    }

    fn replace_with(&self, text: String) -> EditInstruction {
        EditInstruction::replace(self.original, text)
    }
}

/// Telex transliteration engine.
///
/// Holds only configuration; every call to `process` is independent and the
/// engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TelexEngine {
    config: TelexConfig,
}

impl TelexEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TelexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TelexConfig {
        &self.config
    }

    /// Compute the edit for `key` typed after `text_before_cursor`.
    ///
    /// `text_before_cursor` may be just the word under composition or any
    /// longer snapshot; only the trailing non-whitespace run is considered.
    /// Anything the rules cannot handle degrades to committing `key` as typed.
    pub fn process(&self, text_before_cursor: &str, key: char) -> EditInstruction {
        match self.try_process(text_before_cursor, key) {
            Ok(edit) => {
                debug!(key = %key, %edit, "telex edit");
                edit
            }
            Err(reason) => {
                debug!(key = %key, %reason, "literal commit");
                EditInstruction::literal(key)
            }
        }
    }

    fn try_process(&self, text_before_cursor: &str, key: char) -> Result<EditInstruction, Fallback> {
        if !self.config.enabled {
            return Err(Fallback::Disabled);
        }
        let mode = Mode::classify(key).ok_or(Fallback::UnsupportedKey)?;

        let max_len = self.config.base.max_word_len;
        let original = word_before_cursor(text_before_cursor, max_len);
        if original.is_empty() {
            return Err(Fallback::EmptyContext);
        }
        if original.chars().count() > max_len {
            return Err(Fallback::WordTooLong(max_len));
        }

        if let Some(edit) = toggle_lone_d(original, key) {
            return Ok(edit);
        }

        let word = Word::new(original);
        trace!(?mode, bare = %word.bare, tone = ?word.tone, "dispatch");

        match mode {
            Mode::AddTone(mark) => add_tone(&word, mark, key),
            Mode::RemoveTone => remove_tone(&word),
            Mode::AddDiacritic => match add_diacritic(&word, key) {
                Err(Fallback::NoRule) => rearrange(&word, key),
                other => other,
            },
            Mode::Rearrange => rearrange(&word, key),
        }
    }
}

impl Transliterator for TelexEngine {
    fn process(&self, text_before_cursor: &str, key: char) -> EditInstruction {
        TelexEngine::process(self, text_before_cursor, key)
    }

    fn max_word_len(&self) -> usize {
        self.config.base.max_word_len
    }
}

/// "d" + d -> "đ" and "đ" + d -> "d" + key, case kept.
fn toggle_lone_d(word: &str, key: char) -> Option<EditInstruction> {
    if fold_case(key) != 'd' {
        return None;
    }
    let mut chars = word.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match fold_case(letter) {
        'd' => Some(EditInstruction::replace(word, match_case(letter, 'đ').to_string())),
        'đ' => Some(EditInstruction::replace(
            word,
            format!("{}{}", match_case(letter, 'd'), key),
        )),
        _ => None,
    }
}

/// Toggle d/đ in the initial consonant. Returns the new initial and whether
/// the key must be appended.
fn toggle_initial_d(initial: &str) -> Option<(String, bool)> {
    let mut chars = initial.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match fold_case(letter) {
        'd' => Some((match_case(letter, 'đ').to_string(), false)),
        'đ' => Some((match_case(letter, 'd').to_string(), true)),
        _ => None,
    }
}

fn add_tone(word: &Word<'_>, mark: ToneMark, key: char) -> Result<EditInstruction, Fallback> {
    let syllable = word.syllable()?;
    if tone_target(&syllable.nucleus).is_none() {
        return Err(Fallback::NoRule);
    }

    let nucleus = place_tone(&syllable.nucleus, mark, word.tone);
    let mut text = syllable.with_nucleus(&nucleus);
    // Same tone twice cancels it and types the key
    if mark == word.tone {
        text.push(key);
    }
    Ok(word.replace_with(text))
}

fn remove_tone(word: &Word<'_>) -> Result<EditInstruction, Fallback> {
    let syllable = word.syllable()?;
    if word.tone.is_none() {
        return Err(Fallback::NoToneMark);
    }
    Ok(word.replace_with(syllable.text()))
}

fn add_diacritic(word: &Word<'_>, key: char) -> Result<EditInstruction, Fallback> {
    let syllable = word.syllable()?;

    let (initial, nucleus, append_key) = if fold_case(key) == 'd' {
        let (initial, append_key) = toggle_initial_d(&syllable.initial).ok_or(Fallback::NoRule)?;
        (initial, syllable.nucleus.clone(), append_key)
    } else {
        let change = apply_diacritic(&syllable.nucleus, key).ok_or(Fallback::NoRule)?;
        (syllable.initial.clone(), change.nucleus, change.append_key)
    };

    // Re-stamp the tone on the new nucleus
    let nucleus = place_tone(&nucleus, word.tone, ToneMark::None);
    let mut text = syllable.with_parts(&initial, &nucleus);
    if append_key {
        text.push(key);
    }
    Ok(word.replace_with(text))
}

/// Append the key to a toned word and re-place the tone on the grown
/// syllable. Rewrites only when that differs from typing the key.
fn rearrange(word: &Word<'_>, key: char) -> Result<EditInstruction, Fallback> {
    if word.tone.is_none() {
        return Err(Fallback::NoToneMark);
    }

    let mut grown = word.bare.clone();
    grown.push(key);
    let syllable = segment(&grown).ok_or(Fallback::SegmentationFailed)?;

    let nucleus = place_tone(&syllable.nucleus, word.tone, ToneMark::None);
    let rearranged = syllable.with_nucleus(&nucleus);

    let mut typed = word.original.to_string();
    typed.push(key);
    if rearranged == typed {
        return Ok(EditInstruction::literal(key));
    }
    trace!(%typed, %rearranged, "moving tone");
    Ok(word.replace_with(rearranged))
}
