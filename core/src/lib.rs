//! libtelex-core
//!
//! Boundary types shared by transliteration schemes (libtelex).
//!
//! A scheme never touches the document directly. It reads a snapshot of the
//! text before the cursor plus one keystroke and answers with an
//! `EditInstruction`. This crate provides that instruction type, a reference
//! text buffer that applies instructions the way a host editor must, and a
//! key-event session wrapper for driving a scheme from a keyboard.
//!
//! Public API:
//! - `EditInstruction` - Delete-N-then-insert edit produced per keystroke
//! - `InputBuffer` - Text buffer with cursor that applies edit instructions
//! - `ImeEngine` - Key-event session around any `Transliterator`
//! - `Config` - Configuration shared by all schemes
use serde::{Deserialize, Serialize};

pub mod edit;
pub use edit::EditInstruction;

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult, Transliterator};

/// Longest word the engine rewrites unless configured otherwise.
pub const DEFAULT_MAX_WORD_LEN: usize = 8;

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("max_word_len must be at least 1")]
    ZeroWordLength,
}

/// Generic configuration for transliteration schemes.
///
/// Only scheme-agnostic fields live here. Scheme options belong in the
/// scheme crate's own config (e.g. `TelexConfig`), which flattens this one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Longest word (in characters) before the cursor that may be rewritten.
    /// Longer runs are always committed literally.
    pub max_word_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        Ok(())
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Lowercase a single character without changing the character count.
    ///
    /// Every Vietnamese letter lowercases to exactly one scalar, so index
    /// positions in a folded copy line up with the original.
    pub fn fold_case(ch: char) -> char {
        let mut lower = ch.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(single), None) => single,
            _ => ch,
        }
    }

    /// Give `replacement` the case of `original`.
    pub fn match_case(original: char, replacement: char) -> char {
        if original.is_uppercase() {
            let mut upper = replacement.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => replacement,
            }
        } else {
            fold_case(replacement)
        }
    }

    /// Return the word under composition: the contiguous run of
    /// non-whitespace characters at the end of `text`.
    ///
    /// At most `max_chars + 1` characters are taken, which is enough for a
    /// caller to tell that the run is too long to rewrite. Empty when `text`
    /// is empty or ends in whitespace.
    pub fn word_before_cursor(text: &str, max_chars: usize) -> &str {
        let mut start = text.len();
        for (taken, (idx, ch)) in text.char_indices().rev().enumerate() {
            if ch.is_whitespace() || taken > max_chars {
                break;
            }
            start = idx;
        }
        &text[start..]
    }

}
