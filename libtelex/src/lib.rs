//! # libtelex
//!
//! Telex input engine for Vietnamese built on libtelex-core.
//!
//! Given the text before the cursor and one keystroke, the engine decides
//! whether the key is typed as is or rewrites the word under composition:
//! adding, moving or removing a tone mark, or forming a compound letter
//! (â ê ô ă ơ ư đ).
//!
//! ```rust
//! use libtelex::TelexEngine;
//!
//! let engine = TelexEngine::new();
//! let edit = engine.process("xin viêt", 'j');
//! assert_eq!(edit.delete_before_cursor, 4);
//! assert_eq!(edit.insert_text, "việt");
//! ```

pub mod config;
pub mod diacritic;
pub mod engine;
pub mod parser;
pub mod tone;

// Re-export session components from core
pub use libtelex_core::{
    utils, Config, ConfigError, EditInstruction, ImeEngine, InputBuffer, KeyEvent, KeyResult,
    Transliterator,
};

pub use config::TelexConfig;
pub use diacritic::{apply_diacritic, DiacriticChange};
pub use engine::{Fallback, Mode, TelexEngine};
pub use parser::{segment, Syllable};
pub use tone::{extract_tone, place_tone, tone_target, ToneMark};

/// Create a key-event session driving a default Telex engine.
pub fn create_ime_engine() -> ImeEngine<TelexEngine> {
    ImeEngine::new(TelexEngine::new())
}

/// Create a key-event session with the given configuration.
pub fn create_ime_engine_with_config(config: TelexConfig) -> ImeEngine<TelexEngine> {
    ImeEngine::new(TelexEngine::with_config(config))
}
