//! Edit instructions: the only way a scheme affects the host document.
//!
//! The host deletes `delete_before_cursor` characters immediately before the
//! cursor, then inserts `insert_text` at the resulting position. The cursor
//! ends after the inserted text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delete-then-insert edit produced for a single keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct EditInstruction {
    /// Characters (Unicode scalar values) to remove before the cursor.
    pub delete_before_cursor: usize,
    /// Text to insert after the deletion.
    pub insert_text: String,
}

impl EditInstruction {
    pub fn new<T: Into<String>>(delete_before_cursor: usize, insert_text: T) -> Self {
        Self {
            delete_before_cursor,
            insert_text: insert_text.into(),
        }
    }

    /// Commit `key` as typed, deleting nothing.
    pub fn literal(key: char) -> Self {
        Self::new(0, key.to_string())
    }

    /// Replace `old_word` (which must end at the cursor) with `new_text`.
    pub fn replace<T: Into<String>>(old_word: &str, new_text: T) -> Self {
        Self::new(old_word.chars().count(), new_text)
    }

    /// True if this edit commits exactly `key` without touching prior text.
    pub fn is_literal_of(&self, key: char) -> bool {
        self.delete_before_cursor == 0 && {
            let mut chars = self.insert_text.chars();
            chars.next() == Some(key) && chars.next().is_none()
        }
    }

    /// True if applying this edit leaves the document untouched.
    pub fn is_noop(&self) -> bool {
        self.delete_before_cursor == 0 && self.insert_text.is_empty()
    }
}

impl fmt::Display for EditInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{} +{:?}", self.delete_before_cursor, self.insert_text)
    }
}
