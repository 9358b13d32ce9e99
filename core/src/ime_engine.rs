//! Key-event session around a transliteration scheme.
//!
//! `ImeEngine` owns an `InputBuffer` standing in for the host document. For
//! every character key it snapshots the word before the cursor, asks the
//! scheme for an `EditInstruction` and applies it. Nothing about a previous
//! keystroke is remembered: each call starts from the current buffer text.

use crate::{utils, EditInstruction, InputBuffer};
use tracing::trace;

/// A scheme that turns (word before cursor, keystroke) into one edit.
///
/// Implementations must be pure: the same snapshot and key always produce
/// the same instruction, and no state is kept between calls.
pub trait Transliterator {
    /// Compute the edit for `key` given the text ending at the cursor.
    fn process(&self, text_before_cursor: &str, key: char) -> EditInstruction;

    /// Longest word (in characters) the scheme will rewrite.
    fn max_word_len(&self) -> usize;
}

/// Key event types the session can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character input, routed through the scheme
    Char(char),
    /// Space key (word boundary)
    Space,
    /// Enter/Return key (inserts a newline)
    Enter,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Home key
    Home,
    /// End key
    End,
    /// Switch between the scheme and plain passthrough typing
    ToggleLayout,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// The scheme rewrote text, or a navigation/editing key acted
    Handled,
    /// The key reached the buffer unchanged, or had nothing to act on
    NotHandled,
}

/// Session wrapper driving a `Transliterator` from key events.
#[derive(Debug, Clone)]
pub struct ImeEngine<T: Transliterator> {
    scheme: T,
    buffer: InputBuffer,
    passthrough: bool,
}

impl<T: Transliterator> ImeEngine<T> {
    /// Create a new session with an empty buffer.
    pub fn new(scheme: T) -> Self {
        Self {
            scheme,
            buffer: InputBuffer::new(),
            passthrough: false,
        }
    }

    /// Create a session over existing text, cursor at the end.
    pub fn with_text<S: Into<String>>(scheme: T, text: S) -> Self {
        Self {
            scheme,
            buffer: InputBuffer::with_text(text),
            passthrough: false,
        }
    }

    pub fn scheme(&self) -> &T {
        &self.scheme
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Current document text.
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Whether keys bypass the scheme.
    pub fn is_passthrough(&self) -> bool {
        self.passthrough
    }

    pub fn set_passthrough(&mut self, passthrough: bool) {
        self.passthrough = passthrough;
    }

    /// Take the document text and start over with an empty buffer.
    pub fn commit(&mut self) -> String {
        self.buffer.take()
    }

    /// Reset the session to an empty buffer with the scheme active.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.passthrough = false;
    }

    /// Feed every character of `input` as a key event.
    ///
    /// Spaces and newlines map to `Space` and `Enter`.
    pub fn type_str(&mut self, input: &str) {
        for ch in input.chars() {
            let key = match ch {
                ' ' => KeyEvent::Space,
                '\n' => KeyEvent::Enter,
                other => KeyEvent::Char(other),
            };
            self.process_key(key);
        }
    }

    /// Process a key event and update the buffer.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        trace!(?key, passthrough = self.passthrough, "key event");
        match key {
            KeyEvent::Char(ch) if self.passthrough => {
                self.buffer.insert_char(ch);
                KeyResult::NotHandled
            }
            KeyEvent::Char(ch) => {
                let snapshot = utils::word_before_cursor(
                    self.buffer.text_before_cursor(),
                    self.scheme.max_word_len(),
                );
                let edit = self.scheme.process(snapshot, ch);
                trace!(%edit, "applying edit");
                let literal = edit.is_literal_of(ch);
                self.buffer.apply(&edit);
                if literal {
                    KeyResult::NotHandled
                } else {
                    KeyResult::Handled
                }
            }
            KeyEvent::Space => {
                self.buffer.insert_char(' ');
                KeyResult::NotHandled
            }
            KeyEvent::Enter => {
                self.buffer.insert_char('\n');
                KeyResult::NotHandled
            }
            KeyEvent::Backspace => Self::acted(self.buffer.delete_before()),
            KeyEvent::Delete => Self::acted(self.buffer.delete_after()),
            KeyEvent::Left => Self::acted(self.buffer.move_left()),
            KeyEvent::Right => Self::acted(self.buffer.move_right()),
            KeyEvent::Home => {
                self.buffer.move_to_start();
                KeyResult::Handled
            }
            KeyEvent::End => {
                self.buffer.move_to_end();
                KeyResult::Handled
            }
            KeyEvent::ToggleLayout => {
                self.passthrough = !self.passthrough;
                KeyResult::Handled
            }
        }
    }

    fn acted(acted: bool) -> KeyResult {
        if acted {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Doubles a vowel into uppercase, otherwise commits literally.
    struct Shouty;

    impl Transliterator for Shouty {
        fn process(&self, text_before_cursor: &str, key: char) -> EditInstruction {
            match text_before_cursor.chars().last() {
                Some(prev) if prev == key && "aeiou".contains(key) => {
                    EditInstruction::new(1, key.to_ascii_uppercase().to_string())
                }
                _ => EditInstruction::literal(key),
            }
        }

        fn max_word_len(&self) -> usize {
            8
        }
    }

    #[test]
    fn char_keys_go_through_scheme() {
        let mut ime = ImeEngine::new(Shouty);
        assert_eq!(ime.process_key(KeyEvent::Char('b')), KeyResult::NotHandled);
        assert_eq!(ime.process_key(KeyEvent::Char('a')), KeyResult::NotHandled);
        assert_eq!(ime.process_key(KeyEvent::Char('a')), KeyResult::Handled);
        assert_eq!(ime.text(), "bA");
    }

    #[test]
    fn passthrough_skips_scheme() {
        let mut ime = ImeEngine::new(Shouty);
        ime.process_key(KeyEvent::ToggleLayout);
        ime.type_str("aa");
        assert_eq!(ime.text(), "aa");
        ime.process_key(KeyEvent::ToggleLayout);
        ime.type_str("a");
        assert_eq!(ime.text(), "aA");
    }

    #[test]
    fn space_separates_words() {
        let mut ime = ImeEngine::new(Shouty);
        ime.type_str("o o");
        assert_eq!(ime.text(), "o o");
        assert_eq!(ime.commit(), "o o");
        assert!(ime.text().is_empty());
    }

    #[test]
    fn editing_keys_report_whether_they_acted() {
        let mut ime = ImeEngine::with_text(Shouty, "ab");
        assert_eq!(ime.process_key(KeyEvent::Right), KeyResult::NotHandled);
        assert_eq!(ime.process_key(KeyEvent::Backspace), KeyResult::Handled);
        assert_eq!(ime.process_key(KeyEvent::Home), KeyResult::Handled);
        assert_eq!(ime.process_key(KeyEvent::Backspace), KeyResult::NotHandled);
        assert_eq!(ime.process_key(KeyEvent::Delete), KeyResult::Handled);
        assert_eq!(ime.text(), "");
    }
}
