//! Text buffer with cursor tracking.
//!
//! Stands in for the host document: it owns the committed text and the
//! cursor, and applies `EditInstruction`s exactly as a host editor must
//! (delete N characters before the cursor, insert, cursor after insert).

use crate::EditInstruction;

/// Text buffer tracking document text and cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize, // Byte offset, always on a char boundary
}

impl InputBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at the end.
    pub fn with_text<T: Into<String>>(text: T) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Get the full buffer text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the text between the start of the buffer and the cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clear the buffer and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the buffer contents, leaving it empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete up to `count` characters before the cursor.
    /// Returns the number actually deleted (fewer at the buffer start).
    pub fn delete_before_chars(&mut self, count: usize) -> usize {
        let mut start = self.cursor;
        let mut deleted = 0;
        for (idx, _) in self.text[..self.cursor].char_indices().rev().take(count) {
            start = idx;
            deleted += 1;
        }
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        deleted
    }

    /// Delete the character before the cursor (backspace).
    /// Returns true if a character was deleted.
    pub fn delete_before(&mut self) -> bool {
        self.delete_before_chars(1) == 1
    }

    /// Delete the character after the cursor (delete key).
    /// Returns true if a character was deleted.
    pub fn delete_after(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Apply an edit instruction at the cursor.
    ///
    /// Deletion is clamped at the start of the buffer; an instruction built
    /// from a stale snapshot must be recomputed by the caller, not retried here.
    pub fn apply(&mut self, edit: &EditInstruction) {
        let deleted = self.delete_before_chars(edit.delete_before_cursor);
        if deleted < edit.delete_before_cursor {
            tracing::warn!(
                requested = edit.delete_before_cursor,
                deleted,
                "edit deletes past the start of the buffer"
            );
        }
        self.insert_str(&edit.insert_text);
    }

    /// Move cursor to the left by one character.
    /// Returns true if cursor moved.
    pub fn move_left(&mut self) -> bool {
        match self.text[..self.cursor].char_indices().next_back() {
            Some((prev, _)) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Move cursor to the right by one character.
    /// Returns true if cursor moved.
    pub fn move_right(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Move cursor to the beginning.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Set the cursor position (must be at a character boundary).
    pub fn set_cursor(&mut self, pos: usize) -> bool {
        if pos <= self.text.len() && self.text.is_char_boundary(pos) {
            self.cursor = pos;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_replaces_word_before_cursor() {
        let mut buf = InputBuffer::with_text("xin tiêng");
        buf.apply(&EditInstruction::new(5, "tiếng"));
        assert_eq!(buf.text(), "xin tiếng");
        assert_eq!(buf.cursor(), buf.len());
    }

    #[test]
    fn apply_in_middle_keeps_text_after_cursor() {
        let mut buf = InputBuffer::with_text("a b");
        assert!(buf.set_cursor(1));
        buf.apply(&EditInstruction::new(1, "á"));
        assert_eq!(buf.text(), "á b");
        assert_eq!(buf.text_before_cursor(), "á");
    }

    #[test]
    fn delete_is_clamped_at_start() {
        let mut buf = InputBuffer::with_text("ư");
        assert_eq!(buf.delete_before_chars(3), 1);
        assert!(buf.is_empty());
        assert!(!buf.delete_before());
    }

    #[test]
    fn cursor_moves_by_characters() {
        let mut buf = InputBuffer::with_text("đư");
        assert!(buf.move_left());
        assert_eq!(buf.text_before_cursor(), "đ");
        assert!(buf.move_left());
        assert!(!buf.move_left());
        assert!(buf.move_right());
        assert!(buf.delete_after());
        assert_eq!(buf.text(), "đ");
        assert!(!buf.move_right());
    }
}
