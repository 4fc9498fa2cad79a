//! Single-line text entry buffer (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input never lands
//! the cursor inside a code point.

/// Text being typed into a form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, `0..=char_count`.
    cursor: usize,
}

impl TextInput {
    /// Start editing `initial` with the cursor at the end.
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            cursor: initial.chars().count(),
        }
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consumes the input, returning the buffer.
    pub fn into_text(self) -> String {
        self.text
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert `ch` at the cursor and advance past it.
    pub fn insert_char(mut self, ch: char) -> Self {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        self
    }

    /// Delete the character before the cursor.
    pub fn backspace(mut self) -> Self {
        if self.cursor == 0 {
            return self;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self
    }

    /// Delete the character under the cursor.
    pub fn delete(mut self) -> Self {
        if self.cursor >= self.char_count() {
            return self;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self
    }

    /// Moves the cursor one char left.
    pub fn cursor_left(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);
        self
    }

    /// Moves the cursor one char right.
    pub fn cursor_right(mut self) -> Self {
        self.cursor = (self.cursor + 1).min(self.char_count());
        self
    }

    /// Moves the cursor to the start.
    pub fn cursor_home(mut self) -> Self {
        self.cursor = 0;
        self
    }

    /// Moves the cursor past the last char.
    pub fn cursor_end(mut self) -> Self {
        self.cursor = self.char_count();
        self
    }
}
