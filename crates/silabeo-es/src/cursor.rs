// Read-only cursor over a lowercased word

/// A saved cursor position, used to give back tentatively consumed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Position over a word's characters with bounded look-around.
///
/// The cursor never mutates the word. `advance` clamps at the end of the
/// word; `retreat` and `restore` are the only backward moves.
#[derive(Debug, Clone)]
pub struct Cursor<'w> {
    chars: &'w [char],
    pos: usize,
}

impl<'w> Cursor<'w> {
    pub fn new(chars: &'w [char]) -> Self {
        Self { chars, pos: 0 }
    }

    /// The whole word.
    pub fn chars(&self) -> &'w [char] {
        self.chars
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character under the cursor, or `None` once past the end.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// The character `n` positions ahead.
    pub fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// The character `n` positions behind.
    pub fn behind(&self, n: usize) -> Option<char> {
        self.pos.checked_sub(n).and_then(|i| self.chars.get(i).copied())
    }

    /// True once every character has been consumed.
    pub fn is_ended(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// True when the cursor is on the final character.
    pub fn at_last(&self) -> bool {
        self.pos + 1 == self.chars.len()
    }

    /// Number of characters from the cursor to the end, current included.
    pub fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.pos)
    }

    /// Move forward up to `n` characters, clamping at the end of the word.
    pub fn advance(&mut self, n: usize) -> Option<char> {
        self.pos = (self.pos + n).min(self.chars.len());
        self.current()
    }

    /// Move back one character if possible.
    pub fn retreat(&mut self) -> Option<char> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        self.current()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Return to a checkpoint taken earlier in the same scan step.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.0 <= self.pos, "checkpoints only move backwards");
        self.pos = checkpoint.0;
    }

    /// The characters between `start` and the cursor.
    pub fn span_from(&self, start: usize) -> String {
        self.chars[start.min(self.pos)..self.pos].iter().collect()
    }
}
