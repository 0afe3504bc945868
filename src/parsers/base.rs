//! Shared cursor over a requirement encoding.

/// Disjunction marker between alternative requirements.
pub const DISJUNCTION: char = '|';
/// Start of the corequisite section.
pub const COREQ_MARKER: char = '/';

pub const DELIMITERS: &[char] = &[DISJUNCTION, COREQ_MARKER];

/// Stateful cursor over the input string.
pub struct Cursor {
    pub src: Vec<char>,
    pub pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.src.len().saturating_sub(self.pos)
    }

    /// Peek whether the next char is `ch`.
    pub fn peek(&self, ch: char) -> bool {
        self.src.get(self.pos) == Some(&ch)
    }

    /// Consume `ch` if it is next; returns true if consumed.
    pub fn consume(&mut self, ch: char) -> bool {
        if self.peek(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Read up to `width` chars, stopping early at any delimiter.
    ///
    /// Returns the text read. The cursor is left on the delimiter (or at
    /// end of input) when the read stops short.
    pub fn take_until_delimiter(&mut self, width: usize) -> String {
        let start = self.pos;
        while self.pos < self.src.len()
            && self.pos - start < width
            && !DELIMITERS.contains(&self.src[self.pos])
        {
            self.pos += 1;
        }
        self.src[start..self.pos].iter().collect()
    }

    /// Read exactly one fixed-width token. `None` when the next `width`
    /// chars run into a delimiter or the end of input.
    pub fn take_token(&mut self, width: usize) -> Option<String> {
        let text = self.take_until_delimiter(width);
        (text.chars().count() == width).then_some(text)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
