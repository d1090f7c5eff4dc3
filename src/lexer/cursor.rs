//! Cursor over the character source
//!
//! This module provides the forward-only scanning primitive the tokenizer
//! reads through, with bounded lookahead and speculative matching.

/// Forward-scanning position tracker over a buffered character source.
///
/// The cursor owns the full input as a `Vec<char>` and a current position.
/// Speculative matching (`try_match`) is implemented as a saved-position
/// snapshot that is restored on mismatch, so a failed probe never leaves
/// partial consumption behind.
pub struct Cursor {
    source: Vec<char>,
    current: usize,
}

impl Cursor {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
        }
    }

    /// Peek at the current character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Consume and return the current character
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.current += 1;
        }
        c
    }

    /// Check if the entire source has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Attempt to consume `literal` character-by-character.
    ///
    /// On success the cursor has moved past the literal and `true` is
    /// returned. On any mismatch the cursor is rewound to the position
    /// before the attempt began and `false` is returned.
    pub fn try_match(&mut self, literal: &str) -> bool {
        let saved = self.current;

        for expected in literal.chars() {
            if self.peek() != Some(expected) {
                self.current = saved;
                return false;
            }
            self.current += 1;
        }

        true
    }
}
