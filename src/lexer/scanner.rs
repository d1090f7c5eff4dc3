//! Scanner implementation
//!
//! This module implements the tokenizer: a dispatch loop over the cursor
//! that classifies the current character, reads one token per iteration,
//! and flags malformed content instead of aborting the scan.

use super::cursor::Cursor;
use super::token::{is_keyword, Token, TokenCategory, OPERATORS};

/// Tokenizer over a single character source.
///
/// Scanning never fails: malformed lexical input is surfaced through the
/// `is_invalid` flag on the produced token and the scan continues with the
/// next token. Concatenating the contents of the emitted tokens in order
/// reconstructs the input exactly.
pub struct Scanner {
    cursor: Cursor,
}

impl Scanner {
    /// Create a scanner over `source`
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Dispatch tries the most specific category first, since several
    /// categories overlap in their leading character (`/` starts both
    /// comments and operators, digits start numbers but are also word
    /// symbols). Every reading routine consumes at least one character,
    /// so the loop always makes progress.
    pub fn scan(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(c) = self.cursor.peek() {
            let token = if is_whitespace(c) {
                self.read_whitespace()
            } else if self.cursor.try_match("//") {
                self.read_line_comment()
            } else if self.cursor.try_match("/*") {
                self.read_block_comment()
            } else if c == '\'' {
                self.read_quoted('\'')
            } else if c == '"' {
                self.read_quoted('"')
            } else if is_digit(c) {
                self.read_number()
            } else if is_word_symbol(c) {
                self.read_word()
            } else {
                self.read_operator()
            };

            tokens.push(token);
        }

        tokens
    }

    /// Read a maximal run of whitespace characters
    fn read_whitespace(&mut self) -> Token {
        let mut content = String::new();

        while let Some(c) = self.cursor.peek() {
            if !is_whitespace(c) {
                break;
            }
            content.push(c);
            self.cursor.advance();
        }

        Token::new(content, TokenCategory::Whitespace, false)
    }

    /// Read a `//` comment through end of line, excluding the terminator.
    /// The `//` marker has already been consumed by the dispatch probe.
    fn read_line_comment(&mut self) -> Token {
        let mut content = String::from("//");

        while let Some(c) = self.cursor.peek() {
            if is_end_of_line(c) {
                break;
            }
            content.push(c);
            self.cursor.advance();
        }

        Token::new(content, TokenCategory::Comment, false)
    }

    /// Read a `/* ... */` comment. The `/*` marker has already been
    /// consumed by the dispatch probe. The token stays invalid unless a
    /// closing `*/` is consumed before end of input.
    fn read_block_comment(&mut self) -> Token {
        let mut content = String::from("/*");
        let mut is_invalid = true;

        loop {
            if self.cursor.try_match("*/") {
                content.push_str("*/");
                is_invalid = false;
                break;
            }
            match self.cursor.advance() {
                Some(c) => content.push(c),
                None => break,
            }
        }

        Token::new(content, TokenCategory::Comment, is_invalid)
    }

    /// Read a quoted literal delimited by `quote` (`'` or `"`).
    ///
    /// Both literal kinds share one algorithm: consume the opening quote,
    /// then characters until the same quote recurs (consumed, valid) or an
    /// end of line / end of input is reached first (invalid, terminator
    /// left unconsumed). The category follows the opening delimiter.
    fn read_quoted(&mut self, quote: char) -> Token {
        let mut content = String::new();
        content.push(quote);
        self.cursor.advance();

        let mut is_invalid = true;

        while let Some(c) = self.cursor.peek() {
            if is_end_of_line(c) {
                break;
            }
            content.push(c);
            self.cursor.advance();
            if c == quote {
                is_invalid = false;
                break;
            }
        }

        let category = if quote == '\'' {
            TokenCategory::Char
        } else {
            TokenCategory::String
        };

        Token::new(content, category, is_invalid)
    }

    /// Read a number literal. The first character is a digit (guaranteed
    /// by dispatch); `0x` selects the hexadecimal sub-path.
    fn read_number(&mut self) -> Token {
        let mut content = String::new();
        let mut is_invalid = false;

        if let Some(c) = self.cursor.advance() {
            content.push(c);
        }

        if content == "0" && self.cursor.peek() == Some('x') {
            content.push('x');
            self.cursor.advance();

            // Hex body: word symbols and '.' are consumed; only a word
            // symbol that is not a hex digit makes the literal invalid
            while let Some(c) = self.cursor.peek() {
                if !is_word_symbol(c) && c != '.' {
                    break;
                }
                if c != '.' && !is_hex_digit(c) {
                    is_invalid = true;
                }
                content.push(c);
                self.cursor.advance();
            }

            return Token::new(content, TokenCategory::Number, is_invalid);
        }

        let mut has_dot = false;
        let mut ends_with_dot = false;

        while let Some(c) = self.cursor.peek() {
            if !is_digit(c) && c != '.' {
                break;
            }
            if c == '.' {
                if has_dot {
                    is_invalid = true;
                } else {
                    has_dot = true;
                }
                ends_with_dot = true;
            } else {
                ends_with_dot = false;
            }
            content.push(c);
            self.cursor.advance();
        }

        Token::new(content, TokenCategory::Number, is_invalid || ends_with_dot)
    }

    /// Read a maximal run of word symbols and classify it as a keyword
    /// or an identifier
    fn read_word(&mut self) -> Token {
        let mut content = String::new();

        while let Some(c) = self.cursor.peek() {
            if !is_word_symbol(c) {
                break;
            }
            content.push(c);
            self.cursor.advance();
        }

        let category = if is_keyword(&content) {
            TokenCategory::Keyword
        } else {
            TokenCategory::Identifier
        };

        Token::new(content, category, false)
    }

    /// Read an operator. Candidates are probed longest-first so `<<=`
    /// wins over `<<` and `<`. When nothing in the table matches, a
    /// maximal run of characters that are neither whitespace nor word
    /// symbols is consumed and flagged invalid, so stray punctuation is
    /// recovered from rather than aborted on.
    fn read_operator(&mut self) -> Token {
        for candidate in OPERATORS {
            if self.cursor.try_match(candidate) {
                return Token::new(*candidate, TokenCategory::Operator, false);
            }
        }

        let mut content = String::new();

        while let Some(c) = self.cursor.peek() {
            if is_whitespace(c) || is_word_symbol(c) {
                break;
            }
            content.push(c);
            self.cursor.advance();
        }

        Token::new(content, TokenCategory::Operator, true)
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_word_symbol(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_' || c == '$'
}

fn is_end_of_line(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn is_whitespace(c: char) -> bool {
    is_end_of_line(c) || c == '\t' || c == ' '
}
