//! Token definitions and the fixed lexical tables
//!
//! This module defines the token value produced by the scanner and the
//! process-wide keyword and operator tables.

use std::fmt;

/// A classified lexical unit of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The exact substring of the source consumed for this token,
    /// including delimiters such as quote characters or comment markers
    pub content: String,
    pub category: TokenCategory,
    /// True when the content violates the well-formedness rule for its
    /// category; malformed input is flagged here instead of rejected
    pub is_invalid: bool,
}

impl Token {
    /// Create a new token
    pub fn new(content: impl Into<String>, category: TokenCategory, is_invalid: bool) -> Self {
        Self {
            content: content.into(),
            category,
            is_invalid,
        }
    }
}

/// Token categories recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Number,
    String,
    Char,
    Comment,
    Keyword,
    Operator,
    Whitespace,
    Identifier,
}

impl TokenCategory {
    /// Display name used in token reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::String => "String",
            Self::Char => "Char",
            Self::Comment => "Comment",
            Self::Keyword => "Keyword",
            Self::Operator => "Operator",
            Self::Whitespace => "Whitespace",
            Self::Identifier => "Identifier",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reserved words of the tokenized language
pub static KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "delete", "do", "else", "finally",
    "for", "if", "in", "new", "return", "switch", "this", "throw", "try", "void", "long",
    "register", "unsigned", "int", "char", "bool", "while",
];

/// Operator candidates, ordered by descending length so the scanner's
/// longest-match probe tries `<<=` before `<<` before `<`
pub static OPERATORS: &[&str] = &[
    // 3 characters
    "<<=", ">>=",
    // 2 characters
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "->",
    // 1 character
    "=", "+", "-", "*", "/", "%", "<", ">", "!", "&", "|", "^", "~", ".", ",", ";", ":", "?",
    "[", "]", "(", ")", "{", "}",
];

/// Check whether `word` is a reserved word
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("for"));
        assert!(is_keyword("unsigned"));
        assert!(is_keyword("while"));
        assert!(!is_keyword("forx"));
        assert!(!is_keyword("For"));
        assert!(!is_keyword(""));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenCategory::Number.to_string(), "Number");
        assert_eq!(TokenCategory::String.to_string(), "String");
        assert_eq!(TokenCategory::Char.to_string(), "Char");
        assert_eq!(TokenCategory::Whitespace.to_string(), "Whitespace");
    }

    #[test]
    fn test_operator_table_is_longest_first() {
        for pair in OPERATORS.windows(2) {
            assert!(
                pair[0].len() >= pair[1].len(),
                "'{}' listed before shorter '{}'",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_compound_assignment_operators_present() {
        assert!(OPERATORS.contains(&"<<="));
        assert!(OPERATORS.contains(&">>="));
        assert!(OPERATORS.contains(&"->"));
    }
}
