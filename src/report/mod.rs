//! Console reporting of scanned tokens
//!
//! One line per token: the literal content (with the fixed label
//! `whitespace` standing in for Whitespace runs), the category display
//! name, and a `, invalid` marker for flagged tokens.

use crate::lexer::{Token, TokenCategory};
use colored::Colorize;

/// Content shown for a token: whitespace runs print as a fixed label
/// instead of their literal characters
pub fn display_content(token: &Token) -> &str {
    if token.category == TokenCategory::Whitespace {
        "whitespace"
    } else {
        &token.content
    }
}

/// Plain one-line rendering of a token, without color
pub fn format_token(token: &Token) -> String {
    if token.is_invalid {
        format!(
            "{} ({}, invalid)",
            display_content(token),
            token.category.display_name()
        )
    } else {
        format!("{} ({})", display_content(token), token.category.display_name())
    }
}

/// Print the token report with colored category names and invalid markers
pub fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        let category = token.category.display_name().blue().bold();
        if token.is_invalid {
            println!(
                "{} ({}, {})",
                display_content(token),
                category,
                "invalid".red().bold()
            );
        } else {
            println!("{} ({})", display_content(token), category);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_label_substitution() {
        let token = Token::new(" \t\n", TokenCategory::Whitespace, false);
        assert_eq!(display_content(&token), "whitespace");
        assert_eq!(format_token(&token), "whitespace (Whitespace)");
    }

    #[test]
    fn test_valid_token_line() {
        let token = Token::new("for", TokenCategory::Keyword, false);
        assert_eq!(format_token(&token), "for (Keyword)");
    }

    #[test]
    fn test_invalid_token_line() {
        let token = Token::new("0x1G", TokenCategory::Number, true);
        assert_eq!(format_token(&token), "0x1G (Number, invalid)");
    }

    #[test]
    fn test_delimiters_are_kept_in_content() {
        let token = Token::new("\"hi\"", TokenCategory::String, false);
        assert_eq!(format_token(&token), "\"hi\" (String)");
    }
}
