//! # ctok
//!
//! A fault-tolerant tokenizer for C-like source files. Every lexical unit
//! of the input becomes a token — numbers, strings, characters, comments,
//! keywords, identifiers, operators, even whitespace — and malformed units
//! are flagged as invalid instead of stopping the scan.
//!
//! ## Architecture
//!
//! - `lexer`: cursor, token model, fixed tables, and the scanner itself
//! - `report`: console-formatted token listing
//! - `error`: boundary errors (file access)
//!
//! The scan is lossless: concatenating the contents of the emitted tokens
//! in order reproduces the input exactly.

pub mod error;
pub mod lexer;
pub mod report;

// Re-export commonly used types
pub use error::{CtokError, CtokResult};
pub use lexer::{Scanner, Token, TokenCategory};

/// Version of the ctok crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a source string.
///
/// Never fails: malformed lexical input is represented in-band through the
/// `is_invalid` flag on the affected token.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).scan()
}

/// Read a file and tokenize its contents
pub fn scan_file(path: &str) -> CtokResult<Vec<Token>> {
    let source = std::fs::read_to_string(path).map_err(|e| CtokError::io(path, &e))?;
    Ok(scan(&source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scan_smoke() {
        let tokens = scan("if (x) { y(); }");
        assert!(!tokens.is_empty());
        assert_eq!(tokens[0].category, TokenCategory::Keyword);
    }

    #[test]
    fn test_scan_is_deterministic() {
        let source = "int a = 0x1G; // note";
        assert_eq!(scan(source), scan(source));
    }

    #[test]
    fn test_scan_file_missing_path_is_error() {
        let result = scan_file("definitely/not/here.c");
        assert!(result.is_err());
    }
}
