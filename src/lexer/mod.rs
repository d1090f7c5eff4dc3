//! Lexical analysis module
//!
//! This module handles tokenization of C-like source text.

pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use token::{Token, TokenCategory, KEYWORDS, OPERATORS};
