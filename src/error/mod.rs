//! Error handling for the tokenizer boundary
//!
//! Scanning itself never fails: malformed lexical input is flagged on the
//! token and the scan continues. The only failures live at the boundary,
//! where a source file cannot be opened or read.

use std::fmt;

/// Result type alias for ctok operations
pub type CtokResult<T> = Result<T, CtokError>;

/// Error type for the tokenizer boundary
#[derive(Debug, Clone)]
pub enum CtokError {
    /// A source file could not be opened or read
    Io { path: String, message: String },
}

impl CtokError {
    /// Create a new I/O error for `path`
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl fmt::Display for CtokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "Failed to read file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for CtokError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CtokError::io("input.c", &source);

        assert_eq!(
            err.to_string(),
            "Failed to read file 'input.c': no such file"
        );
    }
}
