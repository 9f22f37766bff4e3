//! Error types for lexing and parsing
//!
//! All failures are terminal. A parser that hits one of these returns it
//! immediately and the caller propagates it with `?`; there is no partial
//! stylesheet and no skip-and-continue.

use thiserror::Error;

/// Every way a markup or stylesheet input can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The markup tokenizer met a character that is neither `<`, `>`, `/`
    /// nor the start of a run of letters.
    #[error("unknown character '{character}' at byte {offset}")]
    UnknownCharacter { character: char, offset: usize },

    /// The input did not start with `name :`. Carries the tokens that were
    /// found instead (empty when the input ran out).
    #[error("invalid declaration near '{0}'")]
    InvalidDeclaration(String),

    /// A selector span started with something other than `*` or `.`.
    #[error("unknown selector '{0}'")]
    UnknownSelector(String),

    /// A token shaped like a pixel size whose magnitude is not a finite
    /// number, e.g. `1-2px` or a digit run that overflows.
    #[error("invalid size value '{0}'")]
    InvalidSizeValue(String),

    /// A declaration had nothing between its `:` and `;`.
    #[error("declaration has no value")]
    EmptyValueTokens,

    /// The named declaration ran to end of input without a `;`. Only raised
    /// when semicolons are required.
    #[error("declaration '{0}' is missing its terminating ';'")]
    MissingSemicolon(String),
}

impl ParseError {
    /// Short, stable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::UnknownCharacter { .. } => "unknown-character",
            ParseError::InvalidDeclaration(_) => "invalid-declaration",
            ParseError::UnknownSelector(_) => "unknown-selector",
            ParseError::InvalidSizeValue(_) => "invalid-size-value",
            ParseError::EmptyValueTokens => "empty-value-tokens",
            ParseError::MissingSemicolon(_) => "missing-semicolon",
        }
    }
}
