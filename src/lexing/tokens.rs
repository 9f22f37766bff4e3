//! Token definitions for stylesheets
//!
//! The tokens are defined using the logos derive macro. Reserved characters map
//! to their own unit variants; everything else that is not whitespace is grouped
//! into the longest possible [`Token::Word`].
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in a stylesheet
#[derive(Logos, Debug, PartialEq, Clone, Serialize)]
#[logos(skip r"\s+")]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token("*")]
    Asterisk,
    #[token("#")]
    Hash,

    // Identifiers, numbers with units, and anything else up to the next
    // reserved character or whitespace
    #[regex(r"[^{}:;,.*#\s]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl Token {
    /// The source text this token was produced from.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Period => ".",
            Token::Asterisk => "*",
            Token::Hash => "#",
            Token::Word(text) => text.as_str(),
        }
    }

    /// Check if this token is one of the single-character reserved tokens
    pub fn is_punctuation(&self) -> bool {
        !matches!(self, Token::Word(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// Concatenate the lexemes of a token run without separators.
pub fn join_lexemes(tokens: &[Token]) -> String {
    tokens.iter().map(Token::lexeme).collect()
}
