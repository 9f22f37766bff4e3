//! Markup tokenizer
//!
//! Classifies angle-bracket markup into four kinds of tokens. Text is a maximal
//! run of ASCII letters; it never contains `<`, `>` or `/`. Any other character
//! where a token should start is rejected, including whitespace.

use crate::error::ParseError;
use logos::Logos;
use serde::Serialize;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum MarkupToken {
    #[token("<")]
    OpenTag,
    #[token(">")]
    CloseTag,
    #[token("/")]
    Slash,
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Text(String),
}

impl fmt::Display for MarkupToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupToken::OpenTag => f.write_str("<"),
            MarkupToken::CloseTag => f.write_str(">"),
            MarkupToken::Slash => f.write_str("/"),
            MarkupToken::Text(text) => f.write_str(text),
        }
    }
}

/// Tokenize markup, failing on the first character that starts no token.
pub fn tokenize_markup(source: &str) -> Result<Vec<MarkupToken>, ParseError> {
    Ok(tokenize_markup_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize markup, pairing each token with its byte range in `source`.
pub fn tokenize_markup_with_spans(
    source: &str,
) -> Result<Vec<(MarkupToken, logos::Span)>, ParseError> {
    let mut lexer = MarkupToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let offset = lexer.span().start;
                let character = source[offset..].chars().next().unwrap_or_default();
                tracing::debug!(target: "markstyle::lexing", %character, offset, "unknown markup character");
                return Err(ParseError::UnknownCharacter { character, offset });
            }
        }
    }

    tracing::trace!(target: "markstyle::lexing", count = tokens.len(), "tokenized markup");
    Ok(tokens)
}
