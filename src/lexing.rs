//! Lexer
//!
//! This module turns source text into token streams. There are two independent
//! lexers sharing the same approach: a vanilla logos lexer per language, with no
//! custom scanning code.
//!
//! Stylesheet tokens ([tokens]):
//!     The reserved punctuation `{ } : ; , . * #` is emitted one character per
//!     token. Any other maximal run of non-whitespace characters becomes a single
//!     `Word`. Whitespace only separates tokens and is skipped, so the parser never
//!     sees it. This stage cannot fail.
//!
//! Markup tokens ([markup]):
//!     `<`, `>` and `/` are punctuation, runs of ASCII letters are text, and
//!     anything else fails with an unknown-character error.

pub mod base_tokenization;
pub mod markup;
pub mod tokens;

pub use base_tokenization::{tokenize, tokenize_generic, tokenize_with_spans};
pub use markup::{tokenize_markup, tokenize_markup_with_spans, MarkupToken};
pub use tokens::Token;
