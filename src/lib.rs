//! # markstyle
//!
//! Lexing and parsing for two small languages that share one design:
//! character stream, then token stream, then a typed tree.
//!
//! - Markup: [`lexing::markup::tokenize_markup`] classifies angle-bracket markup
//!   into [`lexing::markup::MarkupToken`]s.
//! - Stylesheets: [`lexing::tokenize`] produces [`lexing::Token`]s which
//!   [`parsing::parse`] folds into an [`ast::Stylesheet`].
//!
//! Every parser is a pure function over a token slice returning the node it built
//! together with the unconsumed remainder. There is no backtracking and no
//! error recovery: the first [`error::ParseError`] aborts the parse.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;

pub use ast::{Declaration, Rule, Selector, Stylesheet, Unit, Value};
pub use error::ParseError;
pub use lexing::markup::{tokenize_markup, MarkupToken};
pub use lexing::{tokenize, tokenize_generic, Token};
pub use parsing::{parse_stylesheet, parse_stylesheet_with, ParseOptions};
