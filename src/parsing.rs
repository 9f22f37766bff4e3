//! Parsing module for stylesheets
//!
//! Recursive descent over the token stream from [`crate::lexing::tokenize`]. Each
//! grammar rule is one function that takes a token slice and returns the node it
//! built together with the unconsumed remainder, always a sub-slice of its input.
//! The whole pipeline is a single forward-only cursor: no backtracking, and the
//! only lookahead is checking the identity of the next token.
//!
//! Grammar:
//!
//!     stylesheet  = rule*
//!     rule        = selectors "{" declaration* "}"
//!     selectors   = selector ("," selector)* ","?
//!     selector    = "*" token* | "." token+
//!     declaration = WORD ":" token+ (";" | EOF)
//!
//! The modules, leaf first: [value], [declaration], [selector], [rule].

pub mod declaration;
pub mod rule;
pub mod selector;
pub mod value;

use crate::ast::Stylesheet;
use crate::config::ParsingConfig;
use crate::error::ParseError;
use crate::lexing::{tokenize, Token};

pub use declaration::{parse_declaration, parse_declarations};
pub use rule::{parse, parse_rule, parse_rules};
pub use selector::{parse_comma_separated_selectors, parse_selector};
pub use value::build_value;

/// A parsed node paired with the tokens that follow it.
pub type ParseResult<'a, T> = Result<(T, &'a [Token]), ParseError>;

/// Knobs that change how strictly input is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a declaration that reaches end of input without a `;` instead of
    /// treating the rest of the stream as its value.
    pub require_semicolon: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            require_semicolon: true,
        }
    }
}

impl From<&ParsingConfig> for ParseOptions {
    fn from(config: &ParsingConfig) -> Self {
        ParseOptions {
            require_semicolon: config.require_semicolon,
        }
    }
}

/// Tokenize and parse stylesheet text with the default options.
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet, ParseError> {
    parse_stylesheet_with(source, ParseOptions::default())
}

/// Tokenize and parse stylesheet text.
pub fn parse_stylesheet_with(
    source: &str,
    options: ParseOptions,
) -> Result<Stylesheet, ParseError> {
    let tokens = tokenize(source);
    tracing::debug!(target: "markstyle::parsing", tokens = tokens.len(), ?options, "parsing stylesheet");

    parse(&tokens, options).inspect_err(|err| {
        tracing::debug!(target: "markstyle::parsing", kind = err.kind(), %err, "stylesheet rejected");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Declaration, Rule, Selector, Value};

    #[test]
    fn test_selector_list_and_block() {
        let sheet = parse_stylesheet(".foo,.bar {\n display: flex;\n color: red;\n}\n").unwrap();

        assert_eq!(
            sheet.rules,
            vec![Rule::new(
                vec![Selector::class("foo"), Selector::class("bar")],
                vec![
                    Declaration::new("display", Value::keyword("flex")),
                    Declaration::new("color", Value::keyword("red")),
                ],
            )]
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(parse_stylesheet(""), Ok(Stylesheet::default()));
        assert_eq!(parse_stylesheet("  \n\t"), Ok(Stylesheet::default()));
    }

    #[test]
    fn test_strict_options_reject_truncated_declaration() {
        assert_eq!(
            parse_stylesheet_with("* { margin: 0px }", ParseOptions::strict()),
            Err(ParseError::MissingSemicolon("margin".to_string()))
        );
    }

    #[test]
    fn test_options_from_config() {
        let config = ParsingConfig {
            require_semicolon: true,
        };
        assert_eq!(ParseOptions::from(&config), ParseOptions::strict());
    }
}
