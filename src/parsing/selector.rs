//! Selector parsing
//!
//! A selector's tokens run up to the next `{` (left in place for the rule body)
//! or the next `,` (consumed). Only the first token decides the kind: anything
//! after a `*` is ignored, and everything after a `.` makes up the class name,
//! even when that leaves it empty.

use super::ParseResult;
use crate::ast::Selector;
use crate::error::ParseError;
use crate::lexing::tokens::{join_lexemes, Token};

/// Parse one selector from the front of `tokens`.
pub fn parse_selector(tokens: &[Token]) -> ParseResult<'_, Selector> {
    let end = tokens
        .iter()
        .position(|t| matches!(t, Token::OpenBrace | Token::Comma))
        .unwrap_or(tokens.len());
    let span = &tokens[..end];
    let remainder = match tokens.get(end) {
        Some(Token::Comma) => &tokens[end + 1..],
        _ => &tokens[end..],
    };

    let selector = match span {
        [Token::Asterisk, ..] => Selector::Universal,
        [Token::Period, name @ ..] => Selector::Class(join_lexemes(name)),
        _ => return Err(ParseError::UnknownSelector(join_lexemes(span))),
    };

    Ok((selector, remainder))
}

/// Parse selectors until the remainder starts with `{`. At least one selector is
/// required, so an empty list fails like any other unrecognized selector.
pub fn parse_comma_separated_selectors(tokens: &[Token]) -> ParseResult<'_, Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut remaining = tokens;

    loop {
        let (selector, rest) = parse_selector(remaining)?;
        selectors.push(selector);
        remaining = rest;
        if remaining.first() == Some(&Token::OpenBrace) {
            break;
        }
    }

    Ok((selectors, remaining))
}
