//! Rule and stylesheet parsing

use super::{parse_comma_separated_selectors, parse_declarations, ParseOptions, ParseResult};
use crate::ast::{Rule, Stylesheet};
use crate::error::ParseError;
use crate::lexing::tokens::Token;

/// Parse one rule: everything up to and including the first `}`.
///
/// The span is handed to the selector parser and then to the declaration parser;
/// the remainder is whatever followed the `}`. Input without any `}` is treated
/// as one span covering the rest of the stream and fails inside the block.
pub fn parse_rule(tokens: &[Token], options: ParseOptions) -> ParseResult<'_, Rule> {
    let end = tokens
        .iter()
        .position(|t| *t == Token::CloseBrace)
        .map_or(tokens.len(), |close| close + 1);
    let (span, remainder) = tokens.split_at(end);

    let (selectors, body) = parse_comma_separated_selectors(span)?;
    let (declarations, _) = parse_declarations(body, options)?;

    Ok((Rule::new(selectors, declarations), remainder))
}

/// Parse rules until the token stream is exhausted.
pub fn parse_rules(tokens: &[Token], options: ParseOptions) -> Result<Vec<Rule>, ParseError> {
    let mut rules = Vec::new();
    let mut remaining = tokens;

    while !remaining.is_empty() {
        let (rule, rest) = parse_rule(remaining, options)?;
        tracing::trace!(
            target: "markstyle::parsing",
            index = rules.len(),
            selectors = rule.selectors.len(),
            declarations = rule.declarations.len(),
            "rule"
        );
        rules.push(rule);
        remaining = rest;
    }

    Ok(rules)
}

/// Parse a whole token stream into a stylesheet.
pub fn parse(tokens: &[Token], options: ParseOptions) -> Result<Stylesheet, ParseError> {
    parse_rules(tokens, options).map(Stylesheet::new)
}
