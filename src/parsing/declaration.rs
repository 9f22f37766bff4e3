//! Declaration parsing
//!
//! `name ":" value-tokens ";"`. The value run is everything strictly between the
//! colon and the next semicolon. When no semicolon follows, the run extends to the
//! end of the input and the remainder is empty, unless
//! [`ParseOptions::require_semicolon`] is set.

use super::{build_value, ParseOptions, ParseResult};
use crate::ast::Declaration;
use crate::error::ParseError;
use crate::lexing::tokens::Token;

/// Parse one declaration from the front of `tokens`, consuming its `;`.
pub fn parse_declaration(
    tokens: &[Token],
    options: ParseOptions,
) -> ParseResult<'_, Declaration> {
    let (name, rest) = match tokens {
        [Token::Word(name), Token::Colon, rest @ ..] => (name, rest),
        _ => return Err(ParseError::InvalidDeclaration(statement_fragment(tokens))),
    };

    let (value_tokens, remainder) = match rest.iter().position(|t| *t == Token::Semicolon) {
        Some(end) => (&rest[..end], &rest[end + 1..]),
        None if options.require_semicolon => {
            return Err(ParseError::MissingSemicolon(name.clone()));
        }
        None => (rest, &rest[rest.len()..]),
    };

    if value_tokens.is_empty() {
        return Err(ParseError::EmptyValueTokens);
    }
    let value = build_value(value_tokens)?;

    tracing::trace!(target: "markstyle::parsing", name = %name, ?value, "declaration");
    Ok((Declaration::new(name.clone(), value), remainder))
}

/// Parse a declaration block: an optional leading `{`, then declarations up to
/// the closing `}`. The `}` is left at the front of the remainder.
pub fn parse_declarations(
    tokens: &[Token],
    options: ParseOptions,
) -> ParseResult<'_, Vec<Declaration>> {
    let mut remaining = match tokens {
        [Token::OpenBrace, rest @ ..] => rest,
        _ => tokens,
    };
    let mut declarations = Vec::new();

    while remaining.first() != Some(&Token::CloseBrace) {
        let (declaration, rest) = parse_declaration(remaining, options)?;
        declarations.push(declaration);
        remaining = rest;
    }

    Ok((declarations, remaining))
}

/// The offending statement for error messages: tokens up to the next `;` or `}`.
fn statement_fragment(tokens: &[Token]) -> String {
    tokens
        .iter()
        .take_while(|t| !matches!(t, Token::Semicolon | Token::CloseBrace))
        .map(Token::lexeme)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use crate::lexing::tokenize;

    fn declaration(source: &str) -> Result<(Declaration, Vec<Token>), ParseError> {
        let tokens = tokenize(source);
        parse_declaration(&tokens, ParseOptions::default())
            .map(|(decl, rest)| (decl, rest.to_vec()))
    }

    #[test]
    fn test_keyword_declaration() {
        assert_eq!(
            declaration("display: none;"),
            Ok((Declaration::new("display", Value::keyword("none")), vec![]))
        );
    }

    #[test]
    fn test_size_declaration() {
        assert_eq!(
            declaration("margin: 10px;"),
            Ok((Declaration::new("margin", Value::px(10.0)), vec![]))
        );
    }

    #[test]
    fn test_hex_color_declaration() {
        assert_eq!(
            declaration("color: #191919;"),
            Ok((Declaration::new("color", Value::keyword("#191919")), vec![]))
        );
    }

    #[test]
    fn test_remainder_follows_semicolon() {
        let (decl, rest) = declaration("a: b; c: d;").unwrap();
        assert_eq!(decl, Declaration::new("a", Value::keyword("b")));
        assert_eq!(
            rest,
            vec![
                Token::Word("c".to_string()),
                Token::Colon,
                Token::Word("d".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_missing_semicolon_consumes_rest() {
        assert_eq!(
            declaration("border: 1px solid"),
            Ok((Declaration::new("border", Value::px(1.0)), vec![]))
        );
    }

    #[test]
    fn test_missing_semicolon_strict() {
        let tokens = tokenize("border: 1px solid");
        assert_eq!(
            parse_declaration(&tokens, ParseOptions::strict()),
            Err(ParseError::MissingSemicolon("border".to_string()))
        );
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            declaration("display none;"),
            Err(ParseError::InvalidDeclaration("display none".to_string()))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            declaration(""),
            Err(ParseError::InvalidDeclaration(String::new()))
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(declaration("color: ;"), Err(ParseError::EmptyValueTokens));
        assert_eq!(declaration("color:"), Err(ParseError::EmptyValueTokens));
    }

    #[test]
    fn test_block_stops_at_close_brace() {
        let tokens = tokenize("{ display: flex; color: red; } .next");
        let (decls, rest) = parse_declarations(&tokens, ParseOptions::default()).unwrap();

        assert_eq!(
            decls,
            vec![
                Declaration::new("display", Value::keyword("flex")),
                Declaration::new("color", Value::keyword("red")),
            ]
        );
        assert_eq!(rest[0], Token::CloseBrace);
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn test_empty_block() {
        let tokens = tokenize("{}");
        let (decls, rest) = parse_declarations(&tokens, ParseOptions::default()).unwrap();
        assert!(decls.is_empty());
        assert_eq!(rest, &[Token::CloseBrace]);
    }

    #[test]
    fn test_unterminated_block() {
        let tokens = tokenize("{ display: flex;");
        assert_eq!(
            parse_declarations(&tokens, ParseOptions::default()),
            Err(ParseError::InvalidDeclaration(String::new()))
        );
    }
}
