//! Base tokenization for stylesheets
//!
//! This is the entry point where source strings become token streams. Every
//! non-whitespace character ends up in some token, so there is no failure mode
//! here; validation happens in the parsers.

use crate::lexing::tokens::Token;
use logos::Logos;

/// Tokenize a stylesheet into bare tokens, in source order.
pub fn tokenize(source: &str) -> Vec<Token> {
    // `Word` matches every non-whitespace, non-reserved character, so the
    // lexer has no error branch to drop
    let tokens: Vec<Token> = Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect();
    tracing::trace!(target: "markstyle::lexing", count = tokens.len(), "tokenized stylesheet");
    tokens
}

/// Tokenize a stylesheet, pairing each token with its byte range in `source`.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // Unreachable error branch, see `tokenize`
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// The string view of [`tokenize`]: one lexeme per token.
pub fn tokenize_generic(source: &str) -> Vec<String> {
    tokenize(source)
        .iter()
        .map(|token| token.lexeme().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_declaration() {
        let tokens = tokenize("display: none;");
        assert_eq!(
            tokens,
            vec![
                Token::Word("display".to_string()),
                Token::Colon,
                Token::Word("none".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize_generic(""), Vec::<String>::new());
    }

    #[test]
    fn test_hex_color_splits_on_hash() {
        assert_eq!(
            tokenize_generic("color: #191919;"),
            vec!["color", ":", "#", "191919", ";"]
        );
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = ".foo { a: b; }";
        let tokens = tokenize_with_spans(source);

        assert_eq!(tokens[0], (Token::Period, 0..1));
        assert_eq!(tokens[1], (Token::Word("foo".to_string()), 1..4));
        for (token, span) in &tokens {
            assert_eq!(&source[span.clone()], token.lexeme());
        }
    }

    #[test]
    fn test_no_character_is_dropped() {
        let source = ".a-1 { b%: (c)!~ @d; }";
        let joined: String = tokenize_generic(source).concat();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, expected);
        assert_eq!(tokenize_with_spans(source).len(), tokenize(source).len());
    }

    #[test]
    fn test_deterministic() {
        let source = ".foo,.bar {\n display: flex;\n color: red;\n}\n";
        assert_eq!(tokenize(source), tokenize(source));
    }
}
