//! Property-based tests for the lexers and the stylesheet parser

use markstyle::{
    parse_stylesheet, tokenize, tokenize_generic, tokenize_markup, Declaration, MarkupToken, Rule,
    Selector, Stylesheet, Value,
};
use proptest::prelude::*;

/// Strings made only of letters and the markup punctuation
fn markup_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z</>]{0,40}"
}

fn selector_strategy() -> impl Strategy<Value = Selector> {
    prop_oneof![
        Just(Selector::Universal),
        "[a-z][a-z0-9-]{0,8}".prop_map(Selector::Class),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-999i32..999).prop_map(|n| Value::px(f64::from(n))),
        "[a-z][a-z-]{0,10}".prop_map(Value::Keyword),
        "[0-9a-f]{3,6}".prop_map(|hex| Value::Keyword(format!("#{}", hex))),
    ]
}

fn declaration_strategy() -> impl Strategy<Value = Declaration> {
    ("[a-z][a-z-]{0,10}", value_strategy()).prop_map(|(name, value)| Declaration::new(name, value))
}

fn stylesheet_strategy() -> impl Strategy<Value = Stylesheet> {
    prop::collection::vec(
        (
            prop::collection::vec(selector_strategy(), 1..4),
            prop::collection::vec(declaration_strategy(), 0..5),
        )
            .prop_map(|(selectors, declarations)| Rule::new(selectors, declarations)),
        0..5,
    )
    .prop_map(Stylesheet::new)
}

proptest! {
    #[test]
    fn markup_tokenization_is_deterministic(source in markup_strategy()) {
        prop_assert_eq!(tokenize_markup(&source), tokenize_markup(&source));
    }

    #[test]
    fn markup_tokens_reconstruct_source(source in markup_strategy()) {
        let tokens = tokenize_markup(&source).unwrap();
        let rendered: String = tokens.iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(rendered, source);

        for token in &tokens {
            if let MarkupToken::Text(text) = token {
                prop_assert!(!text.is_empty());
                prop_assert!(text.chars().all(|c| c.is_ascii_alphabetic()));
            }
        }
    }

    #[test]
    fn generic_tokens_cover_every_non_whitespace_character(source in "[a-zA-Z0-9 \t\n{}:;,.*#%()!/<>-]{0,60}") {
        let joined: String = tokenize_generic(&source).concat();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn parser_never_panics(source in "[.*#{}:;, a-z0-9-]{0,60}") {
        let _ = parse_stylesheet(&source);
    }

    #[test]
    fn rendered_stylesheet_parses_back(sheet in stylesheet_strategy()) {
        let rendered = sheet.to_string();
        prop_assert_eq!(parse_stylesheet(&rendered), Ok(sheet));
    }

    #[test]
    fn tokenizing_is_side_effect_free(source in "[.*#{}:;, a-z0-9-]{0,60}") {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }
}
