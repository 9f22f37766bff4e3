//! Value builder
//!
//! Only the first token decides between a size and a keyword. A keyword, on the
//! other hand, is made of every token in the run, so `#` followed by `191919`
//! becomes the single keyword `#191919`.

use crate::ast::{Unit, Value};
use crate::error::ParseError;
use crate::lexing::tokens::{join_lexemes, Token};
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits and minus signs directly followed by `px`, with nothing after.
static PX_SIZE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9-]+)px$").unwrap());

/// Interpret a non-empty run of value tokens.
pub fn build_value(tokens: &[Token]) -> Result<Value, ParseError> {
    let first = tokens.first().ok_or(ParseError::EmptyValueTokens)?;

    if let Token::Word(word) = first {
        if let Some(captures) = PX_SIZE_REGEX.captures(word) {
            let magnitude = captures[1]
                .parse::<f64>()
                .ok()
                .filter(|m| m.is_finite())
                .ok_or_else(|| ParseError::InvalidSizeValue(word.clone()))?;
            return Ok(Value::Size {
                magnitude,
                unit: Unit::Px,
            });
        }
    }

    Ok(Value::Keyword(join_lexemes(tokens)))
}
