//! Stylesheet AST
//!
//! The tree is built bottom-up by the parsers and never mutated afterwards:
//!
//!     Stylesheet
//!     └── Rule
//!         ├── Selector (one or more)
//!         └── Declaration (zero or more)
//!             └── Value
//!
//! Order is preserved everywhere (rules, selectors, declarations) exactly as it
//! appeared in the source. Interpreting that order, e.g. last declaration wins,
//! is left to the consumer.

use serde::{Deserialize, Serialize};

/// Units a [`Value::Size`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
}

impl Unit {
    /// The suffix written after the magnitude.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
        }
    }
}

/// The right-hand side of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Size { magnitude: f64, unit: Unit },
    /// The concatenated lexemes of every token in the value.
    Keyword(String),
}

impl Value {
    pub fn px(magnitude: f64) -> Self {
        Value::Size {
            magnitude,
            unit: Unit::Px,
        }
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Value::Keyword(text.into())
    }
}

/// A `name: value` pair. The name is taken verbatim and never checked against a
/// list of known properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub value: Value,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Declaration {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// `*`
    Universal,
    /// `.name`
    Class(String),
}

impl Selector {
    pub fn class(name: impl Into<String>) -> Self {
        Selector::Class(name.into())
    }
}

/// A selector list and the declaration block it applies to. The parser never
/// produces a rule without selectors; the block may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>) -> Self {
        Rule {
            selectors,
            declarations,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Stylesheet { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// All declarations in source order, paired with the rule they belong to.
    pub fn declarations(&self) -> impl Iterator<Item = (&Rule, &Declaration)> {
        self.rules
            .iter()
            .flat_map(|rule| rule.declarations.iter().map(move |decl| (rule, decl)))
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
