//! Output formats for tokens and stylesheets
//!
//! - [css]: canonical stylesheet text, also exposed through `Display`
//! - [tag]: XML-like tags mirroring the AST structure
//! - [treeviz]: box-drawing tree for quick inspection
//!
//! JSON and YAML come straight from the serde derives on the AST and tokens.

pub mod css;
pub mod tag;
pub mod treeviz;

pub use css::to_css;
pub use tag::serialize_stylesheet;
pub use treeviz::to_treeviz_str;
