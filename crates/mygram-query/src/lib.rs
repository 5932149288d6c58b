//! Web-style search expression parsing for MygramDB clients.
//!
//! Converts informal search input into the boolean query syntax the backend
//! executes:
//!
//! - **Terms**: `golang` - words that must appear (adjacent terms are an
//!   implicit AND)
//! - **Phrases**: `"machine learning"` - exact match including spaces
//! - **Required**: `+golang` - explicitly required term
//! - **Excluded**: `-old` - term that must NOT appear
//! - **OR**: `python OR ruby` - alternatives (uppercase only; `or` stays an
//!   ordinary term)
//! - **Grouping**: `+(tutorial OR guide)` - nested sub-expressions
//!
//! The full-width space (U+3000) separates terms exactly like ASCII
//! whitespace, so CJK input such as `機械学習　チュートリアル` splits into
//! two terms.
//!
//! The grammar is implemented once, here; every other surface (CLI,
//! embedding callers) is a projection over this crate. All functions are
//! pure and synchronous: each call borrows its input for the duration and
//! keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use mygram_query::convert;
//!
//! let query = convert("+golang -old tutorial").unwrap();
//! assert_eq!(query, "golang AND tutorial AND NOT old");
//! ```

#![warn(missing_docs)]

mod error;
mod expr;
mod lexer;
mod parser;
mod simplify;

pub use error::SyntaxError;
pub use expr::SearchExpression;
pub use lexer::{Token, tokenize};
pub use parser::{convert, parse};
pub use simplify::{SimplifiedQuery, simplify};
