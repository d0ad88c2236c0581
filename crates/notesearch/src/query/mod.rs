//! Search query parsing.
//!
//! Turns free-form search text into an ordered list of [`Token`]s.
//!
//! # Syntax
//!
//! - `word` - a keyword, matched against note content
//! - `tag:name` - a tag filter (the operator is configurable and
//!   case-insensitive, see [`QuerySettings`])
//! - `tag:` - a tag operator with no payload yet
//!
//! Words are separated by any run of whitespace. Punctuation stays part of
//! the word it is attached to.
//!
//! # Example
//!
//! ```
//! use notesearch_rs::query::{Query, QuerySettings, Token};
//!
//! let query = Query::new("tag:a tag:b, keyword tag:", &QuerySettings::default());
//! assert_eq!(
//!     query.tokens(),
//!     &[
//!         Token::tag("a"),
//!         Token::tag("b,"),
//!         Token::keyword("keyword"),
//!         Token::tag(""),
//!     ]
//! );
//! assert_eq!(query.tags(), vec!["a", "b,"]);
//! ```

mod parsed;
mod parser;
mod settings;
mod token;

pub use parsed::Query;
pub use parser::QueryParser;
pub use settings::{QuerySettings, DEFAULT_TAG_OPERATOR};
pub use token::Token;

#[cfg(test)]
mod tests;
