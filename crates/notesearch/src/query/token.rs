//! Tokens produced by the query parser.

use serde::{Deserialize, Serialize};

/// A classified unit of a parsed search query.
///
/// Tokens keep the casing and punctuation of the search text exactly as
/// typed. Only tag-operator detection is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// A plain search word, matched against note content.
    Keyword(String),

    /// The payload following a tag operator, e.g. `work` in `tag:work`.
    ///
    /// The payload is empty when the operator was typed on its own.
    Tag(String),
}

impl Token {
    /// Creates a keyword token.
    pub fn keyword(text: impl Into<String>) -> Self {
        Token::Keyword(text.into())
    }

    /// Creates a tag token.
    pub fn tag(text: impl Into<String>) -> Self {
        Token::Tag(text.into())
    }

    /// Returns the token payload.
    pub fn text(&self) -> &str {
        match self {
            Token::Keyword(text) | Token::Tag(text) => text,
        }
    }

    /// Returns `"keyword"` or `"tag"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Keyword(_) => "keyword",
            Token::Tag(_) => "tag",
        }
    }

    /// Returns true for a tag operator with no payload.
    pub fn is_empty_tag(&self) -> bool {
        matches!(self, Token::Tag(text) if text.is_empty())
    }
}
