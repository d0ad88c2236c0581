//! The parsed form of a search text.

use serde::Serialize;

use super::parser::QueryParser;
use super::settings::QuerySettings;
use super::token::Token;

/// A parsed search query.
///
/// Holds the original text and the tokens found in it, in the order they were
/// typed. Duplicates are kept. Two queries are equal when their tokens are
/// equal, regardless of the original spacing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Query {
    search_text: String,
    tokens: Vec<Token>,
}

impl Query {
    /// Parses `search_text` with the given settings.
    pub fn new(search_text: &str, settings: &QuerySettings) -> Self {
        QueryParser::new(settings).parse(search_text)
    }

    /// Parses `search_text` with [`QuerySettings::default`].
    pub fn parse_default(search_text: &str) -> Self {
        Self::new(search_text, &QuerySettings::default())
    }

    pub(crate) fn from_parts(search_text: String, tokens: Vec<Token>) -> Self {
        Self {
            search_text,
            tokens,
        }
    }

    /// The original, unmodified search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// All tokens, in input order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The last token typed, if any.
    pub fn last_token(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Returns true if the search text contained no words.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Keyword payloads, in input order.
    pub fn keywords(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Keyword(text) => Some(text.as_str()),
                Token::Tag(_) => None,
            })
            .collect()
    }

    /// Non-empty tag payloads, in input order.
    ///
    /// A bare operator still appears in [`Query::tokens`] as an empty tag.
    pub fn tags(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Tag(text) if !text.is_empty() => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Query {}
