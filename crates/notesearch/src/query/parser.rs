//! Tokenizer for free-form search text.

use tracing::{debug, trace};

use super::parsed::Query;
use super::settings::QuerySettings;
use super::token::Token;
use crate::text::strip_prefix_ignore_case;

/// Parser for search text.
///
/// Search text is a whitespace-separated list of words. A word starting with
/// one of the configured tag operators becomes a [`Token::Tag`] carrying the
/// rest of the word; every other word becomes a [`Token::Keyword`].
///
/// # Grammar
///
/// ```text
/// query   ::= word*            (separated by runs of whitespace)
/// word    ::= operator payload | keyword
/// operator::= tag_operator | localized_tag_operator   (case-insensitive)
/// ```
///
/// # Example
///
/// ```
/// use notesearch_rs::query::{QueryParser, QuerySettings, Token};
///
/// let settings = QuerySettings::default();
/// let query = QueryParser::new(&settings).parse("groceries TAG:Home");
/// assert_eq!(
///     query.tokens(),
///     &[Token::keyword("groceries"), Token::tag("Home")]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'a> {
    settings: &'a QuerySettings,
}

impl<'a> QueryParser<'a> {
    /// Creates a parser for the given settings.
    pub fn new(settings: &'a QuerySettings) -> Self {
        if settings.operators().iter().any(|op| op.is_empty()) {
            debug!("empty tag operator configured; every word will parse as a tag");
        }
        Self { settings }
    }

    /// Parses `search_text` into a [`Query`].
    ///
    /// Never fails: empty or whitespace-only text yields an empty query.
    pub fn parse(&self, search_text: &str) -> Query {
        let tokens: Vec<Token> = self.tokenize(search_text).collect();
        trace!(count = tokens.len(), "parsed search text");
        Query::from_parts(search_text.to_string(), tokens)
    }

    /// Yields one token per word, left to right.
    pub fn tokenize<'s>(&self, search_text: &'s str) -> impl Iterator<Item = Token> + 's
    where
        'a: 's,
    {
        let parser: QueryParser<'s> = QueryParser {
            settings: self.settings,
        };
        search_text
            .trim()
            .split_whitespace()
            .map(move |word| parser.classify(word))
    }

    /// Classifies a single non-empty word.
    fn classify(&self, word: &str) -> Token {
        let token = match self.tag_payload(word) {
            Some(payload) => Token::Tag(payload.to_string()),
            None => Token::Keyword(word.to_string()),
        };
        trace!(word, kind = token.kind(), "classified word");
        token
    }

    /// Returns the payload after the first operator `word` starts with.
    fn tag_payload<'w>(&self, word: &'w str) -> Option<&'w str> {
        self.settings
            .operators()
            .into_iter()
            .find_map(|operator| strip_prefix_ignore_case(word, operator))
    }
}
