//! Compiles parsed queries and single-purpose filters into matchers.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::matcher::{NoteMatcher, TagMatcher};
use super::predicate::{Predicate, TextPattern};
use super::record::{NoteField, TagField};
use crate::query::{Query, QuerySettings, Token};
use crate::text::Comparison;

/// Matches an empty string, the literal `null`, or an empty JSON array with
/// any padding.
const UNTAGGED_PATTERN: &str = r"^(?:|null|\s*\[\s*\]\s*)$";

/// Compiles a query into a note matcher.
///
/// Every token contributes one sub-predicate and all of them must match:
///
/// - `Keyword(k)`: the content contains `k`, ignoring case and diacritics.
/// - `Tag(t)`: the tags array contains exactly `t`, ignoring case and
///   diacritics.
/// - `Tag("")`: no constraint.
///
/// An empty query matches every note.
pub fn compile_note_filter(query: &Query) -> NoteMatcher {
    if query.is_empty() {
        return NoteMatcher::always();
    }

    let predicates = query.tokens().iter().map(note_predicate).collect();
    let matcher = NoteMatcher::new(Predicate::and(predicates));
    debug!(tokens = query.tokens().len(), filter = %matcher, "compiled note filter");
    matcher
}

/// Parses `search_text` and compiles it into a note matcher.
pub fn compile_note_filter_for_text(search_text: &str, settings: &QuerySettings) -> NoteMatcher {
    compile_note_filter(&Query::new(search_text, settings))
}

/// Parses `search_text` with [`QuerySettings::default`] (`tag:` only) and
/// compiles it into a note matcher.
pub fn compile_note_filter_with_defaults(search_text: &str) -> NoteMatcher {
    compile_note_filter(&Query::parse_default(search_text))
}

/// Matches notes whose `deleted` flag equals `is_deleted`.
pub fn deleted_filter(is_deleted: bool) -> NoteMatcher {
    NoteMatcher::new(Predicate::Flag {
        field: NoteField::Deleted,
        value: is_deleted,
    })
}

/// Matches notes whose content contains `keyword` verbatim (case and
/// diacritics significant).
pub fn exact_content_filter(keyword: &str) -> NoteMatcher {
    NoteMatcher::new(Predicate::contains(
        NoteField::Content,
        keyword,
        Comparison::EXACT,
    ))
}

/// Matches notes whose system tags contain `tag`, ignoring case.
pub fn system_tag_filter(tag: &str) -> NoteMatcher {
    NoteMatcher::new(Predicate::contains(
        NoteField::SystemTags,
        tag,
        Comparison::CASE_INSENSITIVE,
    ))
}

/// Matches notes tagged exactly `tag`, ignoring case.
pub fn tag_filter(tag: &str) -> NoteMatcher {
    NoteMatcher::new(Predicate::contains(
        NoteField::Tags,
        quoted_tag(tag),
        Comparison::CASE_INSENSITIVE,
    ))
}

/// Matches notes without tags.
///
/// The tags field must be, as a whole, an empty string, `null`, or an empty
/// JSON array (whitespace allowed around and inside the brackets). Notes with
/// no tags field at all do not match.
pub fn untagged_filter() -> NoteMatcher {
    NoteMatcher::new(Predicate::FullMatch {
        field: NoteField::Tags,
        regex: untagged_regex().clone(),
    })
}

/// Matches notes whose first content line contains `text`, ignoring case and
/// diacritics.
pub fn title_filter(text: &str) -> NoteMatcher {
    NoteMatcher::new(Predicate::FirstLineContains {
        field: NoteField::Content,
        pattern: TextPattern::new(text, Comparison::FOLDED),
    })
}

/// Compiles a query into a tag matcher for autocompletion.
///
/// Only the last token is considered, since that is the word being typed:
///
/// - no tokens, or a bare tag operator: every tag matches
/// - `Keyword(k)`: the name contains `k`, ignoring case and diacritics
/// - `Tag(t)`: the name contains `t`, ignoring case and diacritics, and is
///   not already exactly `t` (ignoring case)
pub fn compile_tag_filter(query: &Query) -> TagMatcher {
    let predicate = match query.last_token() {
        None => Predicate::always(),
        Some(Token::Keyword(keyword)) => {
            Predicate::contains(TagField::Name, keyword.as_str(), Comparison::FOLDED)
        }
        Some(Token::Tag(tag)) if tag.is_empty() => Predicate::always(),
        Some(Token::Tag(tag)) => Predicate::and(vec![
            Predicate::contains(TagField::Name, tag.as_str(), Comparison::FOLDED),
            Predicate::negate(Predicate::equals(
                TagField::Name,
                tag.as_str(),
                Comparison::CASE_INSENSITIVE,
            )),
        ]),
    };

    let matcher = TagMatcher::new(predicate);
    debug!(filter = %matcher, "compiled tag filter");
    matcher
}

/// Parses `keyword` and compiles it into a tag matcher.
pub fn compile_tag_filter_for_keyword(keyword: &str, settings: &QuerySettings) -> TagMatcher {
    compile_tag_filter(&Query::new(keyword, settings))
}

/// Returns `tag` escaped and wrapped in double quotes, as it appears inside
/// a JSON-encoded tags array.
///
/// Backslashes are escaped first, then forward slashes, so `a/b` becomes
/// `"a\/b"` and `\x` becomes `"\\x"`.
pub fn quoted_tag(tag: &str) -> String {
    let escaped = tag.replace('\\', "\\\\").replace('/', "\\/");
    format!("\"{escaped}\"")
}

fn note_predicate(token: &Token) -> Predicate<NoteField> {
    match token {
        Token::Keyword(keyword) => {
            Predicate::contains(NoteField::Content, keyword.as_str(), Comparison::FOLDED)
        }
        Token::Tag(tag) if tag.is_empty() => Predicate::always(),
        Token::Tag(tag) => Predicate::contains(NoteField::Tags, quoted_tag(tag), Comparison::FOLDED),
    }
}

fn untagged_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(UNTAGGED_PATTERN).expect("untagged pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_tag_plain() {
        assert_eq!(quoted_tag("Yosemite"), "\"Yosemite\"");
    }

    #[test]
    fn test_quoted_tag_escapes_backslash_then_slash() {
        assert_eq!(quoted_tag("\\Yosemite"), "\"\\\\Yosemite\"");
        assert_eq!(quoted_tag("a/b"), "\"a\\/b\"");
        // A slash must not have its inserted backslash escaped again.
        assert_eq!(quoted_tag("\\/"), "\"\\\\\\/\"");
    }

    #[test]
    fn test_untagged_pattern_compiles() {
        assert!(untagged_regex().is_match("[]"));
        assert!(!untagged_regex().is_match("[\"a\"]"));
    }

    #[test]
    fn test_empty_tag_token_is_kept_as_constant() {
        let query = Query::parse_default("a tag:");
        let matcher = compile_note_filter(&query);
        match matcher.predicate() {
            Predicate::And(predicates) => {
                assert_eq!(predicates.len(), 2);
                assert_eq!(predicates[1], Predicate::Constant(true));
            }
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_one_predicate_per_word() {
        let query = Query::parse_default("     lots of empty spaces   \n   \n  ");
        match compile_note_filter(&query).predicate() {
            Predicate::And(predicates) => assert_eq!(predicates.len(), 4),
            other => panic!("expected conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_query_is_constant_true() {
        let matcher = compile_note_filter(&Query::parse_default("  "));
        assert_eq!(matcher.predicate(), &Predicate::Constant(true));
    }
}
