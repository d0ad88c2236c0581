//! Tests for the query parser.

use super::*;

fn parse(text: &str) -> Query {
    Query::new(text, &QuerySettings::default())
}

// ==================== Empty Input Tests ====================

#[test]
fn test_parse_empty_text() {
    let query = parse("");
    assert!(query.is_empty());
    assert!(query.tokens().is_empty());
    assert_eq!(query.search_text(), "");
}

#[test]
fn test_parse_whitespace_only() {
    assert!(parse("   \n  ").is_empty());
    assert!(parse(" \n   \n\n  ").is_empty());
    assert!(parse("\t\t").is_empty());
}

// ==================== Keyword Tests ====================

#[test]
fn test_parse_ignores_space_between_keywords() {
    let query = parse("    a      b    ");
    assert_eq!(query.tokens(), &[Token::keyword("a"), Token::keyword("b")]);
}

#[test]
fn test_parse_splits_on_newlines_and_tabs() {
    let query = parse("     lots of empty spaces   \n   \n  ");
    assert_eq!(query.tokens().len(), 4);

    let query = parse("first\tsecond\nthird");
    assert_eq!(query.keywords(), vec!["first", "second", "third"]);
}

#[test]
fn test_parse_keeps_punctuation() {
    let query = parse("a content! pre-lunch, mmmm");
    assert_eq!(
        query.tokens(),
        &[
            Token::keyword("a"),
            Token::keyword("content!"),
            Token::keyword("pre-lunch,"),
            Token::keyword("mmmm"),
        ]
    );
}

#[test]
fn test_parse_keeps_duplicates() {
    let query = parse("a a");
    assert_eq!(query.tokens(), &[Token::keyword("a"), Token::keyword("a")]);
}

#[test]
fn test_parse_preserves_keyword_case() {
    let query = parse("Jamás ESDRÚJULA");
    assert_eq!(query.keywords(), vec!["Jamás", "ESDRÚJULA"]);
}

// ==================== Tag Tests ====================

#[test]
fn test_parse_extracts_tags() {
    let query = parse("tag:a tag:b, keyword tag:pre-lunch");
    assert_eq!(
        query.tokens(),
        &[
            Token::tag("a"),
            Token::tag("b,"),
            Token::keyword("keyword"),
            Token::tag("pre-lunch"),
        ]
    );
}

#[test]
fn test_parse_keeps_empty_tags() {
    let query = parse("a b tag:a tag: tag:b");
    assert_eq!(
        query.tokens(),
        &[
            Token::keyword("a"),
            Token::keyword("b"),
            Token::tag("a"),
            Token::tag(""),
            Token::tag("b"),
        ]
    );
}

#[test]
fn test_keywords_and_tags_views() {
    let query = parse("a b tag:e tag: tag:f");
    assert_eq!(query.keywords(), vec!["a", "b"]);
    assert_eq!(query.tags(), vec!["e", "f"]);
}

#[test]
fn test_parse_operator_case_insensitive() {
    assert_eq!(parse("TAG:work").tokens(), &[Token::tag("work")]);
    assert_eq!(parse("TaG:work").tokens(), &[Token::tag("work")]);
}

#[test]
fn test_parse_tag_payload_keeps_case() {
    assert_eq!(parse("TAG:Work").tokens(), &[Token::tag("Work")]);
}

#[test]
fn test_parse_operator_inside_word_is_keyword() {
    assert_eq!(parse("mytag:x").tokens(), &[Token::keyword("mytag:x")]);
    assert_eq!(parse("tag").tokens(), &[Token::keyword("tag")]);
}

#[test]
fn test_parse_operator_only_yields_empty_tag() {
    let query = parse("tag:");
    assert_eq!(query.tokens(), &[Token::tag("")]);
    assert!(query.tags().is_empty());
    assert!(!query.is_empty());
    assert!(query.tokens()[0].is_empty_tag());
}

// ==================== Settings Tests ====================

#[test]
fn test_parse_localized_operator() {
    let settings = QuerySettings::new("tag:", "etiqueta:");
    let query = Query::new("ETIQUETA:x tag:y etiqueta:", &settings);
    assert_eq!(
        query.tokens(),
        &[Token::tag("x"), Token::tag("y"), Token::tag("")]
    );
}

#[test]
fn test_parse_primary_operator_wins() {
    // Both operators match "tag:x"; the primary strips the longer prefix.
    let settings = QuerySettings::new("tag:", "ta");
    assert_eq!(Query::new("tag:x", &settings).tokens(), &[Token::tag("x")]);

    let settings = QuerySettings::new("ta", "tag:");
    assert_eq!(Query::new("tag:x", &settings).tokens(), &[Token::tag("g:x")]);
}

#[test]
fn test_parse_empty_operator_matches_every_word() {
    let settings = QuerySettings::new("", "tag:");
    let query = Query::new("a tag:b", &settings);
    assert_eq!(query.tokens(), &[Token::tag("a"), Token::tag("tag:b")]);
}

#[test]
fn test_parser_tokenize_streams_tokens() {
    let settings = QuerySettings::default();
    let parser = QueryParser::new(&settings);
    let tokens: Vec<Token> = parser.tokenize("one tag:two").collect();
    assert_eq!(tokens, vec![Token::keyword("one"), Token::tag("two")]);
}

// ==================== Query Tests ====================

#[test]
fn test_query_equality_ignores_search_text() {
    let left = parse("a  b");
    let right = parse(" a b ");
    assert_ne!(left.search_text(), right.search_text());
    assert_eq!(left, right);
    assert_ne!(parse("a b"), parse("b a"));
}

#[test]
fn test_query_last_token() {
    assert_eq!(parse("").last_token(), None);
    assert_eq!(parse("a tag:b").last_token(), Some(&Token::tag("b")));
}

#[test]
fn test_query_keeps_search_text() {
    let query = parse("  a b \n");
    assert_eq!(query.search_text(), "  a b \n");
}

#[test]
fn test_parse_is_deterministic() {
    let text = "tag:a keyword tag:";
    assert_eq!(parse(text).tokens(), parse(text).tokens());
}

#[test]
fn test_token_accessors() {
    assert_eq!(Token::keyword("k").text(), "k");
    assert_eq!(Token::keyword("k").kind(), "keyword");
    assert_eq!(Token::tag("t").kind(), "tag");
    assert!(!Token::tag("t").is_empty_tag());
    assert!(!Token::keyword("").is_empty_tag());
}

#[test]
fn test_token_serializes_externally_tagged() {
    let json = serde_json::to_string(&Token::tag("work")).unwrap();
    assert_eq!(json, r#"{"tag":"work"}"#);
    let token: Token = serde_json::from_str(r#"{"keyword":"milk"}"#).unwrap();
    assert_eq!(token, Token::keyword("milk"));
}
