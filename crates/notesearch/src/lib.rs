//! Search query parsing and note/tag filter compilation.
//!
//! This crate turns free-form search text into a structured [`Query`] and
//! compiles it into [`Matcher`]s that test note and tag records.
//!
//! - [`query`] tokenizes search text into keywords and `tag:` references.
//! - [`filter`] compiles queries and single-purpose filters (deleted,
//!   untagged, title, autocomplete) into predicate trees.
//! - [`text`] holds the case/diacritic folding and word helpers both use.
//!
//! Nothing here fails: every input yields a query or a matcher.
//!
//! # Example
//!
//! ```
//! use notesearch_rs::{compile_note_filter, Query, QuerySettings, SearchableNote};
//!
//! struct Note {
//!     content: &'static str,
//!     tags: &'static str,
//! }
//!
//! impl SearchableNote for Note {
//!     fn content(&self) -> Option<&str> {
//!         Some(self.content)
//!     }
//!     fn deleted(&self) -> bool {
//!         false
//!     }
//!     fn system_tags(&self) -> Option<&str> {
//!         None
//!     }
//!     fn tags(&self) -> Option<&str> {
//!         Some(self.tags)
//!     }
//! }
//!
//! let query = Query::new("else something tag:keyword", &QuerySettings::default());
//! let matcher = compile_note_filter(&query);
//!
//! let note = Note {
//!     content: "something else",
//!     tags: r#"[ "keyword" ]"#,
//! };
//! assert!(matcher.evaluate(&note));
//! ```

pub mod filter;
pub mod query;
pub mod text;

pub use filter::{
    compile_note_filter, compile_note_filter_for_text, compile_note_filter_with_defaults,
    compile_tag_filter, compile_tag_filter_for_keyword, Matcher, NoteMatcher, Predicate,
    SearchableNote, SearchableTag, TagMatcher,
};
pub use query::{Query, QueryParser, QuerySettings, Token};
pub use text::Comparison;
