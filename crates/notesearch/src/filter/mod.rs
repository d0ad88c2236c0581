//! Compiles search queries into record matchers.
//!
//! The compiler turns a [`Query`](crate::query::Query) (or one of the
//! single-purpose filters) into a [`Matcher`]: a backend-agnostic predicate
//! tree that can be evaluated in memory or walked by a storage adapter and
//! translated into native query syntax.
//!
//! Records are described by capability traits rather than concrete types:
//! notes implement [`SearchableNote`] and tags implement [`SearchableTag`].
//!
//! # Matching rules
//!
//! - Keywords match note content, ignoring case and diacritics.
//! - `tag:name` matches notes whose JSON-encoded tags array contains exactly
//!   `name`, ignoring case and diacritics.
//! - Tag autocompletion only looks at the last token typed.
//!
//! # Example
//!
//! ```
//! use notesearch_rs::filter::{compile_tag_filter_for_keyword, SearchableTag};
//! use notesearch_rs::query::QuerySettings;
//!
//! struct Tag(&'static str);
//!
//! impl SearchableTag for Tag {
//!     fn name(&self) -> Option<&str> {
//!         Some(self.0)
//!     }
//! }
//!
//! let settings = QuerySettings::default();
//! let matcher = compile_tag_filter_for_keyword("ignored tag:45", &settings);
//! assert!(matcher.evaluate(&Tag("123456789")));
//!
//! // Exact matches are already applied, so they are not suggested again.
//! let matcher = compile_tag_filter_for_keyword("tag:123456789", &settings);
//! assert!(!matcher.evaluate(&Tag("123456789")));
//! ```

mod compiler;
mod matcher;
mod predicate;
mod record;

pub use compiler::{
    compile_note_filter, compile_note_filter_for_text, compile_note_filter_with_defaults,
    compile_tag_filter, compile_tag_filter_for_keyword, deleted_filter, exact_content_filter,
    quoted_tag, system_tag_filter, tag_filter, title_filter, untagged_filter,
};
pub use matcher::{Matcher, NoteMatcher, TagMatcher};
pub use predicate::{Predicate, TextPattern};
pub use record::{Field, FieldSource, NoteField, SearchableNote, SearchableTag, TagField};
