//! In-memory evaluation of compiled predicates.
//!
//! # Example
//!
//! ```
//! use notesearch_rs::filter::{compile_note_filter, SearchableNote};
//! use notesearch_rs::query::Query;
//!
//! struct Note {
//!     content: String,
//! }
//!
//! impl SearchableNote for Note {
//!     fn content(&self) -> Option<&str> {
//!         Some(self.content.as_str())
//!     }
//!     fn deleted(&self) -> bool {
//!         false
//!     }
//!     fn system_tags(&self) -> Option<&str> {
//!         None
//!     }
//!     fn tags(&self) -> Option<&str> {
//!         None
//!     }
//! }
//!
//! let matcher = compile_note_filter(&Query::parse_default("jamas"));
//! let note = Note { content: "Jamás".to_string() };
//! assert!(matcher.evaluate(&note));
//! ```

use std::fmt;

use super::predicate::Predicate;
use super::record::{Field, FieldSource, NoteField, TagField};
use crate::text::first_line;

/// A reusable boolean test over records with fields `F`.
///
/// Matchers own only immutable data and can be shared across threads and
/// evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher<F> {
    predicate: Predicate<F>,
}

/// A matcher over note records.
pub type NoteMatcher = Matcher<NoteField>;

/// A matcher over tag records.
pub type TagMatcher = Matcher<TagField>;

impl<F: Field> Matcher<F> {
    /// Wraps a predicate.
    pub fn new(predicate: Predicate<F>) -> Self {
        Self { predicate }
    }

    /// A matcher that accepts every record.
    pub fn always() -> Self {
        Self::new(Predicate::always())
    }

    /// The predicate tree, for backends that translate it natively.
    pub fn predicate(&self) -> &Predicate<F> {
        &self.predicate
    }

    /// Consumes the matcher and returns its predicate tree.
    pub fn into_predicate(self) -> Predicate<F> {
        self.predicate
    }

    /// Combines two matchers with AND, flattening nested conjunctions.
    pub fn and(self, other: Matcher<F>) -> Self {
        let mut predicates = Vec::new();
        for predicate in [self.predicate, other.predicate] {
            match predicate {
                Predicate::And(inner) => predicates.extend(inner),
                single => predicates.push(single),
            }
        }
        Self::new(Predicate::And(predicates))
    }

    /// Returns true if `record` matches.
    pub fn evaluate<R: FieldSource<F> + ?Sized>(&self, record: &R) -> bool {
        evaluate_predicate(&self.predicate, record)
    }

    /// Returns the records that match, in their original order.
    pub fn filter<'r, R: FieldSource<F>>(&self, records: &'r [R]) -> Vec<&'r R> {
        records
            .iter()
            .filter(|record| self.evaluate(*record))
            .collect()
    }
}

impl<F: Field> From<Predicate<F>> for Matcher<F> {
    fn from(predicate: Predicate<F>) -> Self {
        Self::new(predicate)
    }
}

impl<F: Field> fmt::Display for Matcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.predicate, f)
    }
}

/// Evaluates a predicate against a record.
///
/// A text field the record does not have never matches a text test.
fn evaluate_predicate<F, R>(predicate: &Predicate<F>, record: &R) -> bool
where
    F: Field,
    R: FieldSource<F> + ?Sized,
{
    match predicate {
        Predicate::Constant(value) => *value,
        Predicate::Flag { field, value } => record.flag(*field) == Some(*value),
        Predicate::Contains { field, pattern } => record
            .text(*field)
            .is_some_and(|text| pattern.is_contained_in(text)),
        Predicate::Equals { field, pattern } => record
            .text(*field)
            .is_some_and(|text| pattern.is_equal_to(text)),
        Predicate::FirstLineContains { field, pattern } => record
            .text(*field)
            .is_some_and(|text| pattern.is_contained_in(first_line(text))),
        Predicate::FullMatch { field, regex } => {
            record.text(*field).is_some_and(|text| regex.is_match(text))
        }
        Predicate::And(predicates) => predicates
            .iter()
            .all(|predicate| evaluate_predicate(predicate, record)),
        Predicate::Not(inner) => !evaluate_predicate(inner, record),
    }
}
