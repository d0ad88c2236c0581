//! Predicate tree produced by the filter compiler.
//!
//! Each variant is a shape a storage backend can translate into a native
//! query (a `LIKE`, an equality, a regex match, a conjunction). The same tree
//! is evaluated in memory by [`Matcher`](super::Matcher).

use std::fmt;

use regex::Regex;

use super::record::Field;
use crate::text::{fold, Comparison};

/// A string operand together with how it is compared.
///
/// The folded form is computed once, when the pattern is built.
#[derive(Debug, Clone)]
pub struct TextPattern {
    value: String,
    comparison: Comparison,
    folded: String,
}

impl TextPattern {
    /// Creates a pattern for `value` compared with `comparison`.
    pub fn new(value: impl Into<String>, comparison: Comparison) -> Self {
        let value = value.into();
        let folded = fold(&value, comparison).into_owned();
        Self {
            value,
            comparison,
            folded,
        }
    }

    /// The operand as given to the compiler.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// How the operand is compared.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns true if `haystack` contains the operand.
    pub fn is_contained_in(&self, haystack: &str) -> bool {
        fold(haystack, self.comparison).contains(self.folded.as_str())
    }

    /// Returns true if `other` equals the operand.
    pub fn is_equal_to(&self, other: &str) -> bool {
        fold(other, self.comparison) == self.folded.as_str()
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.comparison == other.comparison
    }
}

impl Eq for TextPattern {}

/// A boolean test over the fields `F` of a single record.
#[derive(Debug, Clone)]
pub enum Predicate<F> {
    /// Always (or never) matches.
    Constant(bool),

    /// A boolean field equals `value`.
    Flag {
        /// The boolean field.
        field: F,
        /// The expected value.
        value: bool,
    },

    /// A text field contains the pattern.
    Contains {
        /// The text field.
        field: F,
        /// The substring to look for.
        pattern: TextPattern,
    },

    /// A text field equals the pattern.
    Equals {
        /// The text field.
        field: F,
        /// The expected value.
        pattern: TextPattern,
    },

    /// The first line of a text field contains the pattern.
    FirstLineContains {
        /// The text field.
        field: F,
        /// The substring to look for.
        pattern: TextPattern,
    },

    /// The whole text field matches the regex.
    FullMatch {
        /// The text field.
        field: F,
        /// An anchored regular expression.
        regex: Regex,
    },

    /// All sub-predicates match. An empty conjunction matches.
    And(Vec<Predicate<F>>),

    /// The sub-predicate does not match.
    Not(Box<Predicate<F>>),
}

impl<F> Predicate<F> {
    /// The always-true predicate.
    pub fn always() -> Self {
        Predicate::Constant(true)
    }

    /// Creates a conjunction.
    pub fn and(predicates: Vec<Predicate<F>>) -> Self {
        Predicate::And(predicates)
    }

    /// Creates a negation.
    pub fn negate(inner: Predicate<F>) -> Self {
        Predicate::Not(Box::new(inner))
    }

    /// Creates a substring test.
    pub fn contains(field: F, value: impl Into<String>, comparison: Comparison) -> Self {
        Predicate::Contains {
            field,
            pattern: TextPattern::new(value, comparison),
        }
    }

    /// Creates an equality test.
    pub fn equals(field: F, value: impl Into<String>, comparison: Comparison) -> Self {
        Predicate::Equals {
            field,
            pattern: TextPattern::new(value, comparison),
        }
    }
}

impl<F: PartialEq> PartialEq for Predicate<F> {
    fn eq(&self, other: &Self) -> bool {
        use Predicate::*;

        match (self, other) {
            (Constant(a), Constant(b)) => a == b,
            (Flag { field: fa, value: va }, Flag { field: fb, value: vb }) => fa == fb && va == vb,
            (Contains { field: fa, pattern: pa }, Contains { field: fb, pattern: pb })
            | (Equals { field: fa, pattern: pa }, Equals { field: fb, pattern: pb })
            | (
                FirstLineContains { field: fa, pattern: pa },
                FirstLineContains { field: fb, pattern: pb },
            ) => fa == fb && pa == pb,
            (FullMatch { field: fa, regex: ra }, FullMatch { field: fb, regex: rb }) => {
                fa == fb && ra.as_str() == rb.as_str()
            }
            (And(a), And(b)) => a == b,
            (Not(a), Not(b)) => a == b,
            _ => false,
        }
    }
}

/// Renders the comparison flags the way predicate languages usually do:
/// `[c]` for case-insensitive, `[d]` for diacritic-insensitive.
fn flags(comparison: Comparison) -> &'static str {
    match (comparison.case_insensitive, comparison.diacritic_insensitive) {
        (false, false) => "",
        (true, false) => "[c]",
        (false, true) => "[d]",
        (true, true) => "[cd]",
    }
}

impl<F: Field> fmt::Display for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Constant(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            Predicate::Flag { field, value } => write!(f, "{} == {}", field.name(), value),
            Predicate::Contains { field, pattern } => write!(
                f,
                "{} CONTAINS{} {:?}",
                field.name(),
                flags(pattern.comparison()),
                pattern.value()
            ),
            Predicate::Equals { field, pattern } => write!(
                f,
                "{} =={} {:?}",
                field.name(),
                flags(pattern.comparison()),
                pattern.value()
            ),
            Predicate::FirstLineContains { field, pattern } => write!(
                f,
                "firstLine({}) CONTAINS{} {:?}",
                field.name(),
                flags(pattern.comparison()),
                pattern.value()
            ),
            Predicate::FullMatch { field, regex } => {
                write!(f, "{} MATCHES {:?}", field.name(), regex.as_str())
            }
            Predicate::And(predicates) => {
                if predicates.is_empty() {
                    return write!(f, "TRUE");
                }
                write!(f, "(")?;
                for (index, predicate) in predicates.iter().enumerate() {
                    if index > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{predicate}")?;
                }
                write!(f, ")")
            }
            Predicate::Not(inner) => write!(f, "NOT {inner}"),
        }
    }
}
