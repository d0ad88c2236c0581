//! Tag-operator configuration for the query parser.

use serde::{Deserialize, Serialize};

/// The operator recognized when no localized variant is configured.
pub const DEFAULT_TAG_OPERATOR: &str = "tag:";

/// Settings that control how search text is tokenized.
///
/// Both operators are compared case-insensitively against the start of each
/// word; `tag_operator` is checked first. An empty operator matches every
/// word, so callers must not configure one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    /// The primary tag operator, e.g. `tag:`.
    pub tag_operator: String,

    /// An alternate, usually translated, tag operator.
    pub localized_tag_operator: String,
}

impl QuerySettings {
    /// Creates settings with a primary and a localized tag operator.
    pub fn new(tag_operator: impl Into<String>, localized_tag_operator: impl Into<String>) -> Self {
        Self {
            tag_operator: tag_operator.into(),
            localized_tag_operator: localized_tag_operator.into(),
        }
    }

    /// Returns the operators in the order they are checked.
    pub fn operators(&self) -> [&str; 2] {
        [
            self.tag_operator.as_str(),
            self.localized_tag_operator.as_str(),
        ]
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_OPERATOR, DEFAULT_TAG_OPERATOR)
    }
}
