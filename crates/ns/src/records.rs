//! Note and tag records loaded from JSON exports.

use std::fs;
use std::path::Path;

use notesearch_rs::{SearchableNote, SearchableTag};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::{CommandError, Result};

/// A note as exported to JSON.
///
/// `tags` and `system_tags` hold the raw JSON-array-encoded strings, exactly
/// as the storage layer keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub system_tags: Option<String>,

    #[serde(default)]
    pub tags: Option<String>,
}

impl NoteRecord {
    /// The first line of the content, used as the note title.
    pub fn title(&self) -> &str {
        self.content
            .as_deref()
            .map(notesearch_rs::text::first_line)
            .unwrap_or_default()
    }
}

impl SearchableNote for NoteRecord {
    fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn deleted(&self) -> bool {
        self.deleted
    }

    fn system_tags(&self) -> Option<&str> {
        self.system_tags.as_deref()
    }

    fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }
}

/// A tag as exported to JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchableTag for TagRecord {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Loads a JSON array of notes.
pub fn load_notes(path: &Path) -> Result<Vec<NoteRecord>> {
    load_records(path)
}

/// Loads a JSON array of tags.
pub fn load_tags(path: &Path) -> Result<Vec<TagRecord>> {
    load_records(path)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CommandError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let records: Vec<T> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}
