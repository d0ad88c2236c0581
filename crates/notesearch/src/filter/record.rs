//! Record capabilities the compiled matchers read from.
//!
//! The compiler never sees a concrete storage type. Anything that exposes the
//! fields of a note ([`SearchableNote`]) or a tag ([`SearchableTag`]) can be
//! matched.

use std::fmt::Debug;

use serde::Serialize;

/// The fields a note-like record must expose.
pub trait SearchableNote {
    /// The note body. The first line doubles as the title.
    fn content(&self) -> Option<&str>;

    /// Whether the note is in the trash.
    fn deleted(&self) -> bool;

    /// Internal markers such as `pinned` or `markdown`.
    fn system_tags(&self) -> Option<&str>;

    /// The user's tags, as a JSON-array-encoded string (`["a", "b"]`).
    fn tags(&self) -> Option<&str>;
}

/// The fields a tag-like record must expose.
pub trait SearchableTag {
    /// The tag name.
    fn name(&self) -> Option<&str>;
}

/// A field a predicate can refer to.
pub trait Field: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// The field name, as a storage backend would spell it.
    fn name(&self) -> &'static str;
}

/// Note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteField {
    Content,
    Deleted,
    SystemTags,
    Tags,
}

impl Field for NoteField {
    fn name(&self) -> &'static str {
        match self {
            NoteField::Content => "content",
            NoteField::Deleted => "deleted",
            NoteField::SystemTags => "system_tags",
            NoteField::Tags => "tags",
        }
    }
}

/// Tag fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagField {
    Name,
}

impl Field for TagField {
    fn name(&self) -> &'static str {
        match self {
            TagField::Name => "name",
        }
    }
}

/// Field lookup used by the evaluator.
///
/// Implemented for every [`SearchableNote`] over [`NoteField`] and every
/// [`SearchableTag`] over [`TagField`].
pub trait FieldSource<F: Field> {
    /// Returns a text field, or `None` if the record has no value for it.
    fn text(&self, field: F) -> Option<&str>;

    /// Returns a boolean field, or `None` if `field` is not boolean.
    fn flag(&self, field: F) -> Option<bool>;
}

impl<T: SearchableNote + ?Sized> FieldSource<NoteField> for T {
    fn text(&self, field: NoteField) -> Option<&str> {
        match field {
            NoteField::Content => self.content(),
            NoteField::SystemTags => self.system_tags(),
            NoteField::Tags => self.tags(),
            NoteField::Deleted => None,
        }
    }

    fn flag(&self, field: NoteField) -> Option<bool> {
        match field {
            NoteField::Deleted => Some(self.deleted()),
            NoteField::Content | NoteField::SystemTags | NoteField::Tags => None,
        }
    }
}

impl<T: SearchableTag + ?Sized> FieldSource<TagField> for T {
    fn text(&self, field: TagField) -> Option<&str> {
        match field {
            TagField::Name => self.name(),
        }
    }

    fn flag(&self, _field: TagField) -> Option<bool> {
        None
    }
}
