//! Note output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_tag_list, truncate_str};
use crate::records::NoteRecord;

/// Maximum title width in table output.
const TITLE_WIDTH: usize = 40;

/// JSON output structure for the notes command.
#[derive(Serialize)]
pub struct NotesOutput<'a> {
    pub filter: String,
    pub total: usize,
    pub notes: &'a [&'a NoteRecord],
}

/// Formats matched notes as JSON.
pub fn format_notes_json(
    notes: &[&NoteRecord],
    total: usize,
    filter: &str,
) -> Result<String, serde_json::Error> {
    let output = NotesOutput {
        filter: filter.to_string(),
        total,
        notes,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats matched notes as a table.
pub fn format_notes_table(notes: &[&NoteRecord], total: usize, use_colors: bool) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<8} {:<40} {}", "ID", "Title", "Tags");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for note in notes {
        let id = truncate_str(note.id.as_deref().unwrap_or("-"), 8);
        let title = truncate_str(note.title(), TITLE_WIDTH);
        let tags = format_tag_list(note.tags.as_deref());

        let line = if use_colors {
            format!("{:<8} {:<40} {}", id.dimmed(), title.bold(), tags.cyan())
        } else {
            format!("{:<8} {:<40} {}", id, title, tags)
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }

    if notes.len() < total {
        output.push_str(&format!("\n{} of {} notes shown\n", notes.len(), total));
    }

    output
}
