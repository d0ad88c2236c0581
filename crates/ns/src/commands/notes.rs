//! Notes command implementation.
//!
//! Searches a JSON export of notes with a search text plus optional filters.

use std::path::PathBuf;

use notesearch_rs::filter::{
    compile_note_filter, deleted_filter, exact_content_filter, system_tag_filter, tag_filter,
    title_filter, untagged_filter, NoteMatcher,
};
use notesearch_rs::{Query, QuerySettings};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_notes_json, format_notes_table};
use crate::records::load_notes;

/// Options for the notes command.
#[derive(Debug, Default)]
pub struct NotesOptions {
    /// JSON file with the notes.
    pub file: PathBuf,
    /// Search text.
    pub query: String,
    /// Search the trash instead of live notes.
    pub deleted: bool,
    /// Only notes without tags.
    pub untagged: bool,
    /// Only notes with this exact tag.
    pub tag: Option<String>,
    /// Only notes with this system tag.
    pub system_tag: Option<String>,
    /// Only notes whose title contains this text.
    pub title: Option<String>,
    /// Only notes containing this text verbatim.
    pub exact: Option<String>,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the notes command.
///
/// # Errors
///
/// Returns an error if the notes file cannot be read or parsed.
pub fn execute(ctx: &CommandContext, opts: &NotesOptions) -> Result<()> {
    let notes = load_notes(&opts.file)?;
    let matcher = build_matcher(opts, &ctx.settings);
    debug!(filter = %matcher, "searching notes");

    let matched = matcher.filter(&notes);
    let total = matched.len();
    let shown = match opts.limit {
        Some(limit) => &matched[..limit.min(total)],
        None => &matched[..],
    };

    if ctx.json_output {
        let output = format_notes_json(shown, total, &matcher.to_string())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_notes_table(shown, total, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Combines the search text and every requested filter with AND.
pub fn build_matcher(opts: &NotesOptions, settings: &QuerySettings) -> NoteMatcher {
    let query = Query::new(&opts.query, settings);
    let mut matcher = compile_note_filter(&query).and(deleted_filter(opts.deleted));

    if opts.untagged {
        matcher = matcher.and(untagged_filter());
    }
    if let Some(tag) = &opts.tag {
        matcher = matcher.and(tag_filter(tag));
    }
    if let Some(system_tag) = &opts.system_tag {
        matcher = matcher.and(system_tag_filter(system_tag));
    }
    if let Some(title) = &opts.title {
        matcher = matcher.and(title_filter(title));
    }
    if let Some(exact) = &opts.exact {
        matcher = matcher.and(exact_content_filter(exact));
    }

    matcher
}
