//! Tags command implementation.
//!
//! Suggests tags for the last word of a search text.

use std::path::PathBuf;

use notesearch_rs::compile_tag_filter_for_keyword;

use super::{CommandContext, Result};
use crate::output::{format_tags_json, format_tags_table};
use crate::records::load_tags;

/// Options for the tags command.
#[derive(Debug, Default)]
pub struct TagsOptions {
    /// JSON file with the tags.
    pub file: PathBuf,
    /// Search text being typed.
    pub query: String,
    /// Limit results.
    pub limit: Option<usize>,
}

/// Executes the tags command.
///
/// # Errors
///
/// Returns an error if the tags file cannot be read or parsed.
pub fn execute(ctx: &CommandContext, opts: &TagsOptions) -> Result<()> {
    let tags = load_tags(&opts.file)?;
    let matcher = compile_tag_filter_for_keyword(&opts.query, &ctx.settings);

    let mut suggestions = matcher.filter(&tags);
    if let Some(limit) = opts.limit {
        suggestions.truncate(limit);
    }

    if ctx.json_output {
        let output = format_tags_json(&suggestions)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output =
            format_tags_table(&suggestions, &ctx.settings.tag_operator, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
