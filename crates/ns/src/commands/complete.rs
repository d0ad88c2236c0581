//! Complete command implementation.
//!
//! Accepts an autocomplete suggestion by replacing the last word of the
//! search text.

use notesearch_rs::text::replace_last_word;
use notesearch_rs::QuerySettings;

use super::{CommandContext, Result};

/// Returns `search_text` with its last word replaced by `word`.
///
/// With `as_tag`, the primary tag operator is prepended to `word`.
pub fn completed_text(
    search_text: &str,
    word: &str,
    as_tag: bool,
    settings: &QuerySettings,
) -> String {
    if as_tag {
        replace_last_word(search_text, &format!("{}{}", settings.tag_operator, word))
    } else {
        replace_last_word(search_text, word)
    }
}

/// Executes the complete command.
pub fn execute(ctx: &CommandContext, search_text: &str, word: &str, as_tag: bool) -> Result<()> {
    let completed = completed_text(search_text, word, as_tag, &ctx.settings);

    if ctx.json_output {
        let output = serde_json::json!({ "search_text": completed });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("{completed}");
    }

    Ok(())
}
