//! Parse command implementation.
//!
//! Shows how a search text is tokenized with the current settings.

use notesearch_rs::Query;

use super::{CommandContext, Result};
use crate::output::{format_tokens_json, format_tokens_table};

/// Executes the parse command.
pub fn execute(ctx: &CommandContext, search_text: &str) -> Result<()> {
    let query = Query::new(search_text, &ctx.settings);

    if ctx.json_output {
        println!("{}", format_tokens_json(&query)?);
    } else if !ctx.quiet {
        print!("{}", format_tokens_table(&query, ctx.use_colors));
    }

    Ok(())
}
