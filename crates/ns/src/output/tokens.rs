//! Parsed query output formatting.

use notesearch_rs::Query;
use owo_colors::OwoColorize;

/// Formats a parsed query as JSON.
pub fn format_tokens_json(query: &Query) -> Result<String, serde_json::Error> {
    let output = serde_json::json!({
        "search_text": query.search_text(),
        "tokens": query.tokens(),
        "keywords": query.keywords(),
        "tags": query.tags(),
    });
    serde_json::to_string_pretty(&output)
}

/// Formats a parsed query as a table.
pub fn format_tokens_table(query: &Query, use_colors: bool) -> String {
    if query.is_empty() {
        return "No tokens.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<4} {:<8} {}", "#", "Kind", "Text");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (index, token) in query.tokens().iter().enumerate() {
        let kind = token.kind();
        let line = if use_colors && kind == "tag" {
            format!("{:<4} {:<8} {}", index + 1, kind.cyan(), token.text())
        } else {
            format!("{:<4} {:<8} {}", index + 1, kind, token.text())
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
