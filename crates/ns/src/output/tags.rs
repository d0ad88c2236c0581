//! Tag suggestion output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::records::TagRecord;

/// JSON output structure for the tags command.
#[derive(Serialize)]
pub struct TagsOutput<'a> {
    pub suggestions: Vec<&'a str>,
}

/// Formats tag suggestions as JSON.
pub fn format_tags_json(tags: &[&TagRecord]) -> Result<String, serde_json::Error> {
    let output = TagsOutput {
        suggestions: tags.iter().filter_map(|t| t.name.as_deref()).collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats tag suggestions, one per line.
pub fn format_tags_table(tags: &[&TagRecord], operator: &str, use_colors: bool) -> String {
    if tags.is_empty() {
        return "No tags found.\n".to_string();
    }

    let mut output = String::new();
    for name in tags.iter().filter_map(|t| t.name.as_deref()) {
        if use_colors {
            output.push_str(&format!("{}{}\n", operator.dimmed(), name.cyan()));
        } else {
            output.push_str(&format!("{operator}{name}\n"));
        }
    }
    output
}
