//! Common helper functions for output formatting.

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Renders a JSON-encoded tags string as a space-separated list.
///
/// Falls back to the raw string when it is not a JSON array of strings.
pub fn format_tag_list(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => tags.join(" "),
        Err(_) => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short() {
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_truncate_str_long() {
        assert_eq!(truncate_str("a very long title", 10), "a very ...");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("esdrújula esdrújula", 8), "esdrú...");
    }

    #[test]
    fn test_format_tag_list() {
        assert_eq!(format_tag_list(Some(r#"["a", "b"]"#)), "a b");
        assert_eq!(format_tag_list(Some("[]")), "");
        assert_eq!(format_tag_list(Some("null")), "null");
        assert_eq!(format_tag_list(None), "");
    }
}
