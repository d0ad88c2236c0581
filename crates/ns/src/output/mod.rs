//! Output formatting utilities for the ns CLI.
//!
//! This module provides functions for formatting results as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`notes`] - Note search results
//! - [`tags`] - Tag suggestions
//! - [`tokens`] - Parsed query tokens
//! - [`helpers`] - Common formatting utilities (truncation)

pub mod helpers;
mod notes;
mod tags;
mod tokens;

pub use notes::{format_notes_json, format_notes_table};
pub use tags::{format_tags_json, format_tags_table};
pub use tokens::{format_tokens_json, format_tokens_table};
