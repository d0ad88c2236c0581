//! Text helpers shared by the query parser and the filter compiler.
//!
//! Folding follows the usual search-field conventions: a case-insensitive
//! comparison lowercases both sides, and a diacritic-insensitive comparison
//! decomposes both sides (NFD) and drops combining marks, so `jamás` and
//! `jamas` compare equal.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How two strings are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Comparison {
    /// Ignore letter case.
    pub case_insensitive: bool,
    /// Treat accented characters as their unaccented base form.
    pub diacritic_insensitive: bool,
}

impl Comparison {
    /// Byte-for-byte comparison.
    pub const EXACT: Comparison = Comparison {
        case_insensitive: false,
        diacritic_insensitive: false,
    };

    /// Case-insensitive, diacritic-sensitive comparison.
    pub const CASE_INSENSITIVE: Comparison = Comparison {
        case_insensitive: true,
        diacritic_insensitive: false,
    };

    /// Case- and diacritic-insensitive comparison.
    pub const FOLDED: Comparison = Comparison {
        case_insensitive: true,
        diacritic_insensitive: true,
    };

    /// Returns true if no folding is applied.
    pub fn is_exact(&self) -> bool {
        !self.case_insensitive && !self.diacritic_insensitive
    }
}

/// Folds `s` according to `comparison`.
///
/// A diacritic-insensitive comparison decomposes to NFD and drops combining
/// marks. Otherwise the text is recomposed to NFC, so an accented character
/// stays a single char and a substring match never ends between a base
/// letter and its mark. Either way precomposed and decomposed spellings of
/// the same character compare equal.
pub fn fold(s: &str, comparison: Comparison) -> Cow<'_, str> {
    if comparison.is_exact() {
        return Cow::Borrowed(s);
    }

    let cased: Cow<'_, str> = if comparison.case_insensitive {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    };

    if comparison.diacritic_insensitive {
        Cow::Owned(cased.nfd().filter(|c| !is_combining_mark(*c)).collect())
    } else {
        Cow::Owned(cased.nfc().collect())
    }
}

/// Returns the text up to (not including) the first `\n`, or all of `s`.
pub fn first_line(s: &str) -> &str {
    s.find('\n').map_or(s, |index| &s[..index])
}

/// Strips `prefix` from `word`, comparing case-insensitively.
///
/// The returned remainder keeps the original casing of `word`. An empty
/// prefix always matches and returns the whole word.
pub fn strip_prefix_ignore_case<'a>(word: &'a str, prefix: &str) -> Option<&'a str> {
    let mut expected = prefix.chars().flat_map(char::to_lowercase).peekable();

    for (index, ch) in word.char_indices() {
        if expected.peek().is_none() {
            return Some(&word[index..]);
        }
        for lower in ch.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }

    if expected.peek().is_none() {
        Some("")
    } else {
        None
    }
}

/// Returns the part of `s` after `prefix`, if `s` starts with it (case-sensitive).
pub fn suffix_after_prefix<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.strip_prefix(prefix)
}

/// Replaces the last space-separated word of `text` with `word`.
///
/// Words are separated by individual spaces or tabs (newlines are part of a
/// word). A trailing separator means the last word is empty, so `word` is
/// appended instead.
pub fn replace_last_word(text: &str, word: &str) -> String {
    let mut words: Vec<&str> = text.split(is_inline_whitespace).collect();
    words.pop();
    words.push(word);
    words.join(" ")
}

fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}
