//! Text normalization for garment names and attribute keywords.
//! Handles transliteration, punctuation stripping and tokenization.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Tokens of this length or shorter never count as significant.
pub const MAX_INSIGNIFICANT_TOKEN_LEN: usize = 2;

/// Keywords shorter than this must match a whole token instead of a substring
/// ("tee" must not fire on "steel").
const MIN_SUBSTRING_KEYWORD_LEN: usize = 5;

/// Normalize a garment name for comparison.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters (Tişört → Tisort) via deunicode
/// 2. Strip non-alphanumeric symbols (keep spaces)
/// 3. Lowercase
/// 4. Collapse and trim whitespace
pub fn normalize_name(text: &str) -> String {
    let latin = deunicode(text);
    let clean = RE_NON_ALNUM.replace_all(&latin, " ");
    clean
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-free variant of [`normalize_name`] ("T-Shirt" → "tshirt").
pub fn compact_name(text: &str) -> String {
    normalize_name(text).replace(' ', "")
}

/// Significant tokens (longer than two characters), deduplicated in order of
/// first appearance.
pub fn significant_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in normalize_name(text).split_whitespace() {
        if token.len() <= MAX_INSIGNIFICANT_TOKEN_LEN {
            continue;
        }
        if !tokens.iter().any(|existing| existing == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Check whether already-normalized `text` contains a keyword.
///
/// Long keywords match as a substring of the compact form, so "shirt" fires on
/// "t shirt" and "sweatshirt" alike. Short keywords must equal a whole token
/// (optionally with a plural `s`).
pub fn contains_keyword(normalized_text: &str, keyword: &str) -> bool {
    let keyword_compact = keyword.replace(' ', "");
    if keyword_compact.is_empty() {
        return false;
    }

    if keyword_compact.len() >= MIN_SUBSTRING_KEYWORD_LEN || keyword.contains(' ') {
        return normalized_text.replace(' ', "").contains(&keyword_compact);
    }

    normalized_text.split_whitespace().any(|token| {
        token == keyword_compact
            || token
                .strip_suffix('s')
                .is_some_and(|stem| stem == keyword_compact)
    })
}

/// True when any keyword in the list matches.
pub fn contains_any_keyword(normalized_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| contains_keyword(normalized_text, keyword))
}

/// Normalize the joined non-empty parts of an optional-field list.
pub fn normalize_parts(parts: &[Option<&str>]) -> String {
    let joined = parts
        .iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    normalize_name(&joined)
}

#[cfg(test)]
#[path = "../tests/core/normalizer_tests.rs"]
mod tests;
