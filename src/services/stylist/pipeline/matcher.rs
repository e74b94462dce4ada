//! Name resolution cascade.
//!
//! Maps an item name proposed by the external model back onto exactly one
//! wardrobe item. Strategies run from strictest to loosest; the first that
//! finds a unique item wins. A strategy that matches several items yields no
//! match and the cascade moves on.

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::{compact_name, normalize_name, significant_tokens};
use crate::services::stylist::models::types::MatchStrategy;

/// Minimum compact length for substring containment (avoids false positives like "ao").
const MIN_TERM_LEN: usize = 3;
/// Share of significant tokens that must overlap for a keyword match.
pub const KEYWORD_OVERLAP_THRESHOLD: f32 = 0.6;
/// Minimum edit-similarity lead that separates two equally overlapping names.
pub const SIMILARITY_TIE_MARGIN: f64 = 0.1;

pub type MatchFn = for<'a> fn(&str, &'a [WardrobeItem]) -> Option<&'a WardrobeItem>;

/// Ordered cascade of name-matching strategies.
pub const MATCH_CASCADE: &[(MatchStrategy, MatchFn)] = &[
    (MatchStrategy::Exact, match_exact),
    (MatchStrategy::Normalized, match_normalized),
    (MatchStrategy::Compact, match_compact),
    (MatchStrategy::Substring, match_substring),
    (MatchStrategy::KeywordOverlap, match_keyword_overlap),
];

/// The single item satisfying `predicate`, or None when zero or several do.
fn unique_match<'a>(
    items: &'a [WardrobeItem],
    predicate: impl Fn(&WardrobeItem) -> bool,
) -> Option<&'a WardrobeItem> {
    let mut found: Option<&'a WardrobeItem> = None;
    for item in items {
        if predicate(item) {
            if found.is_some() {
                return None;
            }
            found = Some(item);
        }
    }
    found
}

/// Case-insensitive equality of the trimmed names.
pub fn match_exact<'a>(name: &str, items: &'a [WardrobeItem]) -> Option<&'a WardrobeItem> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    unique_match(items, |item| item.name.trim().to_lowercase() == wanted)
}

/// Equality after transliteration and punctuation stripping.
pub fn match_normalized<'a>(name: &str, items: &'a [WardrobeItem]) -> Option<&'a WardrobeItem> {
    let wanted = normalize_name(name);
    if wanted.is_empty() {
        return None;
    }
    unique_match(items, |item| normalize_name(&item.name) == wanted)
}

/// Equality of the whitespace-free forms ("T Shirt" vs "T-Shirt" vs "Tshirt").
pub fn match_compact<'a>(name: &str, items: &'a [WardrobeItem]) -> Option<&'a WardrobeItem> {
    let wanted = compact_name(name);
    if wanted.is_empty() {
        return None;
    }
    unique_match(items, |item| compact_name(&item.name) == wanted)
}

/// Containment of the compact forms in either direction.
pub fn match_substring<'a>(name: &str, items: &'a [WardrobeItem]) -> Option<&'a WardrobeItem> {
    let wanted = compact_name(name);
    if wanted.len() < MIN_TERM_LEN {
        return None;
    }
    unique_match(items, |item| {
        let stored = compact_name(&item.name);
        stored.len() >= MIN_TERM_LEN && (stored.contains(&wanted) || wanted.contains(&stored))
    })
}

/// Share of significant tokens two names have in common, relative to the
/// shorter token list.
pub fn token_overlap(a: &[String], b: &[String]) -> f32 {
    let shorter = a.len().min(b.len());
    if shorter == 0 {
        return 0.0;
    }
    let shared = a.iter().filter(|token| b.contains(token)).count();
    shared as f32 / shorter as f32
}

/// Best item by significant-token overlap at or above
/// [`KEYWORD_OVERLAP_THRESHOLD`]. Equal overlaps are broken by edit
/// similarity of the normalized names; when the two closest names are within
/// [`SIMILARITY_TIE_MARGIN`] of each other the match is ambiguous.
pub fn match_keyword_overlap<'a>(
    name: &str,
    items: &'a [WardrobeItem],
) -> Option<&'a WardrobeItem> {
    let wanted_tokens = significant_tokens(name);
    if wanted_tokens.is_empty() {
        return None;
    }
    let wanted_norm = normalize_name(name);

    let mut scored: Vec<(&'a WardrobeItem, f32, f64)> = items
        .iter()
        .filter_map(|item| {
            let ratio = token_overlap(&wanted_tokens, &significant_tokens(&item.name));
            if ratio < KEYWORD_OVERLAP_THRESHOLD {
                return None;
            }
            let similarity =
                strsim::normalized_levenshtein(&wanted_norm, &normalize_name(&item.name));
            Some((item, ratio, similarity))
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| b.2.total_cmp(&a.2))
    });

    match scored.as_slice() {
        [] => None,
        [(item, ..)] => Some(*item),
        [(item, ratio, similarity), (_, next_ratio, next_similarity), ..] => {
            if ratio == next_ratio && similarity - next_similarity < SIMILARITY_TIE_MARGIN {
                log::debug!("Keyword overlap for '{}' is ambiguous", name);
                None
            } else {
                Some(*item)
            }
        }
    }
}

/// Run the cascade and report which strategy resolved the name.
pub fn resolve_name<'a>(
    name: &str,
    items: &'a [WardrobeItem],
) -> Option<(&'a WardrobeItem, MatchStrategy)> {
    for (strategy, matcher) in MATCH_CASCADE {
        if let Some(item) = matcher(name, items) {
            log::debug!("Resolved '{}' to '{}' via {:?}", name, item.name, strategy);
            return Some((item, *strategy));
        }
    }
    log::debug!("No wardrobe item matches '{}'", name);
    None
}

#[cfg(test)]
#[path = "../tests/pipeline/matcher_tests.rs"]
mod tests;
