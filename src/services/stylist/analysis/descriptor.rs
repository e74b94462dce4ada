//! Item descriptor: natural-language phrase for prompts plus the normalized
//! name forms used by the matcher.

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::{compact_name, normalize_name};

/// Normalized name forms of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Lowercased, transliterated, punctuation stripped, whitespace collapsed.
    pub normalized: String,
    /// `normalized` with all whitespace removed.
    pub compact: String,
}

pub fn normalized_name(item: &WardrobeItem) -> NormalizedName {
    NormalizedName {
        normalized: normalize_name(&item.name),
        compact: compact_name(&item.name),
    }
}

/// Describe an item for an LLM prompt or an image-generation request.
///
/// Missing or blank attributes are left out entirely:
/// `Beyaz Tişört: light white cotton striped t-shirt, slim fit, crew neckline`.
pub fn describe_item(item: &WardrobeItem) -> String {
    let mut head: Vec<String> = Vec::new();
    push_field(&mut head, item.color_tone.as_deref());
    match (present(item.primary_color.as_deref()), present(item.secondary_color.as_deref())) {
        (Some(primary), Some(secondary)) => head.push(format!("{primary} and {secondary}")),
        (Some(primary), None) => head.push(primary.to_string()),
        (None, Some(secondary)) => head.push(secondary.to_string()),
        (None, None) => {}
    }
    push_field(&mut head, item.material.as_deref());
    push_field(
        &mut head,
        present(item.pattern_type.as_deref()).or(present(item.pattern.as_deref())),
    );
    let kind = present(item.subcategory.as_deref())
        .or(present(Some(item.category.as_str())))
        .map(str::to_lowercase);
    if let Some(kind) = kind {
        head.push(kind);
    }

    let mut details: Vec<String> = Vec::new();
    push_labeled(&mut details, item.fit.as_deref(), "fit");
    push_labeled(&mut details, item.neckline.as_deref(), "neckline");
    push_labeled(&mut details, item.collar.as_deref(), "collar");
    push_labeled(&mut details, item.sleeve.as_deref(), "sleeves");
    push_labeled(&mut details, item.closure.as_deref(), "closure");
    push_labeled(&mut details, item.pocket_style.as_deref(), "pockets");
    push_labeled(&mut details, item.waist_style.as_deref(), "waist");

    let design: Vec<&str> = item
        .design_details
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    if !design.is_empty() {
        details.push(format!("details: {}", design.join(", ")));
    }

    let mut description = item.name.trim().to_string();
    if !head.is_empty() {
        if description.is_empty() {
            description = head.join(" ");
        } else {
            description = format!("{description}: {}", head.join(" "));
        }
    }
    if !details.is_empty() {
        description = format!("{description}, {}", details.join(", "));
    }
    description
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn push_field(parts: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = present(value) {
        parts.push(value.to_string());
    }
}

fn push_labeled(parts: &mut Vec<String>, value: Option<&str>, label: &str) {
    if let Some(value) = present(value) {
        parts.push(format!("{value} {label}"));
    }
}

#[cfg(test)]
#[path = "../tests/analysis/descriptor_tests.rs"]
mod tests;
