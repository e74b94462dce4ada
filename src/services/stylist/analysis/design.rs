//! Design coordination heuristic: per-item formality and outfit-level
//! construction checks.

use serde::{Deserialize, Serialize};

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::{contains_keyword, normalize_name};

pub const BASE_FORMALITY: i32 = 5;
pub const MIN_FORMALITY: u8 = 1;
pub const MAX_FORMALITY: u8 = 10;

/// (keyword, formality delta) for necklines and collars.
const NECKLINE_WEIGHTS: &[(&str, i32)] = &[
    ("shirt collar", 2),
    ("button down", 1),
    ("spread", 2),
    ("wing", 2),
    ("notch", 2),
    ("peak", 2),
    ("lapel", 2),
    ("shawl", 1),
    ("mandarin", 1),
    ("turtleneck", 1),
    ("boat", 1),
    ("cowl", 1),
    ("polo", 0),
    ("crew", -1),
    ("halter", -1),
    ("off shoulder", -1),
    ("hood", -2),
    ("kapusonlu", -2),
    ("bisiklet yaka", -1),
    ("gomlek yaka", 2),
];

const CLOSURE_WEIGHTS: &[(&str, i32)] = &[
    ("button", 1),
    ("dugme", 1),
    ("hook", 1),
    ("zipper", 0),
    ("fermuar", 0),
    ("pull on", -2),
    ("elastic", -2),
    ("lastik", -2),
    ("drawstring", -2),
    ("velcro", -2),
];

const MATERIAL_WEIGHTS: &[(&str, i32)] = &[
    ("silk", 2),
    ("ipek", 2),
    ("satin", 2),
    ("saten", 2),
    ("cashmere", 2),
    ("kasmir", 2),
    ("wool", 2),
    ("yun", 2),
    ("velvet", 2),
    ("kadife", 2),
    ("tweed", 2),
    ("linen", 1),
    ("keten", 1),
    ("leather", 1),
    ("deri", 1),
    ("chiffon", 1),
    ("sifon", 1),
    ("denim", -1),
    ("kot", -1),
    ("jersey", -1),
    ("fleece", -2),
    ("polar", -2),
    ("nylon", -1),
    ("spandex", -2),
    ("lycra", -2),
];

const DETAIL_WEIGHTS: &[(&str, i32)] = &[
    ("pleat", 1),
    ("pile", 1),
    ("tailored", 1),
    ("crease", 1),
    ("cufflink", 1),
    ("piping", 1),
    ("double breasted", 1),
    ("distressed", -2),
    ("ripped", -2),
    ("yirtik", -2),
    ("frayed", -1),
    ("raw hem", -1),
    ("graphic", -1),
    ("cargo", -1),
    ("patch", -1),
];

/// Decorative elements counted against outfit busyness.
const DECORATIVE_KEYWORDS: &[&str] = &[
    "embroidery",
    "nakis",
    "sequin",
    "pul",
    "ruffle",
    "firfir",
    "beading",
    "boncuk",
    "lace",
    "dantel",
    "bow",
    "fiyonk",
    "studs",
    "zimba",
    "fringe",
    "pustul",
    "applique",
    "aplike",
    "rhinestone",
    "tas",
];

const HIGH_NECK_KEYWORDS: &[&str] = &[
    "turtleneck",
    "mock neck",
    "high neck",
    "cowl",
    "balikci",
    "dik yaka",
];
const LOW_NECK_KEYWORDS: &[&str] = &[
    "deep v",
    "plunge",
    "scoop",
    "sweetheart",
    "off shoulder",
    "derin v",
    "straplez",
    "strapless",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NecklineHeight {
    High,
    Regular,
    Low,
}

/// Derived construction profile of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignProfile {
    /// 1 (very casual) to 10 (very formal).
    pub formality: u8,
    pub decorative_elements: usize,
    pub neckline_height: NecklineHeight,
}

fn weight_sum(text: &str, table: &[(&str, i32)]) -> i32 {
    if text.is_empty() {
        return 0;
    }
    table
        .iter()
        .filter(|(keyword, _)| contains_keyword(text, keyword))
        .map(|(_, weight)| *weight)
        .sum()
}

/// Formality and decoration profile from neckline/collar, closure, material
/// and design-detail keywords.
pub fn design_profile(item: &WardrobeItem) -> DesignProfile {
    let neckline = normalize_name(&format!(
        "{} {}",
        item.neckline.as_deref().unwrap_or_default(),
        item.collar.as_deref().unwrap_or_default()
    ));
    let closure = normalize_name(item.closure.as_deref().unwrap_or_default());
    let material = normalize_name(item.material.as_deref().unwrap_or_default());
    let details: Vec<String> = item
        .design_details
        .iter()
        .map(|detail| normalize_name(detail))
        .filter(|detail| !detail.is_empty())
        .collect();

    let mut formality = BASE_FORMALITY;
    formality += weight_sum(&neckline, NECKLINE_WEIGHTS);
    formality += weight_sum(&closure, CLOSURE_WEIGHTS);
    formality += weight_sum(&material, MATERIAL_WEIGHTS);
    for detail in &details {
        formality += weight_sum(detail, DETAIL_WEIGHTS);
    }

    let decorative_elements = details
        .iter()
        .filter(|detail| {
            DECORATIVE_KEYWORDS
                .iter()
                .any(|keyword| contains_keyword(detail, keyword))
        })
        .count();

    let neckline_height = if HIGH_NECK_KEYWORDS
        .iter()
        .any(|keyword| contains_keyword(&neckline, keyword))
    {
        NecklineHeight::High
    } else if LOW_NECK_KEYWORDS
        .iter()
        .any(|keyword| contains_keyword(&neckline, keyword))
    {
        NecklineHeight::Low
    } else {
        NecklineHeight::Regular
    };

    DesignProfile {
        formality: formality.clamp(MIN_FORMALITY as i32, MAX_FORMALITY as i32) as u8,
        decorative_elements,
        neckline_height,
    }
}

// Coordination penalties
pub const MAJOR_FORMALITY_RANGE: u8 = 4;
pub const MINOR_FORMALITY_RANGE: u8 = 2;
pub const MAJOR_FORMALITY_PENALTY: u8 = 3;
pub const MINOR_FORMALITY_PENALTY: u8 = 1;
pub const MAX_DECORATIVE_ELEMENTS: usize = 2;
pub const DECORATION_PENALTY_CAP: u8 = 2;
pub const NECKLINE_CONFLICT_PENALTY: u8 = 2;

/// A construction problem found in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DesignIssue {
    MajorFormalityGap { range: u8 },
    MinorFormalityGap { range: u8 },
    TooManyDecorations { count: usize },
    NecklineConflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordination {
    /// 1 to 10.
    pub score: u8,
    pub issues: Vec<DesignIssue>,
    pub formality_min: u8,
    pub formality_max: u8,
}

/// Rate how well the constructions of an outfit's items work together.
pub fn coordinate(profiles: &[DesignProfile]) -> Coordination {
    let mut penalty: u8 = 0;
    let mut issues = Vec::new();

    let formality_min = profiles.iter().map(|p| p.formality).min().unwrap_or(BASE_FORMALITY as u8);
    let formality_max = profiles.iter().map(|p| p.formality).max().unwrap_or(BASE_FORMALITY as u8);
    let range = formality_max - formality_min;
    if range > MAJOR_FORMALITY_RANGE {
        penalty += MAJOR_FORMALITY_PENALTY;
        issues.push(DesignIssue::MajorFormalityGap { range });
    } else if range > MINOR_FORMALITY_RANGE {
        penalty += MINOR_FORMALITY_PENALTY;
        issues.push(DesignIssue::MinorFormalityGap { range });
    }

    let decorations: usize = profiles.iter().map(|p| p.decorative_elements).sum();
    if decorations > MAX_DECORATIVE_ELEMENTS {
        let excess = (decorations - MAX_DECORATIVE_ELEMENTS).min(DECORATION_PENALTY_CAP as usize);
        penalty += excess as u8;
        issues.push(DesignIssue::TooManyDecorations { count: decorations });
    }

    let has_high = profiles.iter().any(|p| p.neckline_height == NecklineHeight::High);
    let has_low = profiles.iter().any(|p| p.neckline_height == NecklineHeight::Low);
    if has_high && has_low {
        penalty += NECKLINE_CONFLICT_PENALTY;
        issues.push(DesignIssue::NecklineConflict);
    }

    Coordination {
        score: 10u8.saturating_sub(penalty).clamp(MIN_FORMALITY, MAX_FORMALITY),
        issues,
        formality_min,
        formality_max,
    }
}

#[cfg(test)]
#[path = "../tests/analysis/design_tests.rs"]
mod tests;
