//! Color harmony heuristic.
//!
//! Color names map to HSL through a static table (English and transliterated
//! Turkish names). A tone word shifts saturation/lightness by fixed deltas.
//! Two colors are classified by the absolute difference of their hues.

use serde::{Deserialize, Serialize};

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::normalize_name;

/// HSL triple: hue 0–360, saturation 0–100, lightness 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    /// False when the name was not in the table and the gray default was used.
    pub known: bool,
}

impl ColorInfo {
    /// Zero-saturation mid gray used for unknown or missing colors.
    pub const UNKNOWN: ColorInfo = ColorInfo {
        hue: 0.0,
        saturation: 0.0,
        lightness: 50.0,
        known: false,
    };

    pub fn is_light(&self) -> bool {
        self.lightness > LIGHT_THRESHOLD
    }

    pub fn is_dark(&self) -> bool {
        self.lightness < DARK_THRESHOLD
    }
}

/// Lightness above which a color counts as light for contrast pairing.
pub const LIGHT_THRESHOLD: f32 = 60.0;
/// Lightness below which a color counts as dark for contrast pairing.
pub const DARK_THRESHOLD: f32 = 40.0;

// Tone deltas
pub const LIGHT_LIGHTNESS_DELTA: f32 = 20.0;
pub const DARK_LIGHTNESS_DELTA: f32 = -20.0;
pub const BRIGHT_SATURATION_DELTA: f32 = 20.0;
pub const MUTED_SATURATION_DELTA: f32 = -30.0;
pub const PASTEL_SATURATION_DELTA: f32 = -40.0;
pub const PASTEL_LIGHTNESS_DELTA: f32 = 25.0;

// Hue-difference class boundaries (inclusive upper bounds, degrees)
pub const MONOCHROMATIC_MAX: f32 = 30.0;
pub const ANALOGOUS_MAX: f32 = 60.0;
pub const SPLIT_COMPLEMENTARY_MAX: f32 = 90.0;
pub const TRIADIC_MAX: f32 = 150.0;
pub const COMPLEMENTARY_MAX: f32 = 210.0;

/// Name → (hue, saturation, lightness).
const COLOR_TABLE: &[(&str, f32, f32, f32)] = &[
    ("black", 0.0, 0.0, 5.0),
    ("siyah", 0.0, 0.0, 5.0),
    ("white", 0.0, 0.0, 97.0),
    ("beyaz", 0.0, 0.0, 97.0),
    ("gray", 0.0, 0.0, 50.0),
    ("grey", 0.0, 0.0, 50.0),
    ("gri", 0.0, 0.0, 50.0),
    ("charcoal", 0.0, 0.0, 25.0),
    ("antrasit", 0.0, 0.0, 25.0),
    ("silver", 0.0, 0.0, 75.0),
    ("gumus", 0.0, 0.0, 75.0),
    ("beige", 40.0, 40.0, 80.0),
    ("bej", 40.0, 40.0, 80.0),
    ("cream", 45.0, 50.0, 90.0),
    ("krem", 45.0, 50.0, 90.0),
    ("ivory", 50.0, 60.0, 93.0),
    ("ekru", 50.0, 60.0, 93.0),
    ("khaki", 50.0, 35.0, 60.0),
    ("haki", 50.0, 35.0, 60.0),
    ("brown", 25.0, 55.0, 30.0),
    ("kahverengi", 25.0, 55.0, 30.0),
    ("kahve", 25.0, 55.0, 30.0),
    ("camel", 30.0, 50.0, 55.0),
    ("tan", 30.0, 40.0, 60.0),
    ("taba", 30.0, 40.0, 60.0),
    ("red", 0.0, 80.0, 50.0),
    ("kirmizi", 0.0, 80.0, 50.0),
    ("burgundy", 345.0, 70.0, 30.0),
    ("bordo", 345.0, 70.0, 30.0),
    ("maroon", 0.0, 60.0, 25.0),
    ("pink", 330.0, 70.0, 75.0),
    ("pembe", 330.0, 70.0, 75.0),
    ("rose", 340.0, 60.0, 65.0),
    ("pudra", 340.0, 45.0, 80.0),
    ("fuchsia", 320.0, 80.0, 55.0),
    ("fusya", 320.0, 80.0, 55.0),
    ("orange", 30.0, 90.0, 55.0),
    ("turuncu", 30.0, 90.0, 55.0),
    ("coral", 15.0, 80.0, 65.0),
    ("mercan", 15.0, 80.0, 65.0),
    ("yellow", 55.0, 90.0, 55.0),
    ("sari", 55.0, 90.0, 55.0),
    ("mustard", 45.0, 75.0, 45.0),
    ("hardal", 45.0, 75.0, 45.0),
    ("gold", 45.0, 70.0, 50.0),
    ("altin", 45.0, 70.0, 50.0),
    ("green", 120.0, 60.0, 40.0),
    ("yesil", 120.0, 60.0, 40.0),
    ("olive", 70.0, 45.0, 35.0),
    ("zeytin", 70.0, 45.0, 35.0),
    ("mint", 150.0, 45.0, 80.0),
    ("emerald", 140.0, 70.0, 35.0),
    ("zumrut", 140.0, 70.0, 35.0),
    ("teal", 180.0, 60.0, 35.0),
    ("turquoise", 175.0, 70.0, 55.0),
    ("turkuaz", 175.0, 70.0, 55.0),
    ("blue", 220.0, 75.0, 50.0),
    ("mavi", 220.0, 75.0, 50.0),
    ("navy", 230.0, 60.0, 20.0),
    ("lacivert", 230.0, 60.0, 20.0),
    ("denim", 215.0, 45.0, 45.0),
    ("indigo", 245.0, 55.0, 30.0),
    ("sky", 200.0, 70.0, 75.0),
    ("purple", 275.0, 55.0, 45.0),
    ("mor", 275.0, 55.0, 45.0),
    ("violet", 285.0, 60.0, 50.0),
    ("lavender", 270.0, 50.0, 80.0),
    ("lila", 280.0, 45.0, 75.0),
    ("lilac", 280.0, 45.0, 75.0),
];

/// Tone words and the adjustments they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
    Bright,
    Muted,
    Pastel,
}

const TONE_WORDS: &[(&str, Tone)] = &[
    ("light", Tone::Light),
    ("acik", Tone::Light),
    ("dark", Tone::Dark),
    ("koyu", Tone::Dark),
    ("deep", Tone::Dark),
    ("bright", Tone::Bright),
    ("vivid", Tone::Bright),
    ("canli", Tone::Bright),
    ("muted", Tone::Muted),
    ("dusty", Tone::Muted),
    ("soft", Tone::Muted),
    ("soluk", Tone::Muted),
    ("pastel", Tone::Pastel),
];

fn tone_of(text: &str) -> Option<Tone> {
    let normalized = normalize_name(text);
    normalized.split_whitespace().find_map(|token| {
        TONE_WORDS
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, tone)| *tone)
    })
}

fn apply_tone(mut color: ColorInfo, tone: Tone) -> ColorInfo {
    match tone {
        Tone::Light => color.lightness += LIGHT_LIGHTNESS_DELTA,
        Tone::Dark => color.lightness += DARK_LIGHTNESS_DELTA,
        Tone::Bright => color.saturation += BRIGHT_SATURATION_DELTA,
        Tone::Muted => color.saturation += MUTED_SATURATION_DELTA,
        Tone::Pastel => {
            color.saturation += PASTEL_SATURATION_DELTA;
            color.lightness += PASTEL_LIGHTNESS_DELTA;
        }
    }
    color.saturation = color.saturation.clamp(0.0, 100.0);
    color.lightness = color.lightness.clamp(0.0, 100.0);
    color
}

/// Look up a color name, applying the explicit tone or a tone word embedded
/// in the name ("Koyu Mavi", "light blue").
///
/// Unknown names fall back to [`ColorInfo::UNKNOWN`]: a zero-saturation gray
/// with hue 0. Hue comparison then treats it like red, which flattens harmony
/// for unrecognized colors; kept for compatibility with stored scores.
pub fn color_info(name: Option<&str>, tone: Option<&str>) -> ColorInfo {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return ColorInfo::UNKNOWN;
    };

    let normalized = normalize_name(name);
    let base = COLOR_TABLE
        .iter()
        .find(|(key, ..)| *key == normalized)
        .or_else(|| {
            normalized.split_whitespace().find_map(|token| {
                COLOR_TABLE.iter().find(|(key, ..)| *key == token)
            })
        })
        .map(|(_, hue, saturation, lightness)| ColorInfo {
            hue: *hue,
            saturation: *saturation,
            lightness: *lightness,
            known: true,
        });

    let Some(base) = base else {
        log::debug!("Unknown color '{}', treating as neutral gray", name);
        return ColorInfo::UNKNOWN;
    };

    match tone.and_then(tone_of).or_else(|| tone_of(name)) {
        Some(tone) => apply_tone(base, tone),
        None => base,
    }
}

/// Color of an item's primary color and tone.
pub fn item_color(item: &WardrobeItem) -> ColorInfo {
    color_info(item.primary_color.as_deref(), item.color_tone.as_deref())
}

/// Relationship between two hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyClass {
    Monochromatic,
    Analogous,
    SplitComplementary,
    Triadic,
    Complementary,
    Neutral,
}

impl HarmonyClass {
    /// Compatibility score on the fixed per-class scale.
    pub fn score(self) -> u8 {
        match self {
            HarmonyClass::Monochromatic => 9,
            HarmonyClass::Analogous => 8,
            HarmonyClass::Complementary => 7,
            HarmonyClass::SplitComplementary => 7,
            HarmonyClass::Triadic => 6,
            HarmonyClass::Neutral => 5,
        }
    }
}

impl std::fmt::Display for HarmonyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarmonyClass::Monochromatic => write!(f, "monochromatic"),
            HarmonyClass::Analogous => write!(f, "analogous"),
            HarmonyClass::SplitComplementary => write!(f, "split-complementary"),
            HarmonyClass::Triadic => write!(f, "triadic"),
            HarmonyClass::Complementary => write!(f, "complementary"),
            HarmonyClass::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmony {
    pub class: HarmonyClass,
    pub score: u8,
}

/// Absolute hue difference, not wrapped around the color wheel.
pub fn hue_difference(a: &ColorInfo, b: &ColorInfo) -> f32 {
    (a.hue - b.hue).abs()
}

pub fn classify_harmony(a: &ColorInfo, b: &ColorInfo) -> Harmony {
    let diff = hue_difference(a, b);
    let class = if diff <= MONOCHROMATIC_MAX {
        HarmonyClass::Monochromatic
    } else if diff <= ANALOGOUS_MAX {
        HarmonyClass::Analogous
    } else if diff <= SPLIT_COMPLEMENTARY_MAX {
        HarmonyClass::SplitComplementary
    } else if diff <= TRIADIC_MAX {
        HarmonyClass::Triadic
    } else if diff <= COMPLEMENTARY_MAX {
        HarmonyClass::Complementary
    } else {
        HarmonyClass::Neutral
    };

    Harmony {
        class,
        score: class.score(),
    }
}

/// Score assumed for outfits with fewer than two colors to compare.
pub const SINGLE_COLOR_HARMONY: f32 = 9.0;

/// Average pairwise harmony score of a set of colors.
pub fn outfit_harmony(colors: &[ColorInfo]) -> f32 {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            total += classify_harmony(a, b).score as f32;
            pairs += 1;
        }
    }

    if pairs == 0 {
        SINGLE_COLOR_HARMONY
    } else {
        total / pairs as f32
    }
}

/// Most frequent harmony class across all pairs (first seen wins ties).
pub fn dominant_harmony(colors: &[ColorInfo]) -> Option<HarmonyClass> {
    let mut counts: Vec<(HarmonyClass, usize)> = Vec::new();
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            let class = classify_harmony(a, b).class;
            match counts.iter_mut().find(|(c, _)| *c == class) {
                Some((_, count)) => *count += 1,
                None => counts.push((class, 1)),
            }
        }
    }

    let mut best: Option<(HarmonyClass, usize)> = None;
    for (class, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((class, count));
        }
    }
    best.map(|(class, _)| class)
}

#[cfg(test)]
#[path = "../tests/analysis/color_tests.rs"]
mod tests;
