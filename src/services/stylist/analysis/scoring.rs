//! Weighted outfit confidence from the color, pattern and design heuristics.

use serde::{Deserialize, Serialize};

use super::color::{dominant_harmony, item_color, outfit_harmony, ColorInfo, HarmonyClass};
use super::design::{coordinate, design_profile, Coordination};
use super::pattern::{item_pattern, outfit_pattern_score, weakest_mix, MixVerdict, PatternInfo};
use crate::database::models::WardrobeItem;

pub const COLOR_WEIGHT: f32 = 0.4;
pub const PATTERN_WEIGHT: f32 = 0.3;
pub const DESIGN_WEIGHT: f32 = 0.3;

pub const MIN_CONFIDENCE: u8 = 1;
pub const MAX_CONFIDENCE: u8 = 10;
/// Ceiling for confidences reported after validation.
pub const CONFIDENCE_CEILING: u8 = 9;

/// Combined heuristic evaluation of one outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitEvaluation {
    pub color_score: f32,
    pub pattern_score: f32,
    pub design: Coordination,
    pub harmony: Option<HarmonyClass>,
    pub weakest_mix: Option<MixVerdict>,
    /// Weighted total, 1..=10.
    pub total: u8,
}

pub fn clamp_confidence(value: f64) -> u8 {
    if !value.is_finite() {
        return MIN_CONFIDENCE;
    }
    value.round().clamp(MIN_CONFIDENCE as f64, CONFIDENCE_CEILING as f64) as u8
}

/// Evaluate a set of wardrobe items as one outfit.
pub fn evaluate_outfit(items: &[&WardrobeItem]) -> OutfitEvaluation {
    let colors: Vec<ColorInfo> = items.iter().map(|item| item_color(item)).collect();
    let patterns: Vec<PatternInfo> = items.iter().map(|item| item_pattern(item)).collect();
    let profiles: Vec<_> = items.iter().map(|item| design_profile(item)).collect();

    let color_score = outfit_harmony(&colors);
    let pattern_score = outfit_pattern_score(&patterns);
    let design = coordinate(&profiles);

    let weighted = color_score * COLOR_WEIGHT
        + pattern_score * PATTERN_WEIGHT
        + design.score as f32 * DESIGN_WEIGHT;

    OutfitEvaluation {
        color_score,
        pattern_score,
        harmony: dominant_harmony(&colors),
        weakest_mix: weakest_mix(&patterns),
        design,
        total: (weighted.round() as u8).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
    }
}

#[cfg(test)]
#[path = "../tests/analysis/scoring_tests.rs"]
mod tests;
