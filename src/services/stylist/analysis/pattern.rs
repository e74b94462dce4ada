//! Pattern mixing heuristic.

use serde::{Deserialize, Serialize};

use crate::database::models::WardrobeItem;
use crate::services::stylist::core::normalizer::{contains_any_keyword, normalize_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternScale {
    Fine,
    Medium,
    Large,
}

impl PatternScale {
    fn rank(self) -> u8 {
        match self {
            PatternScale::Fine => 0,
            PatternScale::Medium => 1,
            PatternScale::Large => 2,
        }
    }

    pub fn distance(self, other: PatternScale) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternInfo {
    pub pattern_type: String,
    pub scale: PatternScale,
    /// 1 (solid) to 10 (very busy).
    pub complexity: u8,
    pub geometric: bool,
    pub organic: bool,
}

/// Complexity at or below which a pattern reads as solid.
pub const NEAR_SOLID_COMPLEXITY: u8 = 2;

impl PatternInfo {
    pub fn solid() -> Self {
        Self {
            pattern_type: "solid".to_string(),
            scale: PatternScale::Fine,
            complexity: 1,
            geometric: false,
            organic: false,
        }
    }

    pub fn is_patterned(&self) -> bool {
        self.complexity > NEAR_SOLID_COMPLEXITY
    }
}

struct PatternRule {
    keywords: &'static [&'static str],
    pattern_type: &'static str,
    scale: PatternScale,
    complexity: u8,
    geometric: bool,
    organic: bool,
}

/// Keyword rules, most specific first (pinstripe before stripe, gingham
/// before check).
const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        keywords: &["solid", "plain", "duz", "tek renk", "duz renk"],
        pattern_type: "solid",
        scale: PatternScale::Fine,
        complexity: 1,
        geometric: false,
        organic: false,
    },
    PatternRule {
        keywords: &["textured", "ribbed", "knit", "triko", "fitilli"],
        pattern_type: "textured",
        scale: PatternScale::Fine,
        complexity: 2,
        geometric: false,
        organic: false,
    },
    PatternRule {
        keywords: &["pinstripe", "ince cizgili"],
        pattern_type: "stripe",
        scale: PatternScale::Fine,
        complexity: 3,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["stripe", "cizgili", "cizgi", "breton"],
        pattern_type: "stripe",
        scale: PatternScale::Medium,
        complexity: 4,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["gingham", "potikare"],
        pattern_type: "check",
        scale: PatternScale::Fine,
        complexity: 4,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["check", "plaid", "tartan", "ekose", "kareli"],
        pattern_type: "check",
        scale: PatternScale::Medium,
        complexity: 6,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["houndstooth", "kazayagi"],
        pattern_type: "houndstooth",
        scale: PatternScale::Fine,
        complexity: 5,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["herringbone", "baliksirti"],
        pattern_type: "herringbone",
        scale: PatternScale::Fine,
        complexity: 3,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["polka", "dot", "puantiye", "puanli"],
        pattern_type: "polka dot",
        scale: PatternScale::Fine,
        complexity: 3,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["geometric", "geometrik", "chevron", "argyle"],
        pattern_type: "geometric",
        scale: PatternScale::Medium,
        complexity: 5,
        geometric: true,
        organic: false,
    },
    PatternRule {
        keywords: &["floral", "flower", "cicek", "cicekli", "botanical"],
        pattern_type: "floral",
        scale: PatternScale::Medium,
        complexity: 6,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["paisley", "sal desen", "sal desenli"],
        pattern_type: "paisley",
        scale: PatternScale::Large,
        complexity: 8,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["animal", "leopard", "leopar", "zebra", "snake", "yilan"],
        pattern_type: "animal",
        scale: PatternScale::Large,
        complexity: 7,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["camouflage", "camo", "kamuflaj"],
        pattern_type: "camouflage",
        scale: PatternScale::Large,
        complexity: 7,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["tie dye", "batik"],
        pattern_type: "tie dye",
        scale: PatternScale::Large,
        complexity: 8,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["abstract", "soyut"],
        pattern_type: "abstract",
        scale: PatternScale::Large,
        complexity: 7,
        geometric: false,
        organic: true,
    },
    PatternRule {
        keywords: &["graphic", "print", "baskili", "logo"],
        pattern_type: "graphic",
        scale: PatternScale::Medium,
        complexity: 5,
        geometric: false,
        organic: false,
    },
];

const FINE_SCALE_WORDS: &[&str] = &["small", "mini", "micro", "tiny", "kucuk"];
const LARGE_SCALE_WORDS: &[&str] = &["large", "big", "bold", "wide", "oversized", "buyuk", "iri"];

/// Derive pattern attributes from a pattern name. Missing and unrecognized
/// names read as solid.
pub fn pattern_info(name: Option<&str>) -> PatternInfo {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return PatternInfo::solid();
    };

    let normalized = normalize_name(name);
    let Some(rule) = PATTERN_RULES
        .iter()
        .find(|rule| contains_any_keyword(&normalized, rule.keywords))
    else {
        log::debug!("Unknown pattern '{}', treating as solid", name);
        return PatternInfo::solid();
    };

    let mut info = PatternInfo {
        pattern_type: rule.pattern_type.to_string(),
        scale: rule.scale,
        complexity: rule.complexity,
        geometric: rule.geometric,
        organic: rule.organic,
    };

    if info.is_patterned() {
        if contains_any_keyword(&normalized, FINE_SCALE_WORDS) {
            info.scale = PatternScale::Fine;
        } else if contains_any_keyword(&normalized, LARGE_SCALE_WORDS) {
            info.scale = PatternScale::Large;
        }
    }
    info
}

/// Pattern of an item. A recognized `pattern_type` wins over the broader
/// `pattern` field.
pub fn item_pattern(item: &WardrobeItem) -> PatternInfo {
    let from_type = pattern_info(item.pattern_type.as_deref());
    if from_type.is_patterned() {
        from_type
    } else {
        pattern_info(item.pattern.as_deref())
    }
}

// Mixing confidences
pub const SOLID_ANCHOR_CONFIDENCE: u8 = 9;
pub const SCALE_MIX_BASE_CONFIDENCE: u8 = 6;
pub const SAME_TYPE_SCALE_CONFIDENCE: u8 = 8;
pub const GEOMETRIC_ORGANIC_CONFIDENCE: u8 = 6;
pub const COMPETING_PATTERNS_CONFIDENCE: u8 = 3;
pub const DEFAULT_MIX_CONFIDENCE: u8 = 5;
pub const OVERLOADED_MIX_CONFIDENCE: u8 = 4;

/// Summed complexity two patterns may carry together.
pub const MAX_COMBINED_COMPLEXITY: u8 = 10;
/// Patterns above this complexity count as busy.
pub const BUSY_COMPLEXITY: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixVerdict {
    pub mixable: bool,
    pub confidence: u8,
    pub reason: String,
}

fn verdict(mixable: bool, confidence: u8, reason: impl Into<String>) -> MixVerdict {
    MixVerdict {
        mixable,
        confidence: confidence.clamp(1, 10),
        reason: reason.into(),
    }
}

/// Decide whether two patterns can be worn together. Rules run in priority
/// order; the first that applies decides.
pub fn evaluate_mix(a: &PatternInfo, b: &PatternInfo) -> MixVerdict {
    if a.complexity <= NEAR_SOLID_COMPLEXITY || b.complexity <= NEAR_SOLID_COMPLEXITY {
        return verdict(
            true,
            SOLID_ANCHOR_CONFIDENCE,
            "a solid piece anchors the pattern",
        );
    }

    if a.scale != b.scale {
        let distance = a.scale.distance(b.scale);
        if a.pattern_type == b.pattern_type {
            let confidence = (SCALE_MIX_BASE_CONFIDENCE + distance).max(SAME_TYPE_SCALE_CONFIDENCE);
            return verdict(
                true,
                confidence,
                format!("same {} pattern at different scales", a.pattern_type),
            );
        }
        return verdict(
            true,
            SCALE_MIX_BASE_CONFIDENCE + distance,
            "patterns differ in scale",
        );
    }

    let combined = a.complexity.saturating_add(b.complexity);
    let mixed_motifs = (a.geometric && b.organic) || (a.organic && b.geometric);
    if mixed_motifs && combined <= MAX_COMBINED_COMPLEXITY {
        return verdict(
            true,
            GEOMETRIC_ORGANIC_CONFIDENCE,
            "geometric and organic shapes contrast",
        );
    }

    if a.complexity > BUSY_COMPLEXITY
        && b.complexity > BUSY_COMPLEXITY
        && a.complexity.abs_diff(b.complexity) <= 1
    {
        return verdict(
            false,
            COMPETING_PATTERNS_CONFIDENCE,
            "two busy patterns of similar weight compete",
        );
    }

    if combined <= MAX_COMBINED_COMPLEXITY {
        verdict(true, DEFAULT_MIX_CONFIDENCE, "patterns are light enough to combine")
    } else {
        verdict(false, OVERLOADED_MIX_CONFIDENCE, "too much pattern in one outfit")
    }
}

/// Score assumed when fewer than two patterned items are present.
pub const SINGLE_PATTERN_SCORE: f32 = 9.0;

/// Average mixing confidence over all pairs of patterned items.
pub fn outfit_pattern_score(patterns: &[PatternInfo]) -> f32 {
    let patterned: Vec<&PatternInfo> = patterns.iter().filter(|p| p.is_patterned()).collect();
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in patterned.iter().enumerate() {
        for b in &patterned[i + 1..] {
            total += evaluate_mix(a, b).confidence as f32;
            pairs += 1;
        }
    }

    if pairs == 0 {
        SINGLE_PATTERN_SCORE
    } else {
        total / pairs as f32
    }
}

/// Lowest pairwise mixing confidence among patterned items, if any pair exists.
pub fn weakest_mix(patterns: &[PatternInfo]) -> Option<MixVerdict> {
    let patterned: Vec<&PatternInfo> = patterns.iter().filter(|p| p.is_patterned()).collect();
    let mut weakest: Option<MixVerdict> = None;
    for (i, a) in patterned.iter().enumerate() {
        for b in &patterned[i + 1..] {
            let current = evaluate_mix(a, b);
            if weakest
                .as_ref()
                .is_none_or(|w| current.confidence < w.confidence)
            {
                weakest = Some(current);
            }
        }
    }
    weakest
}

#[cfg(test)]
#[path = "../tests/analysis/pattern_tests.rs"]
mod tests;
