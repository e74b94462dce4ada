//! Domain types for the outfit generation pipeline.
//!
//! Contains: GenerationRequest, GenerationResponse, RawOutfit,
//! OutfitCandidate, OutfitSource, MatchStrategy, RejectReason,
//! ValidationState, ValidationReport, Language.

use serde::{Deserialize, Deserializer, Serialize};

use crate::database::models::WardrobeItem;

// ==================== REQUEST / RESPONSE ====================

/// Input of one outfit-generation invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub wardrobe_items: Vec<WardrobeItem>,
    pub occasion: String,
    pub time_of_day: String,
    pub weather: String,
    pub user_gender: Option<String>,
    pub is_premium: bool,
    /// `en` or `tr`; falls back to the configured default.
    pub language: Option<String>,
}

/// Output of one outfit-generation invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub outfits: Vec<OutfitCandidate>,
    /// True when at least one outfit came from the fallback generator.
    pub used_fallback: bool,
}

/// An outfit as proposed by the external service, before validation.
///
/// Every field is lenient: models routinely omit fields or send numbers as
/// strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOutfit {
    pub id: Option<String>,
    pub name: String,
    pub items: Vec<String>,
    pub item_ids: Option<Vec<String>>,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub confidence: Option<f64>,
    pub styling_tips: String,
    pub occasion: Option<String>,
}

/// A displayable outfit returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCandidate {
    pub id: String,
    pub name: String,
    /// Display names of the resolved wardrobe items, in outfit order.
    pub items: Vec<String>,
    pub item_ids: Vec<String>,
    /// Bounded to 1..=10.
    pub confidence: u8,
    pub styling_tips: String,
    pub occasion: Option<String>,
    pub source: OutfitSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_images: Option<Vec<String>>,
}

/// Which part of the pipeline produced an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSource {
    /// Proposed by the external model and accepted by the validator.
    Ai,
    ColorHarmony,
    PatternMix,
    ContrastBalance,
    /// First items of the wardrobe, taken unconditionally.
    LastResort,
}

impl OutfitSource {
    pub fn is_fallback(self) -> bool {
        !matches!(self, OutfitSource::Ai)
    }
}

impl std::fmt::Display for OutfitSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutfitSource::Ai => write!(f, "ai"),
            OutfitSource::ColorHarmony => write!(f, "color_harmony"),
            OutfitSource::PatternMix => write!(f, "pattern_mix"),
            OutfitSource::ContrastBalance => write!(f, "contrast_balance"),
            OutfitSource::LastResort => write!(f, "last_resort"),
        }
    }
}

// ==================== VALIDATION ====================

/// Name-resolution strategies, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// The proposal carried wardrobe ids directly.
    ItemId,
    Exact,
    Normalized,
    Compact,
    Substring,
    KeywordOverlap,
}

/// Validator states for one proposed outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationState {
    Received,
    NameResolved,
    RoleChecked,
    Accepted,
    Rejected,
}

/// Structured reason explaining why a proposal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RejectReason {
    UnresolvedName { name: String },
    DuplicateItem { name: String },
    TooFewItems { count: usize },
    MissingTop,
    MissingBottom,
    /// A T-shirt-family item worn together with a sweater-family item.
    ConflictingTopLayers { tshirt: String, sweater: String },
    MultipleShirts { count: usize },
    MultipleOuterLayers { count: usize },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::UnresolvedName { name } => {
                write!(f, "item '{name}' not found in wardrobe")
            }
            RejectReason::DuplicateItem { name } => {
                write!(f, "item '{name}' resolves to an item already in the outfit")
            }
            RejectReason::TooFewItems { count } => {
                write!(f, "outfit has {count} item(s), need at least 2")
            }
            RejectReason::MissingTop => write!(f, "no top-layer garment"),
            RejectReason::MissingBottom => write!(f, "no bottom-layer garment"),
            RejectReason::ConflictingTopLayers { tshirt, sweater } => {
                write!(f, "conflicting top layers: '{tshirt}' with '{sweater}'")
            }
            RejectReason::MultipleShirts { count } => {
                write!(f, "{count} shirt-family items in one outfit")
            }
            RejectReason::MultipleOuterLayers { count } => {
                write!(f, "{count} competing outer layers")
            }
        }
    }
}

/// One proposed name mapped onto a wardrobe item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    pub requested: String,
    pub item_id: String,
    pub strategy: MatchStrategy,
}

/// Diagnostics of validating one proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub state: ValidationState,
    pub resolved: Vec<ResolvedItem>,
    pub reasons: Vec<RejectReason>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            state: ValidationState::Received,
            resolved: Vec::new(),
            reasons: Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.state == ValidationState::Accepted
    }

    /// Rejection reasons as display strings.
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== LOCALIZATION ====================

/// Display language of generated names and styling prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    /// Resolve a language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "tr" | "tr-tr" | "turkish" | "turkce" | "türkçe" => Language::Turkish,
            _ => Language::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
