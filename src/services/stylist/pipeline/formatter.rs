//! Display metadata for outfits: localized names, styling tips, confidence
//! and images.

use crate::database::models::WardrobeItem;
use crate::services::stylist::analysis::color::HarmonyClass;
use crate::services::stylist::analysis::design::DesignIssue;
use crate::services::stylist::analysis::scoring::{evaluate_outfit, OutfitEvaluation};
use crate::services::stylist::core::normalizer::normalize_name;
use crate::services::stylist::models::types::{Language, OutfitCandidate, OutfitSource};
use crate::services::stylist::pipeline::fallback::FallbackOutfit;
use crate::services::stylist::pipeline::validator::AcceptedOutfit;

/// Invocation context shared by every outfit of one response.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub occasion: &'a str,
    pub time_of_day: &'a str,
    pub weather: &'a str,
    pub language: Language,
    pub is_premium: bool,
}

// ==================== LABELS ====================

/// (normalized keys, English label, Turkish label)
type Label = (&'static [&'static str], &'static str, &'static str);

const OCCASION_LABELS: &[Label] = &[
    (&["casual", "gunluk", "everyday"], "a casual day", "günlük bir gün"),
    (&["work", "office", "business", "is", "ofis"], "the office", "iş"),
    (&["formal", "resmi", "wedding", "dugun"], "a formal event", "resmi bir davet"),
    (&["party", "parti", "night out"], "a party", "bir parti"),
    (&["date", "bulusma", "romantic"], "a date", "bir buluşma"),
    (&["sport", "sports", "gym", "spor"], "an active day", "spor"),
    (&["travel", "seyahat", "tatil", "vacation"], "travel", "seyahat"),
];

const TIME_LABELS: &[Label] = &[
    (&["morning", "sabah"], "morning", "sabah"),
    (&["day", "daytime", "afternoon", "gunduz", "ogle", "ogleden sonra"], "daytime", "gündüz"),
    (&["evening", "aksam"], "evening", "akşam"),
    (&["night", "gece"], "night", "gece"),
];

/// Weather keys with the extra styling fragment they trigger.
const WEATHER_NOTES: &[Label] = &[
    (
        &["cold", "soguk", "winter", "kis", "snowy", "karli"],
        "Add a warm layer; it will be cold out.",
        "Hava soğuk, sıcak tutan bir katman ekle.",
    ),
    (
        &["rainy", "rain", "yagmurlu", "yagmur"],
        "Pick water-resistant shoes for the rain.",
        "Yağmur için suya dayanıklı ayakkabı seç.",
    ),
    (
        &["hot", "sunny", "sicak", "gunesli", "summer", "yaz"],
        "Breathable fabrics will keep you comfortable in the heat.",
        "Sıcakta nefes alan kumaşlar rahat ettirir.",
    ),
    (
        &["windy", "ruzgarli"],
        "Secure loose layers against the wind.",
        "Rüzgara karşı bol katmanları sabitle.",
    ),
];

fn lookup(table: &'static [Label], value: &str) -> Option<&'static Label> {
    let normalized = normalize_name(value);
    if normalized.is_empty() {
        return None;
    }
    table.iter().find(|(keys, ..)| keys.contains(&normalized.as_str()))
}

fn pick(label: &Label, language: Language) -> &'static str {
    match language {
        Language::English => label.1,
        Language::Turkish => label.2,
    }
}

/// Localized occasion phrase; unknown occasions are shown as given.
pub fn occasion_label(occasion: &str, language: Language) -> String {
    match lookup(OCCASION_LABELS, occasion) {
        Some(label) => pick(label, language).to_string(),
        None if occasion.trim().is_empty() => pick(&OCCASION_LABELS[0], language).to_string(),
        None => occasion.trim().to_string(),
    }
}

pub fn time_label(time_of_day: &str, language: Language) -> Option<String> {
    lookup(TIME_LABELS, time_of_day).map(|label| pick(label, language).to_string())
}

pub fn weather_note(weather: &str, language: Language) -> Option<&'static str> {
    lookup(WEATHER_NOTES, weather).map(|label| pick(label, language))
}

pub fn harmony_label(class: HarmonyClass, language: Language) -> &'static str {
    match (class, language) {
        (HarmonyClass::Monochromatic, Language::English) => "monochromatic",
        (HarmonyClass::Analogous, Language::English) => "analogous",
        (HarmonyClass::SplitComplementary, Language::English) => "split-complementary",
        (HarmonyClass::Triadic, Language::English) => "triadic",
        (HarmonyClass::Complementary, Language::English) => "complementary",
        (HarmonyClass::Neutral, Language::English) => "neutral",
        (HarmonyClass::Monochromatic, Language::Turkish) => "monokrom",
        (HarmonyClass::Analogous, Language::Turkish) => "analog",
        (HarmonyClass::SplitComplementary, Language::Turkish) => "ayrık tamamlayıcı",
        (HarmonyClass::Triadic, Language::Turkish) => "üçlü",
        (HarmonyClass::Complementary, Language::Turkish) => "tamamlayıcı",
        (HarmonyClass::Neutral, Language::Turkish) => "nötr",
    }
}

/// Design suggestion for one coordination issue.
pub fn describe_issue(issue: &DesignIssue, language: Language) -> &'static str {
    match (issue, language) {
        (DesignIssue::MajorFormalityGap { .. }, Language::English) => {
            "The pieces differ a lot in formality; swap one to match the others."
        }
        (DesignIssue::MajorFormalityGap { .. }, Language::Turkish) => {
            "Parçaların resmiyet düzeyi çok farklı; birini diğerlerine uyan bir parçayla değiştir."
        }
        (DesignIssue::MinorFormalityGap { .. }, Language::English) => {
            "Formality varies slightly; an accessory can bridge the gap."
        }
        (DesignIssue::MinorFormalityGap { .. }, Language::Turkish) => {
            "Resmiyet düzeyi biraz farklı; bir aksesuar bu farkı kapatabilir."
        }
        (DesignIssue::TooManyDecorations { .. }, Language::English) => {
            "Several decorative details compete; let one piece carry the embellishment."
        }
        (DesignIssue::TooManyDecorations { .. }, Language::Turkish) => {
            "Birden fazla süsleme yarışıyor; süslemeyi tek bir parçaya bırak."
        }
        (DesignIssue::NecklineConflict, Language::English) => {
            "High and low necklines clash; keep a single neckline in focus."
        }
        (DesignIssue::NecklineConflict, Language::Turkish) => {
            "Yüksek ve derin yakalar çakışıyor; tek bir yakayı öne çıkar."
        }
    }
}

fn source_name(source: OutfitSource, language: Language) -> &'static str {
    match (source, language) {
        (OutfitSource::Ai, Language::English) => "Styled Look",
        (OutfitSource::ColorHarmony, Language::English) => "Color Harmony Look",
        (OutfitSource::PatternMix, Language::English) => "Pattern Play Look",
        (OutfitSource::ContrastBalance, Language::English) => "Contrast Look",
        (OutfitSource::LastResort, Language::English) => "Wardrobe Basics",
        (OutfitSource::Ai, Language::Turkish) => "Stil Kombini",
        (OutfitSource::ColorHarmony, Language::Turkish) => "Renk Uyumu Kombini",
        (OutfitSource::PatternMix, Language::Turkish) => "Desen Oyunu Kombini",
        (OutfitSource::ContrastBalance, Language::Turkish) => "Kontrast Kombini",
        (OutfitSource::LastResort, Language::Turkish) => "Gardırop Temelleri",
    }
}

/// Localized display name, numbered from 1.
pub fn display_name(source: OutfitSource, index: usize, language: Language) -> String {
    format!("{} {}", source_name(source, language), index + 1)
}

// ==================== TIPS ====================

fn strategy_fragment(
    source: OutfitSource,
    evaluation: &OutfitEvaluation,
    language: Language,
) -> String {
    let harmony = evaluation
        .harmony
        .map(|class| harmony_label(class, language))
        .unwrap_or(match language {
            Language::English => "calm",
            Language::Turkish => "sakin",
        });

    match (source, language) {
        (OutfitSource::ColorHarmony | OutfitSource::Ai, Language::English) => {
            format!("The colors form a {harmony} palette, so the look reads calm and intentional.")
        }
        (OutfitSource::ColorHarmony | OutfitSource::Ai, Language::Turkish) => {
            format!("Renkler {harmony} bir palet oluşturuyor; kombin dengeli ve bilinçli görünüyor.")
        }
        (OutfitSource::PatternMix, Language::English) => {
            "One patterned piece leads while the solids keep it grounded.".to_string()
        }
        (OutfitSource::PatternMix, Language::Turkish) => {
            "Desenli parça öne çıkıyor, düz parçalar kombini dengeliyor.".to_string()
        }
        (OutfitSource::ContrastBalance, Language::English) => {
            "Light and dark pieces balance each other for a crisp contrast.".to_string()
        }
        (OutfitSource::ContrastBalance, Language::Turkish) => {
            "Açık ve koyu parçalar birbirini dengeleyerek net bir kontrast yaratıyor.".to_string()
        }
        (OutfitSource::LastResort, Language::English) => {
            "A simple combination from your wardrobe; add more pieces to unlock new ideas."
                .to_string()
        }
        (OutfitSource::LastResort, Language::Turkish) => {
            "Gardırobundan basit bir kombin; yeni fikirler için daha fazla parça ekle.".to_string()
        }
    }
}

fn context_fragment(ctx: &FormatContext<'_>) -> String {
    let occasion = occasion_label(ctx.occasion, ctx.language);
    let time = time_label(ctx.time_of_day, ctx.language);
    match (ctx.language, time) {
        (Language::English, Some(time)) => format!("Made for {occasion} in the {time}."),
        (Language::English, None) => format!("Made for {occasion}."),
        (Language::Turkish, Some(time)) => format!("{time} saatlerinde {occasion} için hazırlandı."),
        (Language::Turkish, None) => format!("{occasion} için hazırlandı."),
    }
}

/// Score breakdown, design suggestions and pattern reasoning.
fn premium_fragment(evaluation: &OutfitEvaluation, language: Language) -> String {
    let mut parts = Vec::new();
    parts.push(match language {
        Language::English => format!(
            "Color harmony {:.1}/10, pattern balance {:.1}/10, design coordination {}/10.",
            evaluation.color_score, evaluation.pattern_score, evaluation.design.score
        ),
        Language::Turkish => format!(
            "Renk uyumu {:.1}/10, desen dengesi {:.1}/10, tasarım uyumu {}/10.",
            evaluation.color_score, evaluation.pattern_score, evaluation.design.score
        ),
    });

    if let Some(mix) = &evaluation.weakest_mix {
        parts.push(match language {
            Language::English => format!("Pattern note: {} ({}/10).", mix.reason, mix.confidence),
            Language::Turkish => {
                let verdict = if mix.mixable { "uyumlu" } else { "çatışıyor" };
                format!("Desen notu: desenler {} ({}/10).", verdict, mix.confidence)
            }
        });
    }

    if evaluation.design.issues.is_empty() {
        parts.push(
            match language {
                Language::English => "Construction and formality line up well.",
                Language::Turkish => "Kesim ve resmiyet düzeyi birbiriyle uyumlu.",
            }
            .to_string(),
        );
    } else {
        for issue in &evaluation.design.issues {
            parts.push(describe_issue(issue, language).to_string());
        }
    }

    parts.join(" ")
}

/// Styling tips for an outfit. `base` (model-written tips) replaces the
/// templated strategy sentence when present.
pub fn styling_tips(
    source: OutfitSource,
    base: Option<&str>,
    evaluation: &OutfitEvaluation,
    ctx: &FormatContext<'_>,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    match base.map(str::trim).filter(|tips| !tips.is_empty()) {
        Some(tips) => parts.push(tips.to_string()),
        None => parts.push(strategy_fragment(source, evaluation, ctx.language)),
    }
    parts.push(context_fragment(ctx));
    if let Some(note) = weather_note(ctx.weather, ctx.language) {
        parts.push(note.to_string());
    }
    if ctx.is_premium {
        parts.push(premium_fragment(evaluation, ctx.language));
    }
    parts.join(" ")
}

// ==================== CANDIDATES ====================

/// Image references of the items, when any item has one.
pub fn reference_images(items: &[WardrobeItem]) -> Option<Vec<String>> {
    let images: Vec<String> = items
        .iter()
        .filter_map(|item| item.image_url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();
    (!images.is_empty()).then_some(images)
}

/// Use a generated image when available, otherwise the items' own images.
pub fn attach_image(
    candidate: &mut OutfitCandidate,
    generated: Option<String>,
    items: &[WardrobeItem],
) {
    match generated {
        Some(image) => {
            candidate.generated_image = Some(image);
            candidate.reference_images = None;
        }
        None => {
            candidate.generated_image = None;
            candidate.reference_images = reference_images(items);
        }
    }
}

/// Stable id derived from the outfit's item set.
pub fn outfit_id(prefix: &str, items: &[WardrobeItem]) -> String {
    let mut ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    ids.sort_unstable();
    let hash = blake3::hash(ids.join("\u{1f}").as_bytes()).to_hex().to_string();
    format!("{}-{}", prefix, &hash[..12])
}

fn item_names(items: &[WardrobeItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

fn occasion_of(ctx: &FormatContext<'_>) -> Option<String> {
    Some(ctx.occasion.trim().to_string()).filter(|o| !o.is_empty())
}

/// Candidate for a validated model proposal.
pub fn format_accepted(
    outfit: &AcceptedOutfit,
    index: usize,
    ctx: &FormatContext<'_>,
) -> OutfitCandidate {
    let refs: Vec<&WardrobeItem> = outfit.items.iter().collect();
    let evaluation = evaluate_outfit(&refs);

    let id = outfit
        .raw
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| outfit_id("ai", &outfit.items));
    let name = Some(outfit.raw.name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| display_name(OutfitSource::Ai, index, ctx.language));

    let mut candidate = OutfitCandidate {
        id,
        name,
        items: item_names(&outfit.items),
        item_ids: outfit.items.iter().map(|item| item.id.clone()).collect(),
        confidence: outfit.confidence,
        styling_tips: styling_tips(
            OutfitSource::Ai,
            Some(outfit.raw.styling_tips.as_str()),
            &evaluation,
            ctx,
        ),
        occasion: outfit
            .raw
            .occasion
            .clone()
            .filter(|o| !o.trim().is_empty())
            .or_else(|| occasion_of(ctx)),
        source: OutfitSource::Ai,
        generated_image: None,
        reference_images: None,
    };
    attach_image(&mut candidate, None, &outfit.items);
    candidate
}

/// Candidate for a fallback outfit; id and name follow the fallback index.
pub fn format_fallback(outfit: &FallbackOutfit, ctx: &FormatContext<'_>) -> OutfitCandidate {
    let refs: Vec<&WardrobeItem> = outfit.items.iter().collect();
    let evaluation = evaluate_outfit(&refs);

    let mut candidate = OutfitCandidate {
        id: format!("fallback-{}", outfit.index),
        name: display_name(outfit.source, outfit.index, ctx.language),
        items: item_names(&outfit.items),
        item_ids: outfit.items.iter().map(|item| item.id.clone()).collect(),
        confidence: outfit.confidence,
        styling_tips: styling_tips(outfit.source, None, &evaluation, ctx),
        occasion: occasion_of(ctx),
        source: outfit.source,
        generated_image: None,
        reference_images: None,
    };
    attach_image(&mut candidate, None, &outfit.items);
    candidate
}

#[cfg(test)]
#[path = "../tests/pipeline/formatter_tests.rs"]
mod tests;
