//! One outfit-generation invocation, end to end.
//!
//! prompt -> text provider -> parse -> validate -> fallback top-up -> format
//! -> optional images. Only an insufficient wardrobe reaches the caller as an
//! error; provider and parse failures are logged and absorbed.

use futures_util::future::join_all;
use std::collections::HashSet;

use crate::database::models::WardrobeItem;
use crate::services::config::StylistSettings;
use crate::services::stylist::analysis::descriptor::describe_item;
use crate::services::stylist::models::types::{
    GenerationRequest, GenerationResponse, Language, OutfitCandidate, OutfitSource, RawOutfit,
};
use crate::services::stylist::pipeline::fallback::generate_fallback;
use crate::services::stylist::pipeline::formatter::{
    attach_image, format_accepted, format_fallback, FormatContext,
};
use crate::services::stylist::pipeline::parse::parse_outfits;
use crate::services::stylist::pipeline::prompt::build_prompt;
use crate::services::stylist::pipeline::validator::validate_all;
use crate::services::stylist::provider::{ImageProvider, OutfitProvider};
use crate::types::errors::{StyleError, StyleResult, MIN_WARDROBE_ITEMS};

/// Usable snapshot of the request's wardrobe.
///
/// Items with a blank name are dropped, as are later items repeating an
/// earlier id. Items without an id get `item-{n}` from their position in the
/// request, with a numeric suffix when that id is already taken.
pub fn prepare_wardrobe(items: &[WardrobeItem]) -> StyleResult<Vec<WardrobeItem>> {
    let explicit: HashSet<&str> = items
        .iter()
        .filter(|item| !item.name.trim().is_empty())
        .map(|item| item.id.as_str())
        .filter(|id| !id.trim().is_empty())
        .collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut wardrobe = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            continue;
        }
        let mut item = item.clone();
        if item.id.trim().is_empty() {
            let base = format!("item-{}", idx);
            let mut id = base.clone();
            let mut n = 1;
            while explicit.contains(id.as_str()) || seen.contains(&id) {
                id = format!("{}-{}", base, n);
                n += 1;
            }
            item.id = id;
        }
        if !seen.insert(item.id.clone()) {
            log::warn!("Dropping '{}': id '{}' is already used", item.name, item.id);
            continue;
        }
        wardrobe.push(item);
    }

    if wardrobe.len() < MIN_WARDROBE_ITEMS {
        return Err(StyleError::InsufficientWardrobe {
            available: wardrobe.len(),
        });
    }
    Ok(wardrobe)
}

/// Text sent to the image provider for one outfit.
pub fn image_description(items: &[WardrobeItem], occasion: &str) -> String {
    let pieces: Vec<String> = items.iter().map(describe_item).collect();
    let occasion = occasion.trim();
    let occasion = if occasion.is_empty() { "casual" } else { occasion };
    format!(
        "Flat-lay fashion photo of a {} outfit on a plain light background, no people: {}.",
        occasion,
        pieces.join("; ")
    )
}

fn sorted_ids(items: &[WardrobeItem]) -> Vec<String> {
    let mut ids: Vec<String> = items.iter().map(|item| item.id.clone()).collect();
    ids.sort();
    ids
}

/// Ask the text provider for proposals; any failure yields none.
async fn fetch_proposals<P: OutfitProvider>(
    text: &P,
    prompt: &str,
) -> Vec<RawOutfit> {
    let body = match text.suggest(prompt).await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Outfit provider failed, using fallback: {}", e);
            return Vec::new();
        }
    };
    match parse_outfits(&body) {
        Ok(raws) => raws,
        Err(e) => {
            log::warn!("Unusable outfit response, using fallback: {}", e);
            Vec::new()
        }
    }
}

/// Replace reference images with generated ones where rendering succeeds.
async fn render_images<I: ImageProvider>(
    images: &I,
    outfits: &mut [(OutfitCandidate, Vec<WardrobeItem>)],
    occasion: &str,
) {
    let descriptions: Vec<String> = outfits
        .iter()
        .map(|(_, items)| image_description(items, occasion))
        .collect();
    let results = join_all(descriptions.iter().map(|d| images.render(d))).await;

    for ((candidate, items), result) in outfits.iter_mut().zip(results) {
        match result {
            Ok(image) => attach_image(candidate, Some(image.reference), items),
            Err(e) => {
                log::warn!("Image generation failed for '{}': {}", candidate.name, e);
                attach_image(candidate, None, items);
            }
        }
    }
}

/// Generate outfits for one request.
pub async fn generate_outfits<P: OutfitProvider, I: ImageProvider>(
    request: &GenerationRequest,
    settings: &StylistSettings,
    text: &P,
    images: &I,
) -> StyleResult<GenerationResponse> {
    let wardrobe = prepare_wardrobe(&request.wardrobe_items)?;
    let language = request
        .language
        .as_deref()
        .map(Language::from_code)
        .unwrap_or(settings.language);
    let count = settings.outfit_count_for(request.is_premium);
    let ctx = FormatContext {
        occasion: &request.occasion,
        time_of_day: &request.time_of_day,
        weather: &request.weather,
        language,
        is_premium: request.is_premium,
    };

    log::info!(
        "Generating {} outfit(s) from {} items (premium: {})",
        count,
        wardrobe.len(),
        request.is_premium
    );

    let prompt = build_prompt(request, &wardrobe, count, language);
    let raws = fetch_proposals(text, &prompt).await;
    let mut accepted = validate_all(&raws, &wardrobe);
    accepted.truncate(count);

    let mut outfits: Vec<(OutfitCandidate, Vec<WardrobeItem>)> = accepted
        .iter()
        .enumerate()
        .map(|(idx, outfit)| (format_accepted(outfit, idx, &ctx), outfit.items.clone()))
        .collect();

    let mut used_fallback = false;
    if outfits.len() < count {
        let taken: Vec<Vec<String>> = accepted.iter().map(|a| sorted_ids(&a.items)).collect();
        let have_accepted = !outfits.is_empty();
        for fallback in generate_fallback(&wardrobe, count - outfits.len(), &taken) {
            // The last resort ignores `taken`, so it only stands in for an empty result.
            if have_accepted && fallback.source == OutfitSource::LastResort {
                continue;
            }
            used_fallback = true;
            outfits.push((format_fallback(&fallback, &ctx), fallback.items));
        }
    }

    if request.is_premium && settings.image_generation && settings.has_api_key() {
        render_images(images, &mut outfits, &request.occasion).await;
    }

    log::info!(
        "Returning {} outfit(s) (fallback: {})",
        outfits.len(),
        used_fallback
    );
    Ok(GenerationResponse {
        outfits: outfits.into_iter().map(|(candidate, _)| candidate).collect(),
        used_fallback,
    })
}

#[cfg(test)]
#[path = "../tests/pipeline/generate_tests.rs"]
mod tests;
