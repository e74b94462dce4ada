//! Extraction of outfit proposals from free-form model output.

use serde::Deserialize;

use crate::services::stylist::models::types::RawOutfit;
use crate::types::errors::ProviderError;

#[derive(Deserialize)]
struct OutfitEnvelope {
    outfits: Vec<RawOutfit>,
}

/// Remove a surrounding Markdown code fence (```json ... ```), if present.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn parse_json(text: &str) -> Option<Vec<RawOutfit>> {
    if let Ok(outfits) = serde_json::from_str::<Vec<RawOutfit>>(text) {
        return Some(outfits);
    }
    serde_json::from_str::<OutfitEnvelope>(text)
        .ok()
        .map(|envelope| envelope.outfits)
}

/// Parse the outfit list from model output.
///
/// Accepted shapes, tried in order: a bare JSON array, an object with an
/// `outfits` array, and a JSON array embedded in surrounding prose.
pub fn parse_outfits(text: &str) -> Result<Vec<RawOutfit>, ProviderError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    if let Some(outfits) = parse_json(body) {
        return Ok(outfits);
    }

    if let (Some(start), Some(end)) = (body.find('['), body.rfind(']')) {
        if start < end {
            if let Ok(outfits) = serde_json::from_str::<Vec<RawOutfit>>(&body[start..=end]) {
                return Ok(outfits);
            }
        }
    }

    Err(ProviderError::Decode(format!(
        "no outfit array in response ({} chars)",
        body.len()
    )))
}

#[cfg(test)]
#[path = "../tests/pipeline/parse_tests.rs"]
mod tests;
