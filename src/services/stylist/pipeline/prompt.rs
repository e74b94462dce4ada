//! Prompt assembly for the text-generation call.

use crate::database::models::WardrobeItem;
use crate::services::stylist::analysis::descriptor::describe_item;
use crate::services::stylist::models::types::{GenerationRequest, Language};

/// Context block values substituted when the request leaves them blank.
const DEFAULT_OCCASION: &str = "casual";
const DEFAULT_TIME_OF_DAY: &str = "day";
const DEFAULT_WEATHER: &str = "mild";

const STYLING_RULES: &[&str] = &[
    "Every outfit needs an upper-body and a lower-body garment, or one full-body garment such as a dress.",
    "Never combine a T-shirt with a sweater, two shirts or blouses, or two outer layers.",
    "Only use items from the wardrobe list, copying their names exactly.",
    "Prefer monochromatic or analogous colors; complementary colors work as a single accent.",
    "Pair at most two patterns, and only when they differ in scale; let solid pieces anchor patterned ones.",
    "Keep formality consistent across the outfit.",
    "Dress for the weather and the time of day.",
];

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Build the instruction text for one generation call.
///
/// `wardrobe` is the prepared inventory (ids assigned, blanks removed);
/// the request supplies only the context fields.
pub fn build_prompt(
    request: &GenerationRequest,
    wardrobe: &[WardrobeItem],
    outfit_count: usize,
    language: Language,
) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are a personal stylist. ");
    prompt.push_str(&format!(
        "Suggest {} distinct outfits built only from the user's wardrobe below.\n\n",
        outfit_count
    ));

    prompt.push_str("## Context\n");
    prompt.push_str(&format!(
        "- Occasion: {}\n",
        or_default(&request.occasion, DEFAULT_OCCASION)
    ));
    prompt.push_str(&format!(
        "- Time of day: {}\n",
        or_default(&request.time_of_day, DEFAULT_TIME_OF_DAY)
    ));
    prompt.push_str(&format!(
        "- Weather: {}\n",
        or_default(&request.weather, DEFAULT_WEATHER)
    ));
    if let Some(gender) = request.user_gender.as_deref().filter(|g| !g.trim().is_empty()) {
        prompt.push_str(&format!("- Dressing for: {}\n", gender.trim()));
    }

    prompt.push_str("\n## Wardrobe\n");
    for item in wardrobe {
        prompt.push_str(&format!(
            "- ID: {}, Category: {}, {}\n",
            item.id,
            or_default(&item.category, "unknown"),
            describe_item(item)
        ));
    }

    prompt.push_str("\n## Styling rules\n");
    for rule in STYLING_RULES {
        prompt.push_str(&format!("- {}\n", rule));
    }

    prompt.push_str("\n## Output format\n");
    prompt.push_str(
        "Output ONLY a JSON array. Each element is an object with the fields \
         `name` (string), `items` (array of exact item names), `item_ids` (array of the IDs above), \
         `confidence` (integer 1-10) and `styling_tips` (string).\n",
    );
    if language == Language::Turkish {
        prompt.push_str("Write `name` and `styling_tips` in Turkish.\n");
    }

    prompt
}

#[cfg(test)]
#[path = "../tests/pipeline/prompt_tests.rs"]
mod tests;
