use super::*;
use crate::test_utils::colored;

fn request(occasion: &str) -> GenerationRequest {
    GenerationRequest {
        occasion: occasion.to_string(),
        time_of_day: "evening".to_string(),
        weather: String::new(),
        user_gender: Some("female".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_prompt_sections_and_items() {
    let wardrobe = vec![
        colored("item-0", "Silk Blouse", "Tops", "cream", None),
        colored("item-1", "Pleated Skirt", "Bottoms", "navy", Some("solid")),
    ];
    let prompt = build_prompt(&request("office"), &wardrobe, 3, Language::English);

    assert!(prompt.contains("Suggest 3 distinct outfits"));
    for section in ["## Context", "## Wardrobe", "## Styling rules", "## Output format"] {
        assert!(prompt.contains(section), "missing {section}");
    }
    assert!(prompt.contains("- Occasion: office"));
    assert!(prompt.contains("- Time of day: evening"));
    assert!(prompt.contains("- Weather: mild"));
    assert!(prompt.contains("- Dressing for: female"));
    assert!(prompt.contains("- ID: item-0, Category: Tops, Silk Blouse"));
    assert!(prompt.contains("- ID: item-1, Category: Bottoms, Pleated Skirt"));
    assert!(!prompt.contains("Turkish"));
}

#[test]
fn test_prompt_defaults_and_language() {
    let mut req = request("  ");
    req.user_gender = None;
    let prompt = build_prompt(&req, &[], 1, Language::Turkish);
    assert!(prompt.contains("- Occasion: casual"));
    assert!(!prompt.contains("Dressing for"));
    assert!(prompt.contains("in Turkish"));
}
