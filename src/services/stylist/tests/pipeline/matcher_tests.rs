use super::*;
use crate::test_utils::garment;

fn wardrobe() -> Vec<WardrobeItem> {
    vec![
        garment("1", "Beyaz Tişört", "Tops"),
        garment("2", "Mavi Kot Pantolon", "Bottoms"),
        garment("3", "Navy Wool Blazer", "Outerwear"),
        garment("4", "T-Shirt", "Tops"),
        garment("5", "Black Leather Chelsea Boots", "Shoes"),
    ]
}

#[test]
fn test_exact_match_is_case_insensitive() {
    let items = wardrobe();
    let (item, strategy) = resolve_name("  mavi kot pantolon ", &items).unwrap();
    assert_eq!(item.id, "2");
    assert_eq!(strategy, MatchStrategy::Exact);
    assert!(match_exact("Navy Blazer", &items).is_none());
}

#[test]
fn test_normalized_match_transliterates() {
    let items = wardrobe();
    assert!(match_exact("Beyaz Tisort", &items).is_none());
    assert_eq!(match_normalized("Beyaz Tisort!", &items).unwrap().id, "1");
    assert_eq!(resolve_name("beyaz tisort", &items).unwrap().1, MatchStrategy::Normalized);
}

#[test]
fn test_compact_match_ignores_spacing() {
    let items = wardrobe();
    assert!(match_normalized("TShirt", &items).is_none());
    assert_eq!(match_compact("TShirt", &items).unwrap().id, "4");
    assert_eq!(match_normalized("T Shirt", &items).unwrap().id, "4");
}

#[test]
fn test_substring_match_either_direction() {
    let items = wardrobe();
    assert_eq!(match_substring("Chelsea Boots", &items).unwrap().id, "5");
    assert_eq!(
        match_substring("Classic Navy Wool Blazer Jacket", &items).unwrap().id,
        "3"
    );
    assert!(match_substring("ab", &items).is_none());
}

#[test]
fn test_keyword_overlap_match() {
    let items = wardrobe();
    let (item, strategy) = resolve_name("Navy Blazer in Wool", &items).unwrap();
    assert_eq!(item.id, "3");
    assert_eq!(strategy, MatchStrategy::KeywordOverlap);
    assert!(match_keyword_overlap("Red Scarf", &items).is_none());
}

#[test]
fn test_ambiguous_strategy_yields_no_match() {
    let items = vec![
        garment("a", "White Shirt", "Tops"),
        garment("b", "Blue Shirt", "Tops"),
    ];
    assert!(match_substring("Shirt", &items).is_none());
    assert!(match_keyword_overlap("Shirt", &items).is_none());
    assert!(resolve_name("Shirt", &items).is_none());
}

#[test]
fn test_keyword_overlap_prefers_closer_name() {
    let items = vec![
        garment("a", "Grey Wool Trousers", "Bottoms"),
        garment("b", "Grey Wool Coat Long", "Outerwear"),
    ];
    // Both share "grey wool" (2 of 3 tokens); edit similarity decides.
    assert_eq!(match_keyword_overlap("Grey Wool Trouser", &items).unwrap().id, "a");
}

#[test]
fn test_token_overlap_ratio() {
    let a = vec!["navy".to_string(), "wool".to_string(), "blazer".to_string()];
    let b = vec!["navy".to_string(), "blazer".to_string()];
    assert_eq!(token_overlap(&a, &b), 1.0);
    assert_eq!(token_overlap(&a, &[]), 0.0);
}
