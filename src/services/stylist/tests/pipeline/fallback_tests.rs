use super::*;
use crate::test_utils::{colored, garment};

fn ids(items: &[WardrobeItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

fn refs(items: &[&WardrobeItem]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn wardrobe() -> Vec<WardrobeItem> {
    vec![
        colored("t1", "Navy Shirt", "Tops", "navy", None),
        colored("t2", "White Striped Tee", "Tops", "white", Some("striped")),
        colored("b1", "Blue Jeans", "Bottoms", "blue", None),
        colored("b2", "Black Trousers", "Bottoms", "black", None),
        colored("s1", "Indigo Loafers", "Shoes", "indigo", None),
        colored("s2", "Black Boots", "Shoes", "black", None),
    ]
}

#[test]
fn test_two_items_yield_last_resort_outfit() {
    let wardrobe = vec![
        garment("1", "Beyaz Tişört", "Tops"),
        garment("2", "Mavi Kot Pantolon", "Bottoms"),
    ];
    let outfits = generate_fallback(&wardrobe, 3, &[]);
    assert_eq!(outfits.len(), 1);
    assert_eq!(outfits[0].source, OutfitSource::LastResort);
    assert_eq!(ids(&outfits[0].items), vec!["1", "2"]);
    assert!((1..=10).contains(&outfits[0].confidence));
}

#[test]
fn test_too_small_wardrobe_yields_nothing() {
    let wardrobe = vec![garment("1", "Beyaz Tişört", "Tops")];
    assert!(generate_fallback(&wardrobe, 3, &[]).is_empty());
    assert!(generate_fallback(&[], 3, &[]).is_empty());
}

#[test]
fn test_last_resort_takes_at_most_four_items() {
    let wardrobe: Vec<WardrobeItem> = (0..6)
        .map(|i| garment(&i.to_string(), &format!("Mystery {i}"), "Misc"))
        .collect();
    let outfits = generate_fallback(&wardrobe, 2, &[]);
    assert_eq!(outfits.len(), 1);
    assert_eq!(ids(&outfits[0].items), vec!["0", "1", "2", "3"]);
}

#[test]
fn test_partition_by_role() {
    let mut items = wardrobe();
    items.push(garment("d1", "Summer Dress", "Dresses"));
    items.push(garment("o1", "Trench Coat", "Outerwear"));
    items.push(garment("a1", "Leather Belt", "Accessories"));
    let partition = WardrobePartition::new(&items);
    assert_eq!(refs(&partition.tops), vec!["t1", "t2"]);
    assert_eq!(refs(&partition.bottoms), vec!["b1", "b2"]);
    assert_eq!(refs(&partition.footwear), vec!["s1", "s2"]);
    assert_eq!(refs(&partition.dresses), vec!["d1"]);
    assert_eq!(refs(&partition.outerwear), vec!["o1"]);
    assert_eq!(refs(&partition.accessories), vec!["a1"]);
}

#[test]
fn test_color_harmony_outfit() {
    let items = wardrobe();
    let partition = WardrobePartition::new(&items);
    let outfit = color_harmony_outfit(&partition, 0).unwrap();
    // navy 230, blue 220, indigo 245: all within 30 degrees
    assert_eq!(refs(&outfit), vec!["t1", "b1", "s1"]);
}

#[test]
fn test_pattern_mix_requires_compatible_patterns() {
    let items = vec![
        colored("t1", "Striped Shirt", "Tops", "white", Some("striped")),
        colored("b1", "Check Trousers", "Bottoms", "gray", Some("check")),
        colored("s1", "Loafers", "Shoes", "black", None),
    ];
    let partition = WardrobePartition::new(&items);
    // stripe (medium, 4) with check (medium, 6) mixes at 5, below the bar
    assert!(pattern_mix_outfit(&partition, 0).is_none());

    let items = vec![
        colored("t1", "Striped Shirt", "Tops", "white", Some("striped")),
        colored("b1", "Floral Skirt", "Bottoms", "pink", Some("large floral")),
        colored("s1", "Loafers", "Shoes", "black", None),
    ];
    let partition = WardrobePartition::new(&items);
    let outfit = pattern_mix_outfit(&partition, 0).unwrap();
    assert_eq!(refs(&outfit), vec!["t1", "b1", "s1"]);
}

#[test]
fn test_pattern_mix_anchored_on_bottom() {
    let items = vec![
        colored("t1", "Plain Shirt", "Tops", "white", None),
        colored("b1", "Plaid Trousers", "Bottoms", "gray", Some("plaid")),
        colored("s1", "Loafers", "Shoes", "black", None),
    ];
    let partition = WardrobePartition::new(&items);
    let outfit = pattern_mix_outfit(&partition, 0).unwrap();
    assert_eq!(refs(&outfit), vec!["t1", "b1", "s1"]);
}

#[test]
fn test_contrast_outfit_pairs_light_with_dark() {
    let items = vec![
        colored("t1", "White Shirt", "Tops", "white", None),
        colored("b1", "Blue Jeans", "Bottoms", "blue", None),
        colored("b2", "Black Trousers", "Bottoms", "black", None),
        colored("s1", "Loafers", "Shoes", "brown", None),
    ];
    let partition = WardrobePartition::new(&items);
    let outfit = contrast_outfit(&partition, 0).unwrap();
    assert_eq!(refs(&outfit), vec!["t1", "b2", "s1"]);
}

#[test]
fn test_strategies_rotate_and_skip_duplicates() {
    let items = wardrobe();
    let outfits = generate_fallback(&items, 3, &[]);
    assert_eq!(outfits.len(), 3);
    assert_eq!(
        outfits.iter().map(|o| o.source).collect::<Vec<_>>(),
        vec![
            OutfitSource::ColorHarmony,
            OutfitSource::PatternMix,
            OutfitSource::ColorHarmony,
        ]
    );
    assert_eq!(outfits.iter().map(|o| o.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(ids(&outfits[2].items), vec!["t2", "b2", "s2"]);

    let mut sets: Vec<Vec<String>> = outfits
        .iter()
        .map(|o| {
            let mut set: Vec<String> = o.items.iter().map(|i| i.id.clone()).collect();
            set.sort();
            set
        })
        .collect();
    sets.dedup();
    assert_eq!(sets.len(), 3);
    for outfit in &outfits {
        assert!(outfit.items.len() >= MIN_STRATEGY_ITEMS);
        assert!((1..=CONFIDENCE_CEILING).contains(&outfit.confidence));
    }
}

#[test]
fn test_taken_item_sets_are_skipped() {
    let items = wardrobe();
    let taken = vec![vec!["b1".to_string(), "s1".to_string(), "t1".to_string()]];
    let outfits = generate_fallback(&items, 1, &taken);
    assert_eq!(outfits.len(), 1);
    assert_eq!(outfits[0].source, OutfitSource::PatternMix);
}
