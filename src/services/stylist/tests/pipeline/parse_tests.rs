use super::*;

#[test]
fn test_bare_array() {
    let outfits = parse_outfits(
        r#"[{"name": "Weekend", "items": ["Blue Jeans", "White Tee"], "confidence": 8, "styling_tips": "Roll the cuffs."}]"#,
    )
    .unwrap();
    assert_eq!(outfits.len(), 1);
    assert_eq!(outfits[0].items, vec!["Blue Jeans", "White Tee"]);
    assert_eq!(outfits[0].confidence, Some(8.0));
}

#[test]
fn test_fenced_object_with_outfits_field() {
    let text = "```json\n{\"outfits\": [{\"name\": \"Office\", \"items\": [\"Shirt\"], \"confidence\": \"7.5\"}]}\n```";
    let outfits = parse_outfits(text).unwrap();
    assert_eq!(outfits[0].name, "Office");
    assert_eq!(outfits[0].confidence, Some(7.5));
    assert!(outfits[0].item_ids.is_none());
}

#[test]
fn test_array_embedded_in_prose() {
    let text = "Here are your outfits:\n[{\"name\": \"A\", \"items\": [], \"item_ids\": [\"item-0\"]}]\nEnjoy!";
    let outfits = parse_outfits(text).unwrap();
    assert_eq!(outfits[0].item_ids, Some(vec!["item-0".to_string()]));
}

#[test]
fn test_unparseable_and_empty() {
    assert!(matches!(parse_outfits("Sorry, I cannot help."), Err(ProviderError::Decode(_))));
    assert!(matches!(parse_outfits("  ```\n```  "), Err(ProviderError::EmptyResponse)));
    assert!(matches!(parse_outfits(""), Err(ProviderError::EmptyResponse)));
}

#[test]
fn test_strip_code_fences() {
    assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
    assert_eq!(strip_code_fences("[1]"), "[1]");
}
