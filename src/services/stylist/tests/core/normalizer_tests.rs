use super::*;

#[test]
fn test_normalize_name_transliterates_and_strips_punctuation() {
    assert_eq!(normalize_name("Beyaz Tişört"), "beyaz tisort");
    assert_eq!(normalize_name("  T-Shirt,   (Navy)  "), "t shirt navy");
    assert_eq!(normalize_name("Gömlek"), "gomlek");
}

#[test]
fn test_compact_name_removes_all_whitespace() {
    assert_eq!(compact_name("T-Shirt"), "tshirt");
    assert_eq!(compact_name("Mavi Kot Pantolon"), "mavikotpantolon");
}

#[test]
fn test_significant_tokens_skip_short_and_duplicates() {
    let tokens = significant_tokens("Blue jeans & a blue top");
    assert_eq!(tokens, vec!["blue", "jeans", "top"]);
}

#[test]
fn test_short_keywords_need_whole_token() {
    assert!(contains_keyword("white tee", "tee"));
    assert!(!contains_keyword("steel watch", "tee"));
    assert!(contains_keyword("crop tops", "top"));
    assert!(!contains_keyword("laptop bag", "top"));
}

#[test]
fn test_long_keywords_match_substrings_of_compact_form() {
    assert!(contains_keyword("grey sweatshirt", "shirt"));
    assert!(contains_keyword("t shirt", "tshirt"));
    assert!(contains_keyword("striped tshirt", "t shirt"));
    assert!(!contains_keyword("wool coat", "shirt"));
}

#[test]
fn test_normalize_parts_skips_missing_and_blank() {
    let normalized = normalize_parts(&[Some("Tops"), None, Some("  "), Some("T-Shirt")]);
    assert_eq!(normalized, "tops t shirt");
}
