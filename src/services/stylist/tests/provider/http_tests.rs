use super::*;

fn chat(json: &str) -> ChatResponse {
    serde_json::from_str(json).unwrap()
}

fn images(json: &str) -> ImageResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_chat_content_takes_first_non_empty_choice() {
    let response = chat(
        r#"{"choices":[{"message":{"content":"  "}},{"message":{"content":"[{\"name\":\"A\"}]"}}]}"#,
    );
    assert_eq!(chat_content(response).unwrap(), r#"[{"name":"A"}]"#);
}

#[test]
fn test_chat_content_empty() {
    assert!(matches!(
        chat_content(chat(r#"{"choices":[]}"#)),
        Err(ProviderError::EmptyResponse)
    ));
    assert!(matches!(
        chat_content(chat(r#"{"choices":[{"message":{"content":null}}]}"#)),
        Err(ProviderError::EmptyResponse)
    ));
}

#[test]
fn test_image_reference_url_and_base64() {
    let by_url = image_reference(images(r#"{"data":[{"url":"https://img.example/a.png"}]}"#)).unwrap();
    assert_eq!(by_url.reference, "https://img.example/a.png");

    let inline = image_reference(images(r#"{"data":[{"b64_json":"QUJD"}]}"#)).unwrap();
    assert_eq!(inline.reference, "data:image/png;base64,QUJD");
}

#[test]
fn test_image_reference_errors() {
    assert!(matches!(
        image_reference(images(r#"{"data":[]}"#)),
        Err(ProviderError::EmptyResponse)
    ));
    assert!(matches!(
        image_reference(images(r#"{"data":[{}]}"#)),
        Err(ProviderError::Decode(_))
    ));
}

#[tokio::test]
async fn test_missing_api_key_is_not_configured() {
    let settings = StylistSettings::default();
    let text = HttpOutfitProvider::from_settings(&settings).unwrap();
    assert!(matches!(
        text.suggest("hi").await,
        Err(ProviderError::NotConfigured(_))
    ));

    let image = HttpImageProvider::from_settings(&settings).unwrap();
    assert!(matches!(
        image.render("an outfit").await,
        Err(ProviderError::NotConfigured(_))
    ));
}
