use std::sync::Arc;

use studybrief::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_missing_text_is_400_without_provider_call() {
    let llm = Arc::new(MockLlm::with_reply("unused"));
    let server = common::spawn_server(llm.clone()).await;

    for body in [r#"{}"#, r#"{"message":"hi"}"#, "not valid json", ""] {
        let (status, json) = common::post_analyze(&server, body).await;
        assert_eq!(status, 400, "body {:?}", body);
        assert_eq!(json, serde_json::json!({"error": "No text provided"}));
    }
    assert_eq!(llm.call_count(), 0);

    server.stop().await;
}

#[tokio::test]
async fn e2e_blank_text_is_400_without_provider_call() {
    let llm = Arc::new(MockLlm::with_reply("unused"));
    let server = common::spawn_server(llm.clone()).await;

    for body in [r#"{"text":""}"#, r#"{"text":"   \n\t "}"#] {
        let (status, json) = common::post_analyze(&server, body).await;
        assert_eq!(status, 400, "body {:?}", body);
        assert_eq!(json, serde_json::json!({"error": "Empty text provided"}));
    }
    assert_eq!(llm.call_count(), 0);

    server.stop().await;
}

#[tokio::test]
async fn e2e_non_string_text_is_generic_500() {
    let llm = Arc::new(MockLlm::with_reply("unused"));
    let server = common::spawn_server(llm.clone()).await;

    let (status, json) = common::post_analyze(&server, r#"{"text": 12}"#).await;

    assert_eq!(status, 500);
    assert_eq!(
        json,
        serde_json::json!({"error": "Could not analyze the text. Please try again."})
    );
    assert_eq!(llm.call_count(), 0);

    server.stop().await;
}

#[tokio::test]
async fn e2e_get_analyze_is_not_allowed() {
    let server = common::spawn_server(Arc::new(MockLlm::with_reply("unused"))).await;

    let resp = reqwest::get(server.url("/analyze")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 405);

    server.stop().await;
}
