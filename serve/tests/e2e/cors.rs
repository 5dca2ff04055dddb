use std::sync::Arc;

use studybrief::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_any_origin_is_allowed() {
    let server = common::spawn_server(Arc::new(MockLlm::with_reply("A\n\nB\n\nC"))).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/analyze"))
        .header("origin", "http://localhost:8000")
        .header("content-type", "application/json")
        .body(r#"{"text":"x"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    server.stop().await;
}

#[tokio::test]
async fn e2e_preflight_succeeds() {
    let server = common::spawn_server(Arc::new(MockLlm::with_reply("unused"))).await;

    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, server.url("/annotations"))
        .header("origin", "http://example.org")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success(), "status {}", resp.status());
    assert!(resp.headers().contains_key("access-control-allow-methods"));

    server.stop().await;
}
