use std::sync::Arc;

use serve::response::{ErrorResponse, ANALYZE_FAILED};
use studybrief::MockLlm;

use super::common;

#[tokio::test]
async fn e2e_provider_failure_is_generic_500() {
    let llm = Arc::new(MockLlm::failing("upstream exploded: secret detail"));
    let server = common::spawn_server(llm.clone()).await;

    let (status, json) = common::post_analyze(&server, r#"{"text":"Cells"}"#).await;

    assert_eq!(status, 500);
    let body: ErrorResponse = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(body.error, ANALYZE_FAILED);
    assert!(!json.to_string().contains("secret detail"));
    assert_eq!(llm.call_count(), 1, "failed call is not retried");

    server.stop().await;
}

#[tokio::test]
async fn e2e_provider_failure_detail_goes_to_server_log() {
    let (logs, _guard) = common::capture_logs();
    let server =
        common::spawn_server(Arc::new(MockLlm::failing("upstream exploded: secret detail")))
            .await;

    let (status, json) = common::post_analyze(&server, r#"{"text":"Cells"}"#).await;
    server.stop().await;

    assert_eq!(status, 500);
    assert!(!json.to_string().contains("secret detail"));
    let logged = logs.contents();
    assert!(
        logged.contains("upstream exploded: secret detail"),
        "server log: {}",
        logged
    );
    assert!(logged.contains("ERROR"), "server log: {}", logged);
}

#[tokio::test]
async fn e2e_unreachable_provider_is_generic_500() {
    let server = common::spawn_server(common::unreachable_llm()).await;

    let (status, json) = common::post_analyze(&server, r#"{"text":"Gravity"}"#).await;

    assert_eq!(status, 500);
    assert_eq!(json, serde_json::json!({"error": ANALYZE_FAILED}));

    server.stop().await;
}
