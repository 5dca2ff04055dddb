use std::sync::Arc;

use studybrief::MockLlm;

use super::common;

fn client_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<html><body>Study helper</body></html>",
    )
    .unwrap();
    std::fs::write(dir.path().join("script.js"), "console.log('ready');").unwrap();
    dir
}

#[tokio::test]
async fn e2e_static_dir_serves_ui_alongside_api() {
    let ui = client_dir();
    let server = common::spawn_server_with_static(
        Arc::new(MockLlm::with_reply("A\n\nB\n\nC")),
        Some(ui.path().to_path_buf()),
    )
    .await;
    let client = reqwest::Client::new();

    let index = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(index.status().as_u16(), 200);
    assert!(index.text().await.unwrap().contains("Study helper"));

    let script = client.get(server.url("/script.js")).send().await.unwrap();
    assert_eq!(script.status().as_u16(), 200);
    assert_eq!(script.text().await.unwrap(), "console.log('ready');");

    let missing = client.get(server.url("/nope.css")).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    let (status, _) = common::post_analyze(&server, r#"{"text":"Atoms"}"#).await;
    assert_eq!(status, 200, "API routes take precedence over static files");

    server.stop().await;
}

#[tokio::test]
async fn e2e_without_static_dir_unknown_paths_are_404() {
    let server = common::spawn_server(Arc::new(MockLlm::with_reply("unused"))).await;

    let resp = reqwest::get(server.url("/index.html")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    server.stop().await;
}
