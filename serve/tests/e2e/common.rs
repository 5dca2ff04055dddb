//! Shared helpers for e2e tests.

use std::sync::{Arc, Mutex};

use serve::{run_serve_on_listener, ServeContext};
use studybrief::{
    AnalysisResult, AnnotationStore, Analyzer, ChatOpenAI, LlmClient, ProviderSettings,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running server plus what is needed to stop it and inspect its files.
pub struct TestServer {
    pub base_url: String,
    pub dir: tempfile::TempDir,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn annotations_path(&self) -> std::path::PathBuf {
        self.dir.path().join("annotation.json")
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(std::time::Duration::from_secs(5), &mut self.handle).await;
    }
}

/// Binds a random port and serves with `llm` behind the analyzer and a fresh annotation file.
pub async fn spawn_server(llm: Arc<dyn LlmClient>) -> TestServer {
    spawn_server_with_static(llm, None).await
}

/// Like [`spawn_server`], also serving files from `static_dir` for unmatched paths.
pub async fn spawn_server_with_static(
    llm: Arc<dyn LlmClient>,
    static_dir: Option<std::path::PathBuf>,
) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let annotations = AnnotationStore::open(dir.path().join("annotation.json"))
        .await
        .unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let ctx = ServeContext {
        analyzer: Analyzer::new(llm),
        annotations,
        static_dir,
    };
    let handle = tokio::spawn(run_serve_on_listener(listener, ctx, async move {
        let _ = shutdown_rx.await;
    }));
    TestServer {
        base_url: format!("http://{}", addr),
        dir,
        shutdown_tx: Some(shutdown_tx),
        handle,
    }
}

/// POSTs a raw body to `/analyze` and returns status plus parsed JSON.
pub async fn post_analyze(server: &TestServer, body: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(server.url("/analyze"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, serde_json::from_str(&text).unwrap())
}

pub fn analysis_of(json: &serde_json::Value) -> AnalysisResult {
    serde_json::from_value(json["analysis"].clone()).unwrap()
}

/// Real OpenAI client pointed at a port nothing listens on.
pub fn unreachable_llm() -> Arc<dyn LlmClient> {
    let settings = ProviderSettings {
        api_key: "test-key".into(),
        api_base: Some("http://127.0.0.1:1/v1".into()),
        model: "gpt-3.5-turbo".into(),
    };
    Arc::new(ChatOpenAI::from_settings(&settings))
}

/// Log lines written by the server while a [`capture_logs`] guard is alive.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Installs a thread-local subscriber that records WARN and above.
///
/// `#[tokio::test]` runs the server on the test thread, so its events land here.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
