//! HTTP server for studybrief (axum).
//!
//! Listens on http://127.0.0.1:5001 by default and serves:
//!
//! - `POST /analyze`: `{ "text": ... }` in, `{ "status": "success", "analysis": {...} }` out.
//! - `GET /annotations`, `POST /annotations`: the file-backed annotation list.
//! - Anything else: files from [`ServeConfig::static_dir`] when one is configured.
//!
//! All routes allow any origin (CORS).
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`ServeConfig`], [`ServeContext`].

mod analyze;
mod annotations;
mod app;
pub mod response;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use studybrief::{AnnotationStore, Analyzer};
use tokio::net::TcpListener;
use tracing::info;

pub use app::{ServeConfig, DEFAULT_ADDR, DEFAULT_ANNOTATIONS_PATH};

use app::{router, AppState};

/// Everything the handlers share. Built once at startup.
pub struct ServeContext {
    pub analyzer: Analyzer,
    pub annotations: AnnotationStore,
    /// Student UI directory; `None` serves the API only.
    pub static_dir: Option<PathBuf>,
}

/// Serves on an existing listener until `shutdown` resolves. Tests bind `127.0.0.1:0`
/// and pass the listener in.
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    ctx: ServeContext,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("studybrief listening on http://{}", addr);

    let state = Arc::new(AppState {
        analyzer: ctx.analyzer,
        annotations: ctx.annotations,
    });
    let app = router(state, ctx.static_dir.as_deref());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Opens the annotation store, binds `config.addr`, and serves until Ctrl-C.
pub async fn run_serve(
    config: &ServeConfig,
    analyzer: Analyzer,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let annotations = AnnotationStore::open(&config.annotations_path).await?;
    info!(path = %annotations.path().display(), "annotation store ready");
    if let Some(dir) = &config.static_dir {
        info!(dir = %dir.display(), "serving static files");
    }
    let listener = TcpListener::bind(&config.addr).await?;
    let ctx = ServeContext {
        analyzer,
        annotations,
        static_dir: config.static_dir.clone(),
    };
    run_serve_on_listener(listener, ctx, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("ctrl-c received, shutting down");
    })
    .await
}
