//! Axum app: server configuration, shared state, router.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use studybrief::{AnnotationStore, Analyzer};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::analyze::analyze;
use super::annotations::{add_annotation, list_annotations};

pub const DEFAULT_ADDR: &str = "127.0.0.1:5001";
pub const DEFAULT_ANNOTATIONS_PATH: &str = "annotation.json";

/// Listening address, annotation file location and optional UI directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    pub addr: String,
    pub annotations_path: PathBuf,
    /// Served for every path no API route matches (`index.html` for directories).
    pub static_dir: Option<PathBuf>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            annotations_path: PathBuf::from(DEFAULT_ANNOTATIONS_PATH),
            static_dir: None,
        }
    }
}

impl ServeConfig {
    /// Builds from environment variables, falling back to [`Default`] for unset ones.
    ///
    /// - `STUDYBRIEF_ADDR` (default `127.0.0.1:5001`)
    /// - `STUDYBRIEF_ANNOTATIONS` (default `annotation.json`)
    /// - `STUDYBRIEF_STATIC_DIR` (default: no static files)
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            addr: config::var("STUDYBRIEF_ADDR").unwrap_or(default.addr),
            annotations_path: config::var("STUDYBRIEF_ANNOTATIONS")
                .map(PathBuf::from)
                .unwrap_or(default.annotations_path),
            static_dir: config::var("STUDYBRIEF_STATIC_DIR").map(PathBuf::from),
        }
    }
}

pub(crate) struct AppState {
    pub(crate) analyzer: Analyzer,
    pub(crate) annotations: AnnotationStore,
}

pub(crate) fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/analyze", post(analyze))
        .route("/annotations", get(list_annotations).post(add_annotation));
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
