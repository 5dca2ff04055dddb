//! `GET /annotations` and `POST /annotations`.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use studybrief::AnnotationError;
use tracing::error;

use super::app::AppState;
use super::response::{ApiError, SavedResponse};

fn internal(e: AnnotationError) -> ApiError {
    let cause = std::error::Error::source(&e).map(ToString::to_string);
    error!(error = %e, cause = ?cause, "annotation store");
    ApiError::Internal(e.to_string())
}

pub(crate) async fn list_annotations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    state.annotations.list().await.map(Json).map_err(internal)
}

pub(crate) async fn add_annotation(
    State(state): State<Arc<AppState>>,
    Json(annotation): Json<Value>,
) -> Result<Json<SavedResponse>, ApiError> {
    state
        .annotations
        .append(annotation)
        .await
        .map_err(internal)?;
    Ok(Json(SavedResponse { success: true }))
}
