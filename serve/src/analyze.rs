//! `POST /analyze`.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use studybrief::{AnalysisRequest, AnalysisResult, AnalyzeError, Analyzer};
use tracing::{error, info_span, warn, Instrument};

use super::app::AppState;
use super::response::{AnalyzeResponse, ApiError, ANALYZE_FAILED};

/// The body is taken raw so malformed JSON gets the same 400 as a missing `text`.
pub(crate) async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request_id = uuid::Uuid::new_v4();
    let outcome = run(&state.analyzer, &body)
        .instrument(info_span!("analyze", %request_id))
        .await;

    match outcome {
        Ok(analysis) => Ok(Json(AnalyzeResponse::success(analysis))),
        Err(e) => match e.as_validation() {
            Some(v) => {
                warn!(%request_id, reason = %v, "analyze rejected");
                Err(ApiError::BadRequest(v.to_string()))
            }
            None => {
                error!(%request_id, error = %e, "Error in analyze");
                Err(ApiError::Internal(ANALYZE_FAILED.to_string()))
            }
        },
    }
}

async fn run(analyzer: &Analyzer, body: &[u8]) -> Result<AnalysisResult, AnalyzeError> {
    let request = AnalysisRequest::from_json_body(body)?;
    analyzer.analyze(&request).await
}
