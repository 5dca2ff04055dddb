//! JSON bodies on the wire and the error-to-HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use studybrief::AnalysisResult;

/// Only message a caller ever sees for a failed analysis.
pub const ANALYZE_FAILED: &str = "Could not analyze the text. Please try again.";

pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub analysis: AnalysisResult,
}

impl AnalyzeResponse {
    pub fn success(analysis: AnalysisResult) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            analysis,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedResponse {
    pub success: bool,
}

/// Handler failure. The message is already caller-safe; details were logged by the handler.
#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
