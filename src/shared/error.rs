use axum::{response::IntoResponse, Json};

/// Request-scoped errors surfaced to clients. Upstream causes are logged at
/// the call site and never included in the response body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Task not found")]
    TaskNotFound,
    #[error("AI service unavailable")]
    AiServiceUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        let status = match &self {
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::AiServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
