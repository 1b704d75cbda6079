use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use paginate::PaginateError;
use tracing::error;

/// JSON error body: status + short title + optional detail.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<PaginateError> for JsonApiError {
    fn from(e: PaginateError) -> Self {
        // Both failure kinds are terminal for the request.
        error!(error = %e, "pagination query failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            Some(e.to_string()),
        )
    }
}
