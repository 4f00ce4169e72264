//! HTTP error rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use coords::protocol::ProtocolError;
use coords::CoordsError;

/// Wrapper turning service errors into `{"error": "..."}` JSON responses.
#[derive(Debug)]
pub struct AppError(pub CoordsError);

impl From<CoordsError> for AppError {
    fn from(err: CoordsError) -> Self {
        Self(err)
    }
}

impl From<ProtocolError> for AppError {
    fn from(err: ProtocolError) -> Self {
        Self(CoordsError::Protocol(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }
        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
