use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::StoreError;

/// Error returned by every handler, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        let status = match &e {
            StoreError::InvalidSortParameter(_) | StoreError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::Connection(_) | StoreError::Query(_) | StoreError::Timeout(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

/// Logs a store failure at a level matching who caused it and converts it.
pub fn log_store_error(op: &'static str, e: StoreError) -> ApiError {
    let api = ApiError::from(e);
    if api.status.is_server_error() {
        tracing::error!(op, error = %api.message, "store operation failed");
    } else {
        tracing::warn!(op, status = %api.status, error = %api.message, "request rejected");
    }
    api
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (StoreError::InvalidSortParameter("x".into()), StatusCode::BAD_REQUEST),
            (StoreError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (StoreError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (StoreError::Conflict("x".into()), StatusCode::CONFLICT),
            (StoreError::Connection("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StoreError::Query("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                StoreError::Timeout(std::time::Duration::from_secs(1)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[tokio::test]
    async fn renders_error_envelope() {
        let resp = ApiError::new(StatusCode::BAD_REQUEST, "bad sort").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "bad sort" }));
    }
}
