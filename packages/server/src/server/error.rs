use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that reach the API boundary. Scoring itself never fails, so only
/// bad requests end up here.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::Validation(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        };
        tracing::debug!(error = %self, "Rejecting request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::DefaultBodyLimit,
        http::{header::CONTENT_TYPE, Request},
        routing::post,
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo(payload: Result<Json<Value>, JsonRejection>) -> Result<Json<Value>, ApiError> {
        let Json(value) = payload?;
        Ok(Json(value))
    }

    async fn status_for(body: &str) -> StatusCode {
        let app = Router::new()
            .route("/", post(echo))
            .layer(DefaultBodyLimit::max(16));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_oversized_body_is_413_not_422() {
        assert_eq!(status_for(r#"{"html": "0123456789abcdef"}"#).await, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(status_for("{bad").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for("{}").await, StatusCode::OK);
    }
}
