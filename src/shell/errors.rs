use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::shared::infrastructure::item_store::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(message) => ApiError::BadRequest(message),
            StoreError::NotFound(_) => ApiError::NotFound("Item not found".into()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::BadRequest("Content-Type must be application/json".into())
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(%status, error = %message, "request rejected");
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Handler for verbs that are not routed on a known path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Handler for paths outside the routing table.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".into())
}

/// Handler for `/items/` with nothing after the slash.
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("ID is required".into())
}
