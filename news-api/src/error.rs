//! Mapping of news errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use news_core::NewsError;
use tracing::error;

/// Error returned from handlers; the body is `{"message": ...}`
#[derive(Debug)]
pub struct ApiError(pub NewsError);

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            NewsError::NotFound { .. } => StatusCode::NOT_FOUND,
            NewsError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            NewsError::MalformedShard { .. } | NewsError::DirectoryUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        (
            status,
            Json(serde_json::json!({
                "message": self.0.user_message()
            })),
        )
            .into_response()
    }
}
