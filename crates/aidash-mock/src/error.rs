use aidash_core::ApiResult;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::response::now_millis;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("{0}")]
    InvalidParameter(String),
    #[error("接口不存在: {0}")]
    NotFound(String),
}

impl MockError {
    pub fn status(&self) -> StatusCode {
        match self {
            MockError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            MockError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Error envelope with the HTTP status mirrored in `code`.
impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "mock request rejected");
        let body = ApiResult::<()>::failure(i64::from(status.as_u16()), self.to_string())
            .with_timestamp(now_millis());
        (status, Json(body)).into_response()
    }
}
