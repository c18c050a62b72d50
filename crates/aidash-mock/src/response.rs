use aidash_core::ApiResult;
use axum::Json;
use chrono::Utc;

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Success envelope around `data`.
pub(crate) fn success<T>(data: T, message: &str) -> Json<ApiResult<T>> {
    let mut body = ApiResult::success(data).with_timestamp(now_millis());
    body.message = message.to_string();
    Json(body)
}
