use serde::{Deserialize, Serialize};

/// Envelope code of a successful response.
pub const SUCCESS_CODE: i64 = 200;

/// Response envelope wrapping every backend payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "success".to_string(),
            data: Some(data),
            timestamp: None,
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_and_failure() {
        let ok: ApiResult<Vec<u32>> =
            serde_json::from_str(r#"{"code":200,"message":"success","data":[1,2]}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.data, Some(vec![1, 2]));

        let err: ApiResult<Vec<u32>> =
            serde_json::from_str(r#"{"code":500,"message":"boom","data":null,"timestamp":1}"#)
                .unwrap();
        assert!(!err.is_success());
        assert_eq!(err.data, None);
        assert_eq!(err.timestamp, Some(1));
    }

    #[test]
    fn failure_serializes_null_data() {
        let value = serde_json::to_value(ApiResult::<()>::failure(400, "bad")).unwrap();
        assert_eq!(value["code"], 400);
        assert!(value["data"].is_null());
        assert!(value.get("timestamp").is_none());
    }
}
