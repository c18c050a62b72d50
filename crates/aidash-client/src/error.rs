use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("backend rejected request with code {code}: {message}")]
    Api { code: i64, message: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response from {path} carried no data")]
    MissingData { path: String },
    #[error("department lookup for {dept_id} failed")]
    DepartmentLookup {
        dept_id: String,
        source: Arc<ClientError>,
    },
}

impl ClientError {
    /// True when the backend answered but refused with a non-success code.
    pub fn is_rejection(&self) -> bool {
        match self {
            ClientError::Api { .. } => true,
            ClientError::DepartmentLookup { source, .. } => source.is_rejection(),
            _ => false,
        }
    }
}
