//! Canned-response transport shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;
use crate::http::{Query, Transport};

type Call = (String, Vec<(String, String)>);

/// Answers by path, or by `path?key=value` when a response is registered for
/// one of the request's query pairs. Unknown paths answer HTTP 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub(crate) fn with(mut self, key: &str, body: Value) -> Self {
        self.responses.insert(key.to_string(), body);
        self
    }

    pub(crate) fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .count()
    }

    pub(crate) fn last_query(&self, path: &str) -> Option<Vec<(String, String)>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, query)| query.clone())
    }

    fn lookup(&self, path: &str, query: &Query<'_>) -> Option<&Value> {
        query
            .iter()
            .find_map(|(k, v)| self.responses.get(&format!("{path}?{k}={v}")))
            .or_else(|| self.responses.get(path))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, ClientError> {
        let recorded = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.calls.lock().unwrap().push((path.to_string(), recorded));
        tokio::task::yield_now().await;

        self.lookup(path, query)
            .cloned()
            .ok_or_else(|| ClientError::Server {
                status: 404,
                body: format!("no canned response for {path}"),
            })
    }
}

/// Success envelope around `data`.
pub(crate) fn ok(data: Value) -> Value {
    serde_json::json!({"code": 200, "message": "success", "data": data})
}
