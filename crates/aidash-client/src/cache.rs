//! Memoised department-children lookups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use aidash_core::{DepartmentInfo, ROOT_DEPT_CODE};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::error::ClientError;

type Children = Arc<Vec<DepartmentInfo>>;
type Lookup = Shared<BoxFuture<'static, Result<Children, Arc<ClientError>>>>;

/// Children of each department, fetched at most once per cache.
///
/// Concurrent callers asking for the same department share one in-flight
/// request. A failed lookup is evicted so the next caller retries, and the
/// failure is returned to every caller that was waiting on it.
pub struct DepartmentCache {
    api: ApiClient,
    entries: Mutex<HashMap<String, Lookup>>,
}

impl DepartmentCache {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Children of `dept_id`, from the cache when available.
    pub async fn children(&self, dept_id: &str) -> Result<Children, ClientError> {
        self.lookup(dept_id, false).await
    }

    /// Fetch the children of `dept_id` again, replacing any cached entry.
    pub async fn refresh(&self, dept_id: &str) -> Result<Children, ClientError> {
        self.lookup(dept_id, true).await
    }

    /// Number of cached or in-flight lookups.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Lookup>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn lookup(&self, dept_id: &str, force_refresh: bool) -> Result<Children, ClientError> {
        let key = match dept_id.trim() {
            "" => ROOT_DEPT_CODE.to_string(),
            id => id.to_string(),
        };

        let lookup = {
            let mut entries = self.entries();
            match entries.get(&key) {
                Some(existing) if !force_refresh => {
                    debug!(dept_id = %key, "department children cache hit");
                    existing.clone()
                }
                _ => {
                    let api = self.api.clone();
                    let id = key.clone();
                    let fresh = async move {
                        api.department_children(&id)
                            .await
                            .map(Arc::new)
                            .map_err(Arc::new)
                    }
                    .boxed()
                    .shared();
                    entries.insert(key.clone(), fresh.clone());
                    fresh
                }
            }
        };

        match lookup.clone().await {
            Ok(children) => Ok(children),
            Err(source) => {
                let mut entries = self.entries();
                if entries.get(&key).is_some_and(|current| current.ptr_eq(&lookup)) {
                    entries.remove(&key);
                }
                warn!(dept_id = %key, error = %source, "department lookup failed");
                Err(ClientError::DepartmentLookup {
                    dept_id: key,
                    source,
                })
            }
        }
    }
}
