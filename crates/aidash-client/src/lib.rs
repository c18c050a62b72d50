//! Client side of the AI certification dashboard: HTTP transport, typed
//! endpoints, the department-children cache, and the dashboard aggregator.

pub mod api;
pub mod cache;
pub mod dashboard;
pub mod error;
pub mod http;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use cache::DepartmentCache;
pub use dashboard::Dashboard;
pub use error::ClientError;
pub use http::{HttpTransport, Transport};
