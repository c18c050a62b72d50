//! Deterministic stand-in for the certification statistics backend.
//!
//! Every endpoint is mounted under [`API_PREFIX`] and answers with the
//! `{code, message, data}` envelope. Figures are scaled per department so
//! that drilling down changes the numbers without any storage.

pub mod data;
pub mod error;
mod response;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

pub use error::MockError;

/// Path prefix the real backend serves its API under.
pub const API_PREFIX: &str = "/ai_transform_webapi";

fn api_routes() -> Router {
    Router::new()
        .route("/department-info/children", get(routes::department_children))
        .nest("/expert-cert-statistics", statistics_routes())
        .route(
            "/entry-level-manager/pl-tm-cert-statistics",
            get(routes::pl_tm_cert_statistics),
        )
        .route(
            "/personal-course/completion",
            get(routes::personal_course_completion),
        )
}

fn statistics_routes() -> Router {
    Router::new()
        .route("/employee-cert-statistics", get(routes::employee_cert_statistics))
        .route(
            "/competence-category-cert-statistics",
            get(routes::competence_category_cert_statistics),
        )
        .route(
            "/cadre-cert-statistics/by-maturity-and-job-category",
            get(routes::cadre_cert_statistics),
        )
        .route(
            "/cadre-cert-statistics/by-maturity-and-job-category-qualified",
            get(routes::cadre_qualified_statistics),
        )
        .route("/expert-ai-cert-statistics", get(routes::expert_cert_statistics))
        .route(
            "/expert-ai-qualified-statistics",
            get(routes::expert_qualified_statistics),
        )
        .route("/cadre-qualified-details", get(routes::cadre_qualified_details))
        .route(
            "/cadre-ai-certification-overview",
            get(routes::cadre_ai_certification_overview),
        )
        .route(
            "/overall-certification-trends",
            get(routes::overall_certification_trends),
        )
}

/// Full application router, including `/health` and a JSON 404 fallback.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .nest(API_PREFIX, api_routes())
        .fallback(routes::not_found)
}

/// Serve the mock on an already bound listener until the task is dropped.
pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(addr = %addr, prefix = API_PREFIX, "mock backend listening");
    axum::serve(listener, router()).await
}
