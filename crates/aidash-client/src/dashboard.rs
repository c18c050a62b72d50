//! Dashboard aggregation: concurrent fan-out over the backend endpoints,
//! composed into the view models of `aidash-core`.
//!
//! Every fetch is soft. A failure is logged and the corresponding part of
//! the view degrades to empty instead of failing the whole dashboard.

use std::future::Future;
use std::sync::Arc;

use aidash_core::department::department_node;
use aidash_core::detail::appointment_records;
use aidash_core::overview::{cadre_ai_overview_rows, entry_level_manager_rows};
use aidash_core::view::DetailViewFilters;
use aidash_core::{
    AllStaffCharts, CadreAiOverviewRow, CertificationDashboard, CertificationTables, DashboardQuery,
    DashboardSources, DepartmentNode, DetailFilters, DetailView, EntryLevelManagerRow,
    FilterOptions, PersonalCourseCompletion, ROOT_DEPT_CODE,
};
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::api::ApiClient;
use crate::cache::DepartmentCache;
use crate::error::ClientError;

/// Resolve `fut`, logging and discarding any error.
///
/// Backend rejections log at `warn`, everything else at `error`.
async fn soft<T>(what: &'static str, fut: impl Future<Output = Result<T, ClientError>>) -> Option<T> {
    match fut.await {
        Ok(value) => Some(value),
        Err(err) if err.is_rejection() => {
            warn!(what, error = %err, "request rejected");
            None
        }
        Err(err) => {
            error!(what, error = %err, "request failed");
            None
        }
    }
}

pub struct Dashboard {
    api: ApiClient,
    departments: Arc<DepartmentCache>,
}

impl Dashboard {
    pub fn new(api: ApiClient, departments: Arc<DepartmentCache>) -> Self {
        Self { api, departments }
    }

    /// Dashboard backed by its own department cache.
    pub fn with_fresh_cache(api: ApiClient) -> Self {
        let departments = Arc::new(DepartmentCache::new(api.clone()));
        Self::new(api, departments)
    }

    pub fn departments(&self) -> &DepartmentCache {
        &self.departments
    }

    /// Build the certification dashboard for `query`.
    ///
    /// Tables whose fetch fails keep the rows in `previous`.
    pub async fn certification(
        &self,
        query: &DashboardQuery,
        previous: &CertificationTables,
    ) -> CertificationDashboard {
        let dept_code = query.dept_code();
        let role = query.role;
        info!(dept_code, role = %role, "loading certification dashboard");

        let (
            employee,
            competence,
            expert_cert,
            expert_qualified,
            cadre_cert,
            cadre_qualified,
            department_tree,
        ) = futures::join!(
            soft(
                "employee cert statistics",
                self.api.employee_cert_statistics(dept_code, role)
            ),
            soft(
                "competence category statistics",
                self.api.competence_category_cert_statistics(dept_code, role)
            ),
            soft(
                "expert cert statistics",
                self.api.expert_cert_statistics(dept_code)
            ),
            soft(
                "expert qualified statistics",
                self.api.expert_qualified_statistics(dept_code)
            ),
            soft(
                "cadre cert statistics",
                self.api.cadre_cert_statistics(dept_code)
            ),
            soft(
                "cadre qualified statistics",
                self.api.cadre_qualified_statistics(dept_code)
            ),
            self.department_tree(),
        );

        let sources = DashboardSources {
            employee,
            competence,
            expert_cert,
            expert_qualified,
            cadre_cert,
            cadre_qualified,
            department_tree,
        };
        CertificationDashboard::compose(role, sources, previous)
    }

    /// Two-level department tree: the root's children, each with its own
    /// children. A failed second-level lookup leaves that node a leaf.
    pub async fn department_tree(&self) -> Vec<DepartmentNode> {
        let Some(roots) = soft(
            "root departments",
            self.departments.children(ROOT_DEPT_CODE),
        )
        .await
        else {
            return Vec::new();
        };

        let children = join_all(roots.iter().map(|dept| {
            soft(
                "department children",
                self.departments.children(&dept.dept_code),
            )
        }))
        .await;

        roots
            .iter()
            .zip(children)
            .map(|(dept, kids)| {
                department_node(dept, kids.as_deref().map(Vec::as_slice).unwrap_or_default())
            })
            .collect()
    }

    pub async fn filter_options(&self) -> FilterOptions {
        FilterOptions::new(self.department_tree().await)
    }

    pub async fn qualified_details(&self, filters: &DetailFilters) -> DetailView {
        let records = soft(
            "qualified details",
            self.api.qualified_details(filters),
        )
        .await
        .map(|drill_down| appointment_records(&drill_down))
        .unwrap_or_default();
        info!(records = records.len(), "loaded detail records");

        DetailView {
            records,
            filters: DetailViewFilters::from(filters),
        }
    }

    pub async fn entry_level_managers(&self) -> Vec<EntryLevelManagerRow> {
        soft("pl/tm cert statistics", self.api.pl_tm_cert_statistics())
            .await
            .map(|stats| entry_level_manager_rows(&stats))
            .unwrap_or_default()
    }

    pub async fn cadre_ai_overview(&self) -> Vec<CadreAiOverviewRow> {
        soft(
            "cadre ai certification overview",
            self.api.cadre_ai_certification_overview(),
        )
        .await
        .map(|overview| cadre_ai_overview_rows(&overview))
        .unwrap_or_default()
    }

    /// Six static all-staff series; empty series when the request fails.
    pub async fn overall_trends(&self) -> AllStaffCharts {
        soft(
            "overall certification trends",
            self.api.overall_certification_trends(),
        )
        .await
        .unwrap_or_default()
    }

    /// Course completion with rates derived from the counts, or `None` when
    /// the request fails.
    pub async fn personal_courses(
        &self,
        account: Option<&str>,
    ) -> Option<PersonalCourseCompletion> {
        let mut completion = soft(
            "personal course completion",
            self.api.personal_course_completion(account),
        )
        .await?;
        completion.recompute_rates();
        info!(
            emp_num = %completion.emp_num,
            levels = completion.course_statistics.len(),
            "loaded course completion"
        );
        Some(completion)
    }
}
