//! Typed endpoints of the statistics backend.

use std::sync::Arc;

use aidash_core::course::PersonalCourseCompletion;
use aidash_core::detail::{DetailFilters, EmployeeDrillDown};
use aidash_core::stats::{
    CadreCertStatistics, CadreQualifiedStatistics, CompetenceCategoryCertStatistics,
    EmployeeCertStatistics, ExpertCertStatistics, ExpertQualifiedStatistics,
};
use aidash_core::{
    AllStaffCharts, ApiResult, CadreAiCertificationOverview, DepartmentInfo, PlTmCertStatistics,
    Role,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ClientError;
use crate::http::{HttpTransport, Query, Transport};

pub const DEPARTMENT_CHILDREN: &str = "/department-info/children";
pub const EMPLOYEE_CERT_STATISTICS: &str = "/expert-cert-statistics/employee-cert-statistics";
pub const COMPETENCE_CATEGORY_CERT_STATISTICS: &str =
    "/expert-cert-statistics/competence-category-cert-statistics";
pub const CADRE_CERT_STATISTICS: &str =
    "/expert-cert-statistics/cadre-cert-statistics/by-maturity-and-job-category";
pub const CADRE_QUALIFIED_STATISTICS: &str =
    "/expert-cert-statistics/cadre-cert-statistics/by-maturity-and-job-category-qualified";
pub const EXPERT_CERT_STATISTICS: &str = "/expert-cert-statistics/expert-ai-cert-statistics";
pub const EXPERT_QUALIFIED_STATISTICS: &str =
    "/expert-cert-statistics/expert-ai-qualified-statistics";
pub const CADRE_QUALIFIED_DETAILS: &str = "/expert-cert-statistics/cadre-qualified-details";
pub const CADRE_AI_CERTIFICATION_OVERVIEW: &str =
    "/expert-cert-statistics/cadre-ai-certification-overview";
pub const OVERALL_CERTIFICATION_TRENDS: &str =
    "/expert-cert-statistics/overall-certification-trends";
pub const PL_TM_CERT_STATISTICS: &str = "/entry-level-manager/pl-tm-cert-statistics";
pub const PERSONAL_COURSE_COMPLETION: &str = "/personal-course/completion";

/// Client for the backend's envelope-wrapped endpoints.
///
/// Every call unwraps the `{code, message, data}` envelope: a non-200 code
/// becomes [`ClientError::Api`] and a success without `data` becomes
/// [`ClientError::MissingData`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(base_url)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<T, ClientError> {
        let body = self.transport.get_json(path, query).await?;
        let envelope: ApiResult<T> = serde_json::from_value(body)?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            });
        }
        debug!(path, "envelope accepted");
        envelope.data.ok_or_else(|| ClientError::MissingData {
            path: path.to_string(),
        })
    }

    pub async fn department_children(
        &self,
        dept_id: &str,
    ) -> Result<Vec<DepartmentInfo>, ClientError> {
        self.fetch(DEPARTMENT_CHILDREN, &[("deptId", dept_id.to_string())])
            .await
    }

    pub async fn employee_cert_statistics(
        &self,
        dept_code: &str,
        role: Role,
    ) -> Result<EmployeeCertStatistics, ClientError> {
        self.fetch(EMPLOYEE_CERT_STATISTICS, &role_query(dept_code, role))
            .await
    }

    pub async fn competence_category_cert_statistics(
        &self,
        dept_code: &str,
        role: Role,
    ) -> Result<CompetenceCategoryCertStatistics, ClientError> {
        self.fetch(COMPETENCE_CATEGORY_CERT_STATISTICS, &role_query(dept_code, role))
            .await
    }

    pub async fn expert_cert_statistics(
        &self,
        dept_code: &str,
    ) -> Result<ExpertCertStatistics, ClientError> {
        self.fetch(EXPERT_CERT_STATISTICS, &dept_query(dept_code))
            .await
    }

    pub async fn expert_qualified_statistics(
        &self,
        dept_code: &str,
    ) -> Result<ExpertQualifiedStatistics, ClientError> {
        self.fetch(EXPERT_QUALIFIED_STATISTICS, &dept_query(dept_code))
            .await
    }

    pub async fn cadre_cert_statistics(
        &self,
        dept_code: &str,
    ) -> Result<CadreCertStatistics, ClientError> {
        self.fetch(CADRE_CERT_STATISTICS, &dept_query(dept_code))
            .await
    }

    pub async fn cadre_qualified_statistics(
        &self,
        dept_code: &str,
    ) -> Result<CadreQualifiedStatistics, ClientError> {
        self.fetch(CADRE_QUALIFIED_STATISTICS, &dept_query(dept_code))
            .await
    }

    pub async fn qualified_details(
        &self,
        filters: &DetailFilters,
    ) -> Result<EmployeeDrillDown, ClientError> {
        self.fetch(CADRE_QUALIFIED_DETAILS, &filters.query()).await
    }

    pub async fn pl_tm_cert_statistics(&self) -> Result<PlTmCertStatistics, ClientError> {
        self.fetch(PL_TM_CERT_STATISTICS, &[]).await
    }

    pub async fn cadre_ai_certification_overview(
        &self,
    ) -> Result<CadreAiCertificationOverview, ClientError> {
        self.fetch(CADRE_AI_CERTIFICATION_OVERVIEW, &[]).await
    }

    pub async fn overall_certification_trends(&self) -> Result<AllStaffCharts, ClientError> {
        self.fetch(OVERALL_CERTIFICATION_TRENDS, &[]).await
    }

    /// Course completion of `account`, or of the backend's session user when
    /// `None`.
    pub async fn personal_course_completion(
        &self,
        account: Option<&str>,
    ) -> Result<PersonalCourseCompletion, ClientError> {
        match account {
            Some(account) => {
                self.fetch(PERSONAL_COURSE_COMPLETION, &[("account", account.to_string())])
                    .await
            }
            None => self.fetch(PERSONAL_COURSE_COMPLETION, &[]).await,
        }
    }
}

fn dept_query(dept_code: &str) -> [(&'static str, String); 1] {
    [("deptCode", dept_code.to_string())]
}

fn role_query(dept_code: &str, role: Role) -> [(&'static str, String); 2] {
    [
        ("deptCode", dept_code.to_string()),
        ("personType", role.code().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    fn client(fake: FakeTransport) -> (ApiClient, Arc<FakeTransport>) {
        let fake = Arc::new(fake);
        (ApiClient::new(fake.clone()), fake)
    }

    #[tokio::test]
    async fn unwraps_success_envelope() {
        let (api, fake) = client(FakeTransport::default().with(
            EMPLOYEE_CERT_STATISTICS,
            json!({
                "code": 200,
                "message": "success",
                "data": {
                    "departmentStatistics": [
                        {"deptCode": "d1", "deptName": "运营部", "totalCount": 10,
                         "certifiedCount": 4, "certRate": 40.0}
                    ],
                    "totalStatistics": null
                }
            }),
        ));
        let stats = api.employee_cert_statistics("0", Role::Expert).await.unwrap();
        assert_eq!(stats.department_statistics.len(), 1);
        assert_eq!(stats.department_statistics[0].certified_count, 4);

        let query = fake.last_query(EMPLOYEE_CERT_STATISTICS).unwrap();
        assert_eq!(
            query,
            vec![
                ("deptCode".to_string(), "0".to_string()),
                ("personType".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn non_200_code_is_an_api_error() {
        let (api, _) = client(FakeTransport::default().with(
            EXPERT_CERT_STATISTICS,
            json!({"code": 500, "message": "查询失败", "data": null}),
        ));
        let err = api.expert_cert_statistics("0").await.unwrap_err();
        match err {
            ClientError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "查询失败");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_without_data_is_missing_data() {
        let (api, _) = client(FakeTransport::default().with(
            PL_TM_CERT_STATISTICS,
            json!({"code": 200, "message": "success", "data": null}),
        ));
        let err = api.pl_tm_cert_statistics().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingData { .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let (api, _) = client(
            FakeTransport::default().with(CADRE_CERT_STATISTICS, json!({"message": "no code"})),
        );
        let err = api.cadre_cert_statistics("0").await.unwrap_err();
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn course_completion_passes_account() {
        let (api, fake) = client(FakeTransport::default().with(
            PERSONAL_COURSE_COMPLETION,
            json!({"code": 200, "message": "查询成功",
                   "data": {"empNum": "200001", "empName": "李四", "courseStatistics": []}}),
        ));
        let completion = api.personal_course_completion(Some("200001")).await.unwrap();
        assert_eq!(completion.emp_name, "李四");
        assert_eq!(
            fake.last_query(PERSONAL_COURSE_COMPLETION).unwrap(),
            vec![("account".to_string(), "200001".to_string())]
        );

        api.personal_course_completion(None).await.unwrap();
        assert!(fake.last_query(PERSONAL_COURSE_COMPLETION).unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_filters_become_query() {
        let (api, fake) = client(FakeTransport::default().with(
            CADRE_QUALIFIED_DETAILS,
            json!({"code": 200, "message": "success", "data": {"employeeDetails": []}}),
        ));
        let filters = DetailFilters {
            maturity: aidash_core::MaturityFilter::L5,
            ..Default::default()
        };
        let details = api.qualified_details(&filters).await.unwrap();
        assert!(details.employee_details.is_empty());

        let query = fake.last_query(CADRE_QUALIFIED_DETAILS).unwrap();
        assert!(query.contains(&("aiMaturity".to_string(), "L5".to_string())));
        assert!(query.contains(&("queryType".to_string(), "1".to_string())));
    }
}
